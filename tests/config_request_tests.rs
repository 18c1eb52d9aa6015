use seriesprep::core::Value;
use seriesprep::{FrameError, PrepareRequest};
use std::io::Write;
use tempfile::NamedTempFile;

const REQUEST: &str = r#"{
    "timeRange": { "from": 0, "to": 4000 },
    "timezones": ["", "Europe/Berlin"],
    "theme": "light",
    "frames": [
        {
            "name": "A",
            "fields": [
                { "name": "time", "type": "time", "config": { "interval": 1000 }, "values": [1000, 2000] },
                { "name": "up", "type": "boolean", "values": [true, false] }
            ]
        },
        {
            "name": "table",
            "fields": [
                { "name": "host", "type": "string", "values": ["a"] }
            ]
        }
    ]
}"#;

fn write_request(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_run_request() {
    let file = write_request(REQUEST);

    let request = PrepareRequest::from_path(file.path()).unwrap();
    assert_eq!(request.frames.len(), 2);
    assert_eq!(request.frames[0].length, 2);

    let theme = request.resolve_theme("dark").unwrap();
    assert_eq!(theme.name, "light");

    let response = request.run(&theme, "browser");
    assert_eq!(response.timezones, vec!["browser", "Europe/Berlin"]);

    let frames = response.frames.expect("frame A is graphable");
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].name.as_deref(), Some("A"));
    // padded on both sides by the time range
    assert_eq!(frames[0].length, 4);
    assert_eq!(
        frames[0].fields[1].values.to_vec(),
        vec![Value::Null, Value::Number(1.0), Value::Number(0.0), Value::Null]
    );
}

#[test]
fn test_response_serializes_null_when_nothing_graphable() {
    let request = PrepareRequest::from_json_str(r#"{ "frames": [] }"#).unwrap();
    let theme = request.resolve_theme("dark").unwrap();

    let json = serde_json::to_value(request.run(&theme, "utc")).unwrap();

    assert_eq!(json, serde_json::json!({ "frames": null, "timezones": ["utc"] }));
}

#[test]
fn test_missing_file_reports_path() {
    let err = PrepareRequest::from_path("/nonexistent/request.json").unwrap_err();
    match err {
        FrameError::Io { path, .. } => assert!(path.ends_with("request.json")),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = PrepareRequest::from_json_str("{ frames: ").unwrap_err();
    assert!(matches!(err, FrameError::Json(_)));
}

#[test]
fn test_ragged_frame_is_rejected() {
    let json = r#"{ "frames": [ { "fields": [
        { "name": "time", "type": "time", "values": [1, 2] },
        { "name": "v", "type": "number", "values": [1] }
    ] } ] }"#;

    let err = PrepareRequest::from_json_str(json).unwrap_err();
    assert!(matches!(err, FrameError::LengthMismatch { .. }));
}

#[test]
fn test_unknown_theme_is_rejected() {
    let request = PrepareRequest::from_json_str(r#"{ "theme": "neon" }"#).unwrap();
    assert!(matches!(request.resolve_theme("dark"), Err(FrameError::UnknownTheme(_))));
}
