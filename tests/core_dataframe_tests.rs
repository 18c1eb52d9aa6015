use seriesprep::core::{
    DataFrame, Field, FieldType, InsertNulls, LineInterpolation, Permutation, Value, Values,
};
use seriesprep::FrameError;

#[test]
fn test_dataframe_from_fields() {
    let df = DataFrame::new(vec![
        Field::new("time", FieldType::Time, vec![Value::Number(1.0), Value::Number(2.0)]),
        Field::new("value", FieldType::Number, vec![Value::Number(10.0), Value::Null]),
    ])
    .with_name("cpu");

    assert_eq!(df.length, 2);
    assert_eq!(df.name.as_deref(), Some("cpu"));
    assert_eq!(df.field("value").unwrap().values.get(1), &Value::Null);
    assert_eq!(df.first_field_of_type(FieldType::Time).unwrap().name, "time");
}

#[test]
fn test_dataframe_from_json() {
    let json = r#"{
        "name": "A",
        "refId": "A",
        "fields": [
            { "name": "time", "type": "time", "config": { "interval": 1000 }, "values": [1000, 2000] },
            { "name": "up", "type": "boolean",
              "config": { "unit": "bool_on_off", "custom": { "lineInterpolation": "stepBefore", "insertNulls": false, "fillOpacity": 10 } },
              "values": [true, null] },
            { "name": "trace", "type": "trace", "values": [null, null] }
        ]
    }"#;

    let mut df: DataFrame = serde_json::from_str(json).unwrap();
    df.validate().unwrap();

    assert_eq!(df.length, 2);
    assert_eq!(df.fields[0].config.interval, Some(1000.0));

    let up = &df.fields[1];
    assert_eq!(up.field_type, FieldType::Boolean);
    assert_eq!(up.config.custom.line_interpolation, Some(LineInterpolation::StepBefore));
    assert_eq!(up.config.custom.insert_nulls, Some(InsertNulls::Enabled(false)));
    assert_eq!(up.config.custom.extra.get("fillOpacity"), Some(&serde_json::json!(10)));

    assert_eq!(df.fields[2].field_type, FieldType::Other);
}

#[test]
fn test_validate_rejects_ragged_fields() {
    let mut df = DataFrame::new(vec![
        Field::new("time", FieldType::Time, vec![Value::Number(1.0), Value::Number(2.0)]),
        Field::new("value", FieldType::Number, vec![Value::Number(10.0)]),
    ]);

    match df.validate() {
        Err(FrameError::LengthMismatch { field, expected, actual, .. }) => {
            assert_eq!(field, "value");
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected length mismatch, got {:?}", other),
    }
}

#[test]
fn test_permutation_applies_to_other_sequences() {
    let times: Values = vec![Value::Number(3.0), Value::Number(1.0), Value::Number(2.0)].into();
    let labels: Values = vec![Value::from("c"), Value::from("a"), Value::from("b")].into();

    let order = Permutation::sorting(&times);
    let sorted_labels = order.apply(&labels);

    assert_eq!(sorted_labels.order(), Some(&order));
    assert_eq!(
        sorted_labels.to_vec(),
        vec![Value::from("a"), Value::from("b"), Value::from("c")]
    );
    // the view reads through to the original storage
    assert!(sorted_labels.shares_storage(&labels));
}

#[test]
fn test_field_equality_ignores_runtime_capabilities() {
    use seriesprep::display::{DisplayProcessor, Theme};

    let plain = Field::new("v", FieldType::Number, vec![Value::Number(1.0)]);
    let mut with_display = plain.clone();
    with_display.display = Some(DisplayProcessor::new(&plain, &Theme::dark(), None));

    assert_eq!(plain, with_display);
}

#[test]
fn test_values_serialize_in_read_order() {
    let view = Values::sorted(
        vec![Value::Number(2.0), Value::Number(1.0)],
        Permutation::new(vec![1, 0]),
    );
    assert_eq!(serde_json::to_string(&view).unwrap(), "[1.0,2.0]");
}
