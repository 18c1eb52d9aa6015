use seriesprep::core::{
    DataFrame, DataLink, Field, FieldConfig, FieldOrigin, FieldState, FieldType, Permutation,
    ScopedVar, ScopedVars, Value, Values,
};
use seriesprep::display::Theme;
use seriesprep::links::{default_interpolator, InterpolateFn, LinksSupplier, ValueLinkConfig};
use seriesprep::regenerate_links_supplier;
use std::sync::{Arc, Mutex};

fn linked_config(url: &str) -> FieldConfig {
    FieldConfig {
        links: vec![DataLink {
            title: "Open ${host}".to_string(),
            url: url.to_string(),
            target_blank: true,
        }],
        ..FieldConfig::default()
    }
}

fn origin(frame_index: usize, field_index: usize) -> FieldState {
    let mut scoped_vars = ScopedVars::new();
    scoped_vars.insert("host".to_string(), ScopedVar::new("web-1", "web-1"));
    FieldState {
        origin: Some(FieldOrigin {
            frame_index,
            field_index,
        }),
        scoped_vars: Some(scoped_vars),
        ..FieldState::default()
    }
}

fn source_frame() -> DataFrame {
    DataFrame::new(vec![
        Field::new(
            "time",
            FieldType::Time,
            vec![Value::Number(3000.0), Value::Number(1000.0), Value::Number(2000.0)],
        ),
        Field::new(
            "value",
            FieldType::Number,
            vec![Value::Number(30.0), Value::Number(10.0), Value::Number(20.0)],
        ),
        Field::new(
            "label",
            FieldType::String,
            vec![Value::from("c"), Value::from("a"), Value::from("b")],
        ),
    ])
}

#[test]
fn test_sorted_field_reorders_source_strings() {
    let source = source_frame();
    let order = Permutation::sorting(&source.fields[0].values);

    let time = Field::new("time", FieldType::Time, order.apply(&source.fields[0].values));
    let value = Field::new("value", FieldType::Number, order.apply(&source.fields[1].values))
        .with_config(linked_config("/d?label=${__data.fields.label}&v=${__value.raw}"))
        .with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![time, value]);

    regenerate_links_supplier(&mut aligned, &[source], &default_interpolator(), "utc");

    let supplier = aligned.fields[1].get_links.as_ref().expect("links regenerated");
    assert_eq!(supplier.frame().fields.len(), 3);
    assert_eq!(
        supplier.frame().fields[2].values.to_vec(),
        vec![Value::from("a"), Value::from("b"), Value::from("c")]
    );

    let links = supplier.links(&ValueLinkConfig::row(0));
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].href, "/d?label=a&v=10");
    assert_eq!(links[0].title, "Open web-1");
    assert_eq!(links[0].target.as_deref(), Some("_blank"));
}

#[test]
fn test_unsorted_field_attaches_strings_as_is() {
    let source = source_frame();
    let value = Field::new("value", FieldType::Number, source.fields[1].values.clone())
        .with_config(linked_config("/d?label=${__data.fields.label}"))
        .with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![source.fields[0].clone(), value]);

    regenerate_links_supplier(&mut aligned, &[source], &default_interpolator(), "utc");

    let links = aligned.fields[1]
        .get_links
        .as_ref()
        .unwrap()
        .links(&ValueLinkConfig::row(0));
    assert_eq!(links[0].href, "/d?label=c");
}

#[test]
fn test_fields_without_origin_or_frame_are_skipped() {
    let source = source_frame();
    let no_origin = Field::new("a", FieldType::Number, vec![Value::Number(1.0)]);
    let bad_origin = Field::new("b", FieldType::Number, vec![Value::Number(1.0)]).with_state(origin(7, 0));
    let good = Field::new("c", FieldType::Number, vec![Value::Number(1.0)]).with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![no_origin, bad_origin, good]);

    let returned = regenerate_links_supplier(&mut aligned, &[source], &default_interpolator(), "utc");
    assert_eq!(returned.fields.len(), 3);

    assert!(aligned.fields[0].get_links.is_none());
    assert!(aligned.fields[1].get_links.is_none());
    assert!(aligned.fields[2].get_links.is_some());
}

#[test]
fn test_temp_frame_keeps_aligned_length() {
    let source = source_frame();
    let value = Field::new("value", FieldType::Number, source.fields[1].values.clone()).with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![source.fields[0].clone(), value]);

    regenerate_links_supplier(&mut aligned, &[source], &default_interpolator(), "utc");

    let supplier = aligned.fields[1].get_links.as_ref().unwrap();
    assert_eq!(supplier.frame().length, 3);
    assert_eq!(supplier.time_zone(), "utc");
}

#[test]
fn test_custom_interpolator_receives_scoped_vars() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let replace: InterpolateFn = Arc::new(move |template: &str, vars: &ScopedVars| {
        recorder.lock().unwrap().push(template.to_string());
        format!("{}|{}", template, vars.contains_key("host"))
    });

    let source = source_frame();
    let value = Field::new("value", FieldType::Number, source.fields[1].values.clone())
        .with_config(linked_config("/a\n/b"))
        .with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![value]);

    regenerate_links_supplier(&mut aligned, &[source], &replace, "browser");
    let links = aligned.fields[0]
        .get_links
        .as_ref()
        .unwrap()
        .links(&ValueLinkConfig::default());

    assert_eq!(links[0].href, "/a/b|true");
    assert_eq!(seen.lock().unwrap().as_slice(), &["/a/b".to_string(), "Open ${host}".to_string()]);
}

#[test]
fn test_field_without_links_yields_nothing() {
    let source = source_frame();
    let value = Field::new("value", FieldType::Number, Values::from(vec![Value::Number(1.0)])).with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![value]);

    regenerate_links_supplier(&mut aligned, &[source], &default_interpolator(), "utc");

    let supplier = aligned.fields[0].get_links.as_ref().unwrap();
    assert!(supplier.links(&ValueLinkConfig::row(0)).is_empty());
}

#[test]
fn test_time_text_follows_named_zone() {
    let source = source_frame();
    let value = Field::new("value", FieldType::Number, source.fields[1].values.clone())
        .with_config(linked_config("/d?at=${__data.fields.time}"))
        .with_state(origin(0, 1));
    let mut aligned = DataFrame::new(vec![source.fields[0].clone(), value]);

    regenerate_links_supplier(&mut aligned, &[source], &default_interpolator(), "America/New_York");

    let links = aligned.fields[1]
        .get_links
        .as_ref()
        .unwrap()
        .links(&ValueLinkConfig::row(0));
    assert_eq!(links[0].href, "/d?at=1969-12-31 19:00:03");
}

#[test]
fn test_supplier_theme_defaults_to_dark() {
    let frame = Arc::new(source_frame());
    let supplier = LinksSupplier::new(Arc::clone(&frame), 1, ScopedVars::new(), default_interpolator(), "utc");
    assert_eq!(supplier.theme().name, "dark");

    let light = supplier.with_theme(Theme::light());
    assert_eq!(light.theme().name, "light");
    assert!(!light.theme().is_dark);
}
