use seriesprep::normalize_timezones;

fn zones(list: &[&str]) -> Vec<String> {
    list.iter().map(|z| z.to_string()).collect()
}

#[test]
fn test_missing_request_uses_fallback() {
    assert_eq!(normalize_timezones(None, "UTC"), zones(&["UTC"]));
}

#[test]
fn test_empty_request_uses_fallback() {
    assert_eq!(normalize_timezones(Some(Vec::new().as_slice()), "UTC"), zones(&["UTC"]));
}

#[test]
fn test_blank_entries_are_replaced_in_place() {
    let requested = zones(&["", "America/New_York", ""]);
    assert_eq!(
        normalize_timezones(Some(requested.as_slice()), "UTC"),
        zones(&["UTC", "America/New_York", "UTC"])
    );
}

#[test]
fn test_explicit_zones_pass_through() {
    let requested = zones(&["Europe/Berlin", "browser"]);
    assert_eq!(normalize_timezones(Some(requested.as_slice()), "UTC"), requested);
}
