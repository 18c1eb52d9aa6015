/// One zone per requested entry, empty entries replaced by `fallback`.
/// With nothing requested the result is just `[fallback]`.
pub fn normalize_timezones(requested: Option<&[String]>, fallback: &str) -> Vec<String> {
    match requested {
        Some(zones) if !zones.is_empty() => zones
            .iter()
            .map(|zone| {
                if zone.is_empty() {
                    fallback.to_string()
                } else {
                    zone.clone()
                }
            })
            .collect(),
        _ => vec![fallback.to_string()],
    }
}
