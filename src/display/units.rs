//! Unit registry.
//!
//! Every unit is submitted to an `inventory` collection, so formatters defined
//! anywhere in the crate are found by id at runtime.

/// Formatted text split into its parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormattedValue {
    pub text: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl FormattedValue {
    fn plain(text: String) -> Self {
        Self {
            text,
            prefix: None,
            suffix: None,
        }
    }

    fn suffixed(text: String, suffix: &str) -> Self {
        Self {
            text,
            prefix: None,
            suffix: Some(suffix.to_string()),
        }
    }
}

pub type ValueFormatter = fn(f64, Option<usize>) -> FormattedValue;

pub struct UnitFormat {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub format: ValueFormatter,
}

inventory::collect!(UnitFormat);

pub const BOOL_UNIT: &str = "bool";

/// Boolean units all share the `bool` prefix.
pub fn is_boolean_unit(unit: Option<&str>) -> bool {
    unit.is_some_and(|u| u.starts_with(BOOL_UNIT))
}

pub fn find_unit(id: &str) -> Option<&'static UnitFormat> {
    inventory::iter::<UnitFormat>
        .into_iter()
        .find(|unit| unit.id == id)
}

/// All registered units, sorted by category then id.
pub fn all_units() -> Vec<&'static UnitFormat> {
    let mut units: Vec<&'static UnitFormat> = inventory::iter::<UnitFormat>.into_iter().collect();
    units.sort_by(|a, b| (a.category, a.id).cmp(&(b.category, b.id)));
    units
}

/// Format `value` with `unit`. Missing or empty units format as plain
/// numbers; unknown units become a suffix.
pub fn format_value(unit: Option<&str>, value: f64, decimals: Option<usize>) -> FormattedValue {
    match unit.filter(|u| !u.is_empty()) {
        None => format_none(value, decimals),
        Some(id) => match find_unit(id) {
            Some(found) => (found.format)(value, decimals),
            None => FormattedValue::suffixed(to_fixed(value, decimals), &format!(" {}", id)),
        },
    }
}

/// Fixed-point text. Without explicit decimals the precision follows the
/// magnitude and trailing zeros are trimmed.
pub fn to_fixed(value: f64, decimals: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let text = match decimals {
        Some(d) => format!("{:.*}", d, value),
        None => {
            let text = format!("{:.*}", auto_decimals(value), value);
            if text.contains('.') {
                text.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                text
            }
        }
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn auto_decimals(value: f64) -> usize {
    if value == 0.0 {
        return 0;
    }
    let magnitude = value.abs().log10().floor() as i32;
    (2 - magnitude).clamp(0, 6) as usize
}

fn scaled(value: f64, decimals: Option<usize>, factor: f64, suffixes: &[&str]) -> FormattedValue {
    let mut scaled = value;
    let mut step = 0;
    while scaled.abs() >= factor && step + 1 < suffixes.len() {
        scaled /= factor;
        step += 1;
    }
    FormattedValue::suffixed(to_fixed(scaled, decimals), suffixes[step])
}

fn format_none(value: f64, decimals: Option<usize>) -> FormattedValue {
    FormattedValue::plain(to_fixed(value, decimals))
}

fn format_short(value: f64, decimals: Option<usize>) -> FormattedValue {
    let mut formatted = scaled(value, decimals, 1000.0, &["", " K", " Mil", " Bil", " Tri"]);
    if formatted.suffix.as_deref() == Some("") {
        formatted.suffix = None;
    }
    formatted
}

fn format_percent(value: f64, decimals: Option<usize>) -> FormattedValue {
    FormattedValue::suffixed(to_fixed(value, decimals), "%")
}

fn format_percent_unit(value: f64, decimals: Option<usize>) -> FormattedValue {
    FormattedValue::suffixed(to_fixed(value * 100.0, decimals), "%")
}

fn format_bytes(value: f64, decimals: Option<usize>) -> FormattedValue {
    scaled(value, decimals, 1024.0, &[" B", " KiB", " MiB", " GiB", " TiB", " PiB"])
}

fn format_duration(ms: f64, decimals: Option<usize>) -> FormattedValue {
    const STEPS: [(f64, &str); 5] = [
        (1.0, " ms"),
        (1000.0, " s"),
        (60_000.0, " min"),
        (3_600_000.0, " hour"),
        (86_400_000.0, " day"),
    ];

    let abs = ms.abs();
    let (scale, suffix) = STEPS
        .iter()
        .rev()
        .find(|(scale, _)| abs >= *scale)
        .copied()
        .unwrap_or(STEPS[0]);
    FormattedValue::suffixed(to_fixed(ms / scale, decimals), suffix)
}

fn format_milliseconds(value: f64, decimals: Option<usize>) -> FormattedValue {
    format_duration(value, decimals)
}

fn format_seconds(value: f64, decimals: Option<usize>) -> FormattedValue {
    format_duration(value * 1000.0, decimals)
}

fn boolean(value: f64, truthy: &str, falsy: &str) -> FormattedValue {
    let text = if value != 0.0 && !value.is_nan() { truthy } else { falsy };
    FormattedValue::plain(text.to_string())
}

fn format_bool(value: f64, _decimals: Option<usize>) -> FormattedValue {
    boolean(value, "True", "False")
}

fn format_bool_yes_no(value: f64, _decimals: Option<usize>) -> FormattedValue {
    boolean(value, "Yes", "No")
}

fn format_bool_on_off(value: f64, _decimals: Option<usize>) -> FormattedValue {
    boolean(value, "On", "Off")
}

inventory::submit! { UnitFormat { id: "none", name: "Number", category: "Misc", format: format_none } }
inventory::submit! { UnitFormat { id: "short", name: "Short", category: "Misc", format: format_short } }
inventory::submit! { UnitFormat { id: "percent", name: "Percent (0-100)", category: "Misc", format: format_percent } }
inventory::submit! { UnitFormat { id: "percentunit", name: "Percent (0.0-1.0)", category: "Misc", format: format_percent_unit } }
inventory::submit! { UnitFormat { id: "ms", name: "milliseconds (ms)", category: "Time", format: format_milliseconds } }
inventory::submit! { UnitFormat { id: "s", name: "seconds (s)", category: "Time", format: format_seconds } }
inventory::submit! { UnitFormat { id: "bytes", name: "bytes(IEC)", category: "Data", format: format_bytes } }
inventory::submit! { UnitFormat { id: BOOL_UNIT, name: "True / False", category: "Boolean", format: format_bool } }
inventory::submit! { UnitFormat { id: "bool_yes_no", name: "Yes / No", category: "Boolean", format: format_bool_yes_no } }
inventory::submit! { UnitFormat { id: "bool_on_off", name: "On / Off", category: "Boolean", format: format_bool_on_off } }
