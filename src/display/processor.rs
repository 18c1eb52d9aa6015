use super::units::{format_value, is_boolean_unit};
use super::Theme;
use crate::core::{Field, FieldType, Value};
use chrono::{Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::sync::Arc;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A value ready to be shown: text plus the numeric it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayValue {
    pub text: String,
    pub numeric: f64,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub color: Option<String>,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix.as_deref().unwrap_or(""),
            self.text,
            self.suffix.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug)]
struct ProcessorConfig {
    field_type: FieldType,
    unit: Option<String>,
    decimals: Option<usize>,
    no_value: Option<String>,
    color: String,
    no_value_color: String,
    time_zone: String,
}

/// Turns raw cells of one field into [`DisplayValue`]s.
///
/// Built once per field from its type, config and a theme; cheap to clone.
#[derive(Debug, Clone)]
pub struct DisplayProcessor {
    config: Arc<ProcessorConfig>,
}

impl DisplayProcessor {
    pub fn new(field: &Field, theme: &Theme, time_zone: Option<&str>) -> Self {
        Self {
            config: Arc::new(ProcessorConfig {
                field_type: field.field_type,
                unit: field.config.unit.clone(),
                decimals: field.config.decimals,
                no_value: field.config.no_value.clone(),
                color: theme.colors.series.clone(),
                no_value_color: theme.colors.no_value.clone(),
                time_zone: time_zone.unwrap_or("browser").to_string(),
            }),
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.config.unit.as_deref()
    }

    pub fn display(&self, value: &Value) -> DisplayValue {
        let config = &self.config;

        match value {
            Value::Null => DisplayValue {
                text: config.no_value.clone().unwrap_or_default(),
                numeric: f64::NAN,
                prefix: None,
                suffix: None,
                color: Some(config.no_value_color.clone()),
            },
            Value::Bool(b) => {
                let numeric = if *b { 1.0 } else { 0.0 };
                if is_boolean_unit(self.unit()) {
                    self.numeric(numeric)
                } else {
                    self.text(b.to_string(), numeric)
                }
            }
            Value::Number(n) if config.field_type == FieldType::Time => {
                self.text(format_time(*n, &config.time_zone), *n)
            }
            Value::Number(n) => self.numeric(*n),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(n) if config.field_type == FieldType::Number => self.numeric(n),
                Ok(n) => self.text(s.clone(), n),
                Err(_) => self.text(s.clone(), f64::NAN),
            },
        }
    }

    fn numeric(&self, n: f64) -> DisplayValue {
        let formatted = format_value(self.unit(), n, self.config.decimals);
        DisplayValue {
            text: formatted.text,
            numeric: n,
            prefix: formatted.prefix,
            suffix: formatted.suffix,
            color: Some(self.config.color.clone()),
        }
    }

    fn text(&self, text: String, numeric: f64) -> DisplayValue {
        DisplayValue {
            text,
            numeric,
            prefix: None,
            suffix: None,
            color: Some(self.config.color.clone()),
        }
    }
}

/// Format epoch milliseconds. `browser` renders in the local zone, IANA names
/// such as `America/New_York` in that zone, anything unrecognised in UTC.
pub fn format_time(ms: f64, time_zone: &str) -> String {
    if !ms.is_finite() {
        return ms.to_string();
    }
    let Some(at) = Utc.timestamp_millis_opt(ms as i64).single() else {
        return ms.to_string();
    };
    if time_zone == "browser" {
        return at.with_timezone(&Local).format(TIME_FORMAT).to_string();
    }
    match time_zone.parse::<Tz>() {
        Ok(tz) => at.with_timezone(&tz).format(TIME_FORMAT).to_string(),
        Err(_) => at.format(TIME_FORMAT).to_string(),
    }
}
