use super::FrameTransform;
use crate::core::{DataFrame, Field, Value};

/// Replaces nulls with the field's numeric `noValue`, when it has one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullToValue;

fn numeric_no_value(field: &Field) -> Option<f64> {
    field
        .config
        .no_value
        .as_deref()
        .and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|n| !n.is_nan())
}

impl FrameTransform for NullToValue {
    fn name(&self) -> &'static str {
        "null-to-value"
    }

    fn apply(&self, frame: &DataFrame) -> DataFrame {
        let mut out = frame.clone();
        for field in &mut out.fields {
            if let Some(no_value) = numeric_no_value(field) {
                field.values = field.values.map(|v| match v {
                    Value::Null => Value::Number(no_value),
                    other => other.clone(),
                });
            }
        }
        out
    }
}
