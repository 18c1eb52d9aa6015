use crate::core::{DataFrame, Field, FieldType, LineInterpolation, TimeRange, Value};
use crate::display::{is_boolean_unit, DisplayProcessor, Theme, BOOL_UNIT};
use crate::transform::{apply_all, NullInsertThreshold, NullToValue};
use log::debug;

/// Prepares frames for charting.
///
/// Each frame gets explicit null gap rows (bounded by `time_range`), its
/// `noValue` replacement, sanitized numbers and booleans coerced to 0/1
/// numbers. Only frames with both a time field and a number or boolean field
/// are kept; fields of any other type are left out of the result.
///
/// Returns `None` when `series` is empty or no frame is graphable. Inputs are
/// never modified: every transformed field gets its own value storage.
pub fn prepare_graphable_fields(
    series: &[DataFrame],
    theme: &Theme,
    time_range: Option<&TimeRange>,
) -> Option<Vec<DataFrame>> {
    if series.is_empty() {
        return None;
    }

    let null_insert = NullInsertThreshold::new().with_bounds(
        time_range.map(TimeRange::from_ms),
        time_range.map(TimeRange::to_ms),
    );

    let mut frames = Vec::with_capacity(series.len());

    for frame in series {
        let nulled = apply_all(frame, &[&null_insert, &NullToValue]);

        let mut fields = Vec::with_capacity(nulled.fields.len());
        let mut has_time_field = false;
        let mut has_value_field = false;

        for field in &nulled.fields {
            match field.field_type {
                FieldType::Time => {
                    has_time_field = true;
                    fields.push(field.clone());
                }
                FieldType::Number => {
                    has_value_field = true;
                    fields.push(sanitize_numbers(field));
                }
                FieldType::String => {
                    let mut copy = field.clone();
                    copy.values = field.values.to_vec().into();
                    fields.push(copy);
                }
                FieldType::Boolean => {
                    has_value_field = true;
                    fields.push(booleans_to_numbers(field, theme));
                }
                FieldType::Other => {}
            }
        }

        if has_time_field && has_value_field {
            frames.push(DataFrame {
                length: nulled.length,
                fields,
                ..frame.clone()
            });
        } else {
            debug!(
                "dropping frame {:?}: time field {}, value field {}",
                frame.name, has_time_field, has_value_field
            );
        }
    }

    if frames.is_empty() {
        None
    } else {
        Some(frames)
    }
}

/// NaN and infinities become null.
fn sanitize_numbers(field: &Field) -> Field {
    let mut copy = field.clone();
    copy.values = field.values.map(Value::finite_or_null);
    copy
}

/// Boolean field as a 0/1 step series on a fixed [0, 1] range.
fn booleans_to_numbers(field: &Field, theme: &Theme) -> Field {
    let mut copy = field.clone();
    copy.field_type = FieldType::Number;
    copy.config.min = Some(0.0);
    copy.config.max = Some(1.0);

    // smooth and linear make no sense for on/off data
    if copy.config.custom.line_interpolation != Some(LineInterpolation::StepBefore) {
        copy.config.custom.line_interpolation = Some(LineInterpolation::StepAfter);
    }

    copy.values = field.values.map(|v| match v {
        Value::Null => Value::Null,
        v if v.is_truthy() => Value::Number(1.0),
        _ => Value::Number(0.0),
    });

    if !is_boolean_unit(copy.config.unit.as_deref()) {
        copy.config.unit = Some(BOOL_UNIT.to_string());
        copy.display = Some(DisplayProcessor::new(&copy, theme, None));
    }

    copy
}
