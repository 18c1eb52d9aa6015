use super::FrameTransform;
use crate::core::{DataFrame, Field, FieldType, InsertNulls, Value, Values};
use log::debug;
use serde::{Deserialize, Serialize};

/// Where a synthetic gap row lands between two real samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsertMode {
    /// One threshold after the previous sample
    #[default]
    Threshold,
    /// Halfway between the two samples
    Midpoint,
    /// One millisecond after the previous sample, so step renderers do not
    /// carry the prior state forward
    PlusOne,
}

impl InsertMode {
    fn insert_value(self, prev: f64, next: f64, threshold: f64) -> f64 {
        match self {
            InsertMode::Threshold => prev + threshold,
            InsertMode::Midpoint => (prev + next) / 2.0,
            InsertMode::PlusOne => prev + 1.0,
        }
    }
}

/// Inserts null rows wherever the reference (time) field skips more than one
/// sampling interval, so renderers draw a break instead of interpolating.
///
/// The threshold comes from each field's `custom.insertNulls`, falling back to
/// the reference field's `interval`. Frames whose fields disagree on the
/// threshold are left alone. Optional pseudo bounds extend the fill to the
/// left of the first and right of the last sample.
#[derive(Debug, Clone, Default)]
pub struct NullInsertThreshold {
    pub ref_field_name: Option<String>,
    pub pseudo_min: Option<f64>,
    pub pseudo_max: Option<f64>,
    pub mode: InsertMode,
}

impl NullInsertThreshold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, pseudo_min: Option<f64>, pseudo_max: Option<f64>) -> Self {
        self.pseudo_min = pseudo_min;
        self.pseudo_max = pseudo_max;
        self
    }

    pub fn with_ref_field(mut self, name: impl Into<String>) -> Self {
        self.ref_field_name = Some(name.into());
        self
    }

    pub fn with_mode(mut self, mode: InsertMode) -> Self {
        self.mode = mode;
        self
    }

    fn is_reference(&self, field: &Field) -> bool {
        match &self.ref_field_name {
            Some(name) => &field.name == name,
            None => field.field_type == FieldType::Time,
        }
    }

    fn fill_reference(&self, ref_values: &[f64], threshold: f64) -> Vec<f64> {
        let mut filled = Vec::with_capacity(ref_values.len());
        let first = ref_values[0];

        if let Some(min) = self.pseudo_min.filter(|min| min.is_finite() && *min < first) {
            // 0 or 1 threshold left of the visible range
            let mut slot = (min / threshold).floor() * threshold;
            while slot < first {
                filled.push(self.mode.insert_value(slot - threshold, slot, threshold));
                slot += threshold;
            }
        }

        filled.push(first);
        let mut prev = first;

        for &cur in &ref_values[1..] {
            while cur - prev > threshold {
                filled.push(self.mode.insert_value(prev, cur, threshold));
                prev += threshold;
            }
            filled.push(cur);
            prev = cur;
        }

        if let Some(max) = self.pseudo_max.filter(|max| max.is_finite() && *max > prev) {
            while prev + threshold < max {
                filled.push(self.mode.insert_value(prev, max, threshold));
                prev += threshold;
            }
        }

        filled
    }
}

/// `insertNulls: false` disables insertion; `true` defers to the interval.
fn field_threshold(field: &Field, interval: Option<f64>) -> Option<f64> {
    match field.config.custom.insert_nulls {
        Some(InsertNulls::Threshold(threshold)) => Some(threshold),
        Some(InsertNulls::Enabled(false)) => Some(0.0),
        Some(InsertNulls::Enabled(true)) | None => interval,
    }
}

/// Spread `values` over the filled reference axis, null in the inserted slots.
fn expand(values: &Values, ref_values: &[f64], filled: &[f64]) -> Values {
    let mut next = 0;
    filled
        .iter()
        .map(|slot| {
            if ref_values.get(next) == Some(slot) {
                let value = values.get(next).clone();
                next += 1;
                value
            } else {
                Value::Null
            }
        })
        .collect()
}

impl FrameTransform for NullInsertThreshold {
    fn name(&self) -> &'static str {
        "null-insert-threshold"
    }

    fn apply(&self, frame: &DataFrame) -> DataFrame {
        if frame.length == 0 {
            return frame.clone();
        }

        let Some(ref_index) = frame.fields.iter().position(|f| self.is_reference(f)) else {
            return frame.clone();
        };

        let mut out = frame.clone();
        out.fields[ref_index].state_mut().null_threshold_applied = true;

        let interval = frame.fields[ref_index].config.interval;
        let mut thresholds: Vec<f64> = Vec::new();
        for threshold in frame.fields.iter().filter_map(|f| field_threshold(f, interval)) {
            if !thresholds.contains(&threshold) {
                thresholds.push(threshold);
            }
        }

        // per-field thresholds would change lengths independently and need a join
        let threshold = match thresholds.as_slice() {
            [threshold] => *threshold,
            _ => return out,
        };
        if !threshold.is_finite() || threshold <= 0.0 {
            return out;
        }

        let ref_values: Option<Vec<f64>> = frame.fields[ref_index]
            .values
            .iter()
            .map(|v| v.as_f64().filter(|n| n.is_finite()))
            .collect();
        let ref_values = match ref_values {
            Some(values) if !values.is_empty() => values,
            _ => {
                debug!("reference field `{}` is not fully finite, skipping gap insertion", frame.fields[ref_index].name);
                return out;
            }
        };

        let filled = self.fill_reference(&ref_values, threshold);
        if filled.len() == ref_values.len() {
            return out;
        }

        debug!(
            "inserted {} null rows into frame {:?} (threshold {} ms)",
            filled.len() - ref_values.len(),
            frame.name,
            threshold
        );

        for (index, field) in out.fields.iter_mut().enumerate() {
            field.values = if index == ref_index {
                filled.iter().copied().map(Value::Number).collect()
            } else {
                expand(&field.values, &ref_values, &filled)
            };
        }
        out.length = filled.len();

        out
    }
}
