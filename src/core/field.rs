use super::Values;
use crate::display::DisplayProcessor;
use crate::links::LinksSupplier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Time,
    Number,
    String,
    Boolean,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineInterpolation {
    Linear,
    Smooth,
    StepBefore,
    StepAfter,
}

/// `insertNulls` graph option: either a toggle or an explicit threshold in ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsertNulls {
    Enabled(bool),
    Threshold(f64),
}

/// Graph-specific part of the field config. Unknown keys are kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_interpolation: Option<LineInterpolation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_nulls: Option<InsertNulls>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A clickable link template attached to a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLink {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub target_blank: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Text (or number) shown in place of missing values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_value: Option<String>,

    /// Expected sampling interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<DataLink>,

    #[serde(default)]
    pub custom: GraphFieldConfig,
}

/// A template variable in scope for a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScopedVar {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl ScopedVar {
    pub fn new(text: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

pub type ScopedVars = BTreeMap<String, ScopedVar>;

/// Where an aligned field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOrigin {
    pub frame_index: usize,
    pub field_index: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<FieldOrigin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoped_vars: Option<ScopedVars>,

    #[serde(default)]
    pub null_threshold_applied: bool,
}

/// One named, typed column of a frame.
///
/// `display` and `get_links` are runtime capabilities: they are not
/// serialized and take no part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub config: FieldConfig,

    #[serde(default)]
    pub values: Values,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldState>,

    #[serde(skip)]
    pub display: Option<DisplayProcessor>,

    #[serde(skip)]
    pub get_links: Option<LinksSupplier>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, values: impl Into<Values>) -> Self {
        Self {
            name: name.into(),
            field_type,
            config: FieldConfig::default(),
            values: values.into(),
            labels: BTreeMap::new(),
            state: None,
            display: None,
            get_links: None,
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_state(mut self, state: FieldState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn state_mut(&mut self) -> &mut FieldState {
        self.state.get_or_insert_with(FieldState::default)
    }

    /// Name shown to users: config override, then computed state name, then raw name.
    pub fn display_name(&self) -> &str {
        self.config
            .display_name
            .as_deref()
            .or_else(|| self.state.as_ref().and_then(|s| s.display_name.as_deref()))
            .unwrap_or(&self.name)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.field_type == other.field_type
            && self.config == other.config
            && self.values == other.values
            && self.labels == other.labels
            && self.state == other.state
    }
}
