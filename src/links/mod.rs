pub mod template;

pub use template::interpolate;

use crate::core::{DataFrame, Field, FieldType, ScopedVar, ScopedVars, Value};
use crate::display::{DisplayProcessor, DisplayValue, Theme};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as Json};
use std::fmt;
use std::sync::Arc;

/// Variable substitution used to resolve link templates.
pub type InterpolateFn = Arc<dyn Fn(&str, &ScopedVars) -> String + Send + Sync>;

/// The crate's own `${var}` interpolation as an [`InterpolateFn`].
pub fn default_interpolator() -> InterpolateFn {
    Arc::new(|template: &str, vars: &ScopedVars| interpolate(template, vars))
}

/// A resolved, clickable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkModel {
    pub href: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Which value the links are requested for: a row of the frame, or a
/// calculated (reduced) value.
#[derive(Debug, Clone, Default)]
pub struct ValueLinkConfig {
    pub value_row_index: Option<usize>,
    pub calculated_value: Option<DisplayValue>,
}

impl ValueLinkConfig {
    pub fn row(index: usize) -> Self {
        Self {
            value_row_index: Some(index),
            calculated_value: None,
        }
    }

    pub fn calculated(value: DisplayValue) -> Self {
        Self {
            value_row_index: None,
            calculated_value: Some(value),
        }
    }
}

/// Per-field link generator.
///
/// Holds the frame the field's templates are resolved against (which may
/// carry extra columns beyond the field's own frame), the field's scoped
/// variables and the substitution function. Fields without their own display
/// processor are formatted with the supplier's theme, dark unless set through
/// [`LinksSupplier::with_theme`].
#[derive(Clone)]
pub struct LinksSupplier {
    frame: Arc<DataFrame>,
    field_index: usize,
    scoped_vars: ScopedVars,
    replace: InterpolateFn,
    time_zone: String,
    theme: Theme,
}

impl fmt::Debug for LinksSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinksSupplier")
            .field("field_index", &self.field_index)
            .field("frame_fields", &self.frame.fields.len())
            .field("time_zone", &self.time_zone)
            .field("theme", &self.theme.name)
            .finish_non_exhaustive()
    }
}

impl LinksSupplier {
    pub fn new(
        frame: Arc<DataFrame>,
        field_index: usize,
        scoped_vars: ScopedVars,
        replace: InterpolateFn,
        time_zone: impl Into<String>,
    ) -> Self {
        Self {
            frame,
            field_index,
            scoped_vars,
            replace,
            time_zone: time_zone.into(),
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Frame used to resolve templates.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn field(&self) -> Option<&Field> {
        self.frame.fields.get(self.field_index)
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn links(&self, config: &ValueLinkConfig) -> Vec<LinkModel> {
        let Some(field) = self.field() else {
            return Vec::new();
        };
        if field.config.links.is_empty() {
            return Vec::new();
        }

        let mut vars = self.scoped_vars.clone();
        let mut value_vars = Map::new();

        if let Some(row) = config.value_row_index {
            let fields = self.row_fields(row);
            let shown = self.processor(field).display(field.values.get(row));
            let time = self
                .frame
                .first_field_of_type(FieldType::Time)
                .map(|t| value_to_json(t.values.get(row)))
                .unwrap_or(Json::Null);

            value_vars.insert("raw".into(), value_to_json(field.values.get(row)));
            value_vars.insert("numeric".into(), number_to_json(shown.numeric));
            value_vars.insert("text".into(), Json::String(shown.to_string()));
            value_vars.insert("time".into(), time);

            vars.insert(
                "__data".to_string(),
                ScopedVar::new(
                    "Data",
                    json!({
                        "name": self.frame.name,
                        "refId": self.frame.ref_id,
                        "fields": fields,
                    }),
                ),
            );
        } else if let Some(calculated) = &config.calculated_value {
            value_vars.insert("raw".into(), number_to_json(calculated.numeric));
            value_vars.insert("numeric".into(), number_to_json(calculated.numeric));
            value_vars.insert("text".into(), Json::String(calculated.to_string()));
        }

        vars.insert("__value".to_string(), ScopedVar::new("Value", Json::Object(value_vars)));

        field
            .config
            .links
            .iter()
            .map(|link| LinkModel {
                href: (self.replace)(&link.url.replace('\n', ""), &vars),
                title: (self.replace)(&link.title, &vars),
                target: link.target_blank.then(|| "_blank".to_string()),
            })
            .collect()
    }

    fn processor(&self, field: &Field) -> DisplayProcessor {
        field
            .display
            .clone()
            .unwrap_or_else(|| DisplayProcessor::new(field, &self.theme, Some(&self.time_zone)))
    }

    /// Every column of one row, addressable by display name, raw name or index.
    fn row_fields(&self, row: usize) -> Map<String, Json> {
        let mut fields = Map::new();
        for (index, field) in self.frame.fields.iter().enumerate() {
            let raw = field.values.get(row);
            let shown = self.processor(field).display(raw);
            let entry = json!({
                "text": shown.to_string(),
                "numeric": number_to_json(shown.numeric),
                "raw": value_to_json(raw),
            });

            fields.entry(field.name.clone()).or_insert_with(|| entry.clone());
            fields.entry(field.display_name().to_string()).or_insert_with(|| entry.clone());
            fields.insert(index.to_string(), entry);
        }
        fields
    }
}

fn number_to_json(n: f64) -> Json {
    serde_json::Number::from_f64(n).map(Json::Number).unwrap_or(Json::Null)
}

fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => Json::String(s.clone()),
    }
}
