use super::{Field, FieldType};
use crate::error::FrameError;
use serde::{Deserialize, Serialize};

/// Table-like bundle of equal-length fields: one queried series or result set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    #[serde(default)]
    pub fields: Vec<Field>,

    /// Row count shared by all fields
    #[serde(default)]
    pub length: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl DataFrame {
    /// Frame over `fields`, taking the row count from the first field.
    pub fn new(fields: Vec<Field>) -> Self {
        let length = fields.first().map(|f| f.values.len()).unwrap_or(0);
        Self {
            name: None,
            ref_id: None,
            fields,
            length,
            meta: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn first_field_of_type(&self, field_type: FieldType) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_type == field_type)
    }

    /// Fill in a missing length and check that every field agrees with it.
    pub fn validate(&mut self) -> Result<(), FrameError> {
        if self.length == 0 {
            self.length = self.fields.first().map(|f| f.values.len()).unwrap_or(0);
        }

        for field in &self.fields {
            if field.values.len() != self.length {
                return Err(FrameError::LengthMismatch {
                    frame: self.name.clone().unwrap_or_default(),
                    field: field.name.clone(),
                    expected: self.length,
                    actual: field.values.len(),
                });
            }
        }

        Ok(())
    }
}
