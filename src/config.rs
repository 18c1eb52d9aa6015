use crate::core::{DataFrame, TimeRange};
use crate::display::Theme;
use crate::error::{FrameError, Result};
use crate::timeseries::{normalize_timezones, prepare_graphable_fields};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A preparation request as read from JSON.
///
/// ```json
/// { "frames": [...], "timeRange": { "from": 0, "to": 60000 },
///   "timezones": ["", "utc"], "theme": "light" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRequest {
    #[serde(default)]
    pub frames: Vec<DataFrame>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Result of running a [`PrepareRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareResponse {
    /// `null` when nothing is graphable
    pub frames: Option<Vec<DataFrame>>,
    pub timezones: Vec<String>,
}

impl PrepareRequest {
    /// Parse and validate a request. Frame lengths are inferred when absent.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut request: PrepareRequest = serde_json::from_str(json)?;
        for frame in &mut request.frames {
            frame.validate()?;
        }
        debug!("loaded request with {} frame(s)", request.frames.len());
        Ok(request)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| FrameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Theme named in the request, else `fallback`.
    pub fn resolve_theme(&self, fallback: &str) -> Result<Theme> {
        Theme::by_name(self.theme.as_deref().unwrap_or(fallback))
    }

    pub fn run(&self, theme: &Theme, default_timezone: &str) -> PrepareResponse {
        PrepareResponse {
            frames: prepare_graphable_fields(&self.frames, theme, self.time_range.as_ref()),
            timezones: normalize_timezones(self.timezones.as_deref(), default_timezone),
        }
    }
}
