use crate::error::{FrameError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub text: String,
    /// Default colour for a plotted series
    pub series: String,
    pub no_value: String,
}

/// Display theme consulted when building display processors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            is_dark: true,
            colors: ThemeColors {
                text: "#ccccdc".to_string(),
                series: "#73bf69".to_string(),
                no_value: "#8e8e8e".to_string(),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            is_dark: false,
            colors: ThemeColors {
                text: "#24292e".to_string(),
                series: "#56a64b".to_string(),
                no_value: "#7b8087".to_string(),
            },
        }
    }

    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(FrameError::UnknownTheme(name.to_string())),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
