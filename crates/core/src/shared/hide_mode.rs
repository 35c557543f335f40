use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual treatment applied to the mask rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HideMode {
    #[default]
    Box,
    Pixelate,
    Blur,
}

impl HideMode {
    pub const ALL: &[HideMode] = &[HideMode::Box, HideMode::Pixelate, HideMode::Blur];

    /// Wire name sent as the `mode` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            HideMode::Box => "box",
            HideMode::Pixelate => "pixelate",
            HideMode::Blur => "blur",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HideMode::Box => "Box",
            HideMode::Pixelate => "Pixelate",
            HideMode::Blur => "Blur",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HideMode::Box => "Solid blackout block.",
            HideMode::Pixelate => "Mosaic effect.",
            HideMode::Blur => "Soft obfuscation.",
        }
    }
}

impl fmt::Display for HideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HideMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "box" => Ok(HideMode::Box),
            "pixelate" => Ok(HideMode::Pixelate),
            "blur" => Ok(HideMode::Blur),
            other => Err(format!(
                "Hide mode must be one of: box, pixelate, blur, got '{other}'"
            )),
        }
    }
}
