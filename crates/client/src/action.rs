//! Closed set of enhancement actions exposed by the service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The enhancement operations a request can select
///
/// A closed enum rather than free-form strings: dispatch over actions is
/// exhaustively checked, and unknown names are a parse error instead of a
/// silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Style transfer against a named preset
    #[serde(rename = "toanime")]
    ToAnime,
    /// Background removal
    #[serde(rename = "rmbg")]
    RemoveBackground,
    /// Upscaling by factor or prompt
    #[serde(rename = "upscale")]
    Upscale,
    /// Prompt-guided editing
    #[serde(rename = "editimg")]
    EditImage,
    /// Style transfer with a caller-supplied prompt
    #[serde(rename = "customanime")]
    CustomAnime,
}

impl Default for Action {
    fn default() -> Self {
        Self::ToAnime
    }
}

impl Action {
    /// Wire names of all actions, in the order the service advertises them
    pub const NAMES: [&'static str; 5] = ["toanime", "rmbg", "upscale", "editimg", "customanime"];

    /// The wire name of this action
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToAnime => "toanime",
            Self::RemoveBackground => "rmbg",
            Self::Upscale => "upscale",
            Self::EditImage => "editimg",
            Self::CustomAnime => "customanime",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toanime" => Ok(Self::ToAnime),
            "rmbg" => Ok(Self::RemoveBackground),
            "upscale" => Ok(Self::Upscale),
            "editimg" => Ok(Self::EditImage),
            "customanime" => Ok(Self::CustomAnime),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Error returned when parsing an unknown action name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(
    /// The unrecognized action name
    pub String,
);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown action: {}. Valid actions: {}",
            self.0,
            Action::NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownAction {}
