// Tag output styles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::feature::Feature;
use crate::lemma::Tag;

/// How features are rendered in tagging output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStyle {
    /// The eight raw fields.
    Raw,
    /// Compact character tag, e.g. `IRMA3s`.
    Vivens,
    /// Nine-column positional tag, e.g. `v3sima---`.
    #[default]
    Perseus,
}

impl TagStyle {
    /// Renders `feature` in this style. `pos` is only used by [`TagStyle::Perseus`].
    pub fn render(self, feature: Feature, pos: Option<char>) -> Tag {
        match self {
            TagStyle::Raw => Tag::Raw(feature),
            TagStyle::Vivens => Tag::Text(feature.render()),
            TagStyle::Perseus => Tag::Text(feature.render_perseus(pos)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TagStyle::Raw => "raw",
            TagStyle::Vivens => "vivens",
            TagStyle::Perseus => "perseus",
        }
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag style '{0}' (expected raw, vivens or perseus)")]
pub struct UnknownTagStyle(pub String);

impl FromStr for TagStyle {
    type Err = UnknownTagStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(TagStyle::Raw),
            "vivens" => Ok(TagStyle::Vivens),
            "perseus" => Ok(TagStyle::Perseus),
            other => Err(UnknownTagStyle(other.to_string())),
        }
    }
}

impl fmt::Display for TagStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
