//! Presentation style for a streaming swap board.
//!
//! Every option has a default; partial overrides deserialize onto the
//! defaults once, so renderers never probe for missing fields.

use serde::{Deserialize, Serialize};

const INHERIT: &str = "inherit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    /// Title font. Default `inherit`.
    pub title: String,
    /// Body font. Default `inherit`.
    pub body: String,
    /// Detail line font. Default `inherit`.
    pub detail: String,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            title: INHERIT.to_string(),
            body: INHERIT.to_string(),
            detail: INHERIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorStyle {
    /// Title and body text. Default `inherit`.
    pub primary_text: String,
    /// Detail text. Default `#666`.
    pub secondary_text: String,
}

impl Default for ColorStyle {
    fn default() -> Self {
        Self {
            primary_text: INHERIT.to_string(),
            secondary_text: "#666".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardStyle {
    pub fonts: FontStyle,
    pub colors: ColorStyle,
    /// Card corner radius. Default `8px`.
    pub corner_radius: String,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            fonts: FontStyle::default(),
            colors: ColorStyle::default(),
            corner_radius: "8px".to_string(),
        }
    }
}

impl BoardStyle {
    /// Resolves a JSON override document against the defaults.
    pub fn from_overrides(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = BoardStyle::default();
        assert_eq!(style.fonts.title, "inherit");
        assert_eq!(style.colors.secondary_text, "#666");
        assert_eq!(style.corner_radius, "8px");
    }

    #[test]
    fn test_partial_override() {
        let style =
            BoardStyle::from_overrides(r##"{"fonts":{"title":"Inter"},"colors":{"secondary_text":"#999"}}"##)
                .unwrap();
        assert_eq!(style.fonts.title, "Inter");
        assert_eq!(style.fonts.body, "inherit");
        assert_eq!(style.colors.primary_text, "inherit");
        assert_eq!(style.colors.secondary_text, "#999");
        assert_eq!(style.corner_radius, "8px");
    }
}
