//! Card styling configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_PALETTE: [&str; 8] = [
    "#6EE7B7", "#FDE68A", "#A78BFA", "#FCA5A5", "#60A5FA", "#F59E0B", "#34D399", "#F472B6",
];

const DEFAULT_LANGUAGE_COLORS: [(&str, &str); 16] = [
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("CSS", "#563d7c"),
    ("Dart", "#00B4AB"),
    ("Go", "#00ADD8"),
    ("HTML", "#e34c26"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Kotlin", "#A97BFF"),
    ("PHP", "#4F5D95"),
    ("Python", "#3572A5"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Shell", "#89e051"),
    ("TypeScript", "#3178c6"),
];

/// Visual constants shared by every card.
///
/// Every field has a default, so a style file only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardStyle {
    /// Canvas width in pixels.
    pub width: f64,
    /// CSS font-family list.
    pub font_family: String,
    /// Card background.
    pub background: String,
    /// Title text.
    pub title_color: String,
    /// Body text.
    pub text_color: String,
    /// Empty bar track and ring track.
    pub track_color: String,
    /// Grade ring progress stroke.
    pub ring_color: String,
    /// Fallback colours, picked by entry index.
    pub palette: Vec<String>,
    /// Fixed colours per language name.
    pub language_colors: BTreeMap<String, String>,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            width: 500.0,
            font_family: r#""Segoe UI", "Helvetica Neue", Arial, sans-serif"#.to_string(),
            background: "#0d1117".to_string(),
            title_color: "#539bf5".to_string(),
            text_color: "#e6edf3".to_string(),
            track_color: "#30363d".to_string(),
            ring_color: "#2b6cb0".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|color| color.to_string()).collect(),
            language_colors: DEFAULT_LANGUAGE_COLORS
                .iter()
                .map(|(language, color)| (language.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl CardStyle {
    /// Load a style from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Colour for an entry: the fixed language colour if one exists, else the
    /// palette colour at `index`, cycling.
    pub fn resolve_color(&self, label: &str, index: usize) -> &str {
        if let Some(color) = self.language_colors.get(label) {
            return color;
        }
        if self.palette.is_empty() {
            return &self.text_color;
        }
        &self.palette[index % self.palette.len()]
    }
}
