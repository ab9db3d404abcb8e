//! Render options: immutable defaults plus per-call overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use termgraph_core::{Error, Result};

/// Largest accepted canvas side, in cells.
pub const MAX_CANVAS_DIM: usize = 4096;

/// Fully resolved render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Glyph placed at each node position
    pub node_char: char,
    /// Horizontal connector; also used for inline path arrows and the stats rule
    pub edge_char: char,
    /// Vertical connector, reserved for edge routing
    pub vertex_char: char,
    /// Corner connector, reserved for edge routing
    pub corner_char: char,
    /// Canvas columns
    pub max_width: usize,
    /// Canvas rows
    pub max_height: usize,
    /// Append the first property to node labels
    pub show_properties: bool,
    /// Draw labels next to node glyphs
    pub show_labels: bool,
}

impl RenderConfig {
    pub const DEFAULT: RenderConfig = RenderConfig {
        node_char: '●',
        edge_char: '─',
        vertex_char: '│',
        corner_char: '└',
        max_width: 80,
        max_height: 20,
        show_properties: true,
        show_labels: true,
    };

    /// Defaults with `overrides` applied on top.
    pub fn from_overrides(overrides: &RenderOverrides) -> Self {
        Self::DEFAULT.merge(overrides)
    }

    /// A copy of `self` with every set override applied.
    ///
    /// Canvas sides are capped at [`MAX_CANVAS_DIM`].
    pub fn merge(&self, overrides: &RenderOverrides) -> Self {
        let merged = Self {
            node_char: overrides.node_char.unwrap_or(self.node_char),
            edge_char: overrides.edge_char.unwrap_or(self.edge_char),
            vertex_char: overrides.vertex_char.unwrap_or(self.vertex_char),
            corner_char: overrides.corner_char.unwrap_or(self.corner_char),
            max_width: overrides.max_width.unwrap_or(self.max_width),
            max_height: overrides.max_height.unwrap_or(self.max_height),
            show_properties: overrides.show_properties.unwrap_or(self.show_properties),
            show_labels: overrides.show_labels.unwrap_or(self.show_labels),
        };
        Self {
            max_width: merged.max_width.min(MAX_CANVAS_DIM),
            max_height: merged.max_height.min(MAX_CANVAS_DIM),
            ..merged
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied options; unset fields fall back to [`RenderConfig::DEFAULT`].
///
/// Only recognized option names deserialize; anything else is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_char: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_char: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex_char: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_char: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_properties: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
}

impl RenderOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain ASCII glyphs for terminals without Unicode box drawing.
    pub fn ascii() -> Self {
        Self {
            node_char: Some('o'),
            edge_char: Some('-'),
            vertex_char: Some('|'),
            corner_char: Some('+'),
            ..Self::default()
        }
    }

    pub fn with_node_char(mut self, ch: char) -> Self {
        self.node_char = Some(ch);
        self
    }

    pub fn with_edge_char(mut self, ch: char) -> Self {
        self.edge_char = Some(ch);
        self
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_max_height(mut self, height: usize) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn with_canvas(self, width: usize, height: usize) -> Self {
        self.with_max_width(width).with_max_height(height)
    }

    pub fn with_show_properties(mut self, show: bool) -> Self {
        self.show_properties = Some(show);
        self
    }

    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = Some(show);
        self
    }

    /// Reject canvas sides larger than [`MAX_CANVAS_DIM`].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("max_width", self.max_width), ("max_height", self.max_height)] {
            if let Some(value) = value
                && value > MAX_CANVAS_DIM
            {
                return Err(Error::config_invalid(format!(
                    "{name} {value} exceeds {MAX_CANVAS_DIM}"
                ))
                .with_operation("config::validate")
                .with_context("option", name));
            }
        }
        Ok(())
    }

    /// Parse overrides from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let overrides: Self = toml::from_str(text).map_err(|err| {
            Error::deserialization_failed("toml", err.to_string())
                .with_operation("config::from_toml_str")
                .set_source(err)
        })?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Parse overrides from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let overrides: Self = serde_json::from_str(text).map_err(|err| {
            Error::deserialization_failed("json", err.to_string())
                .with_operation("config::from_json_str")
                .set_source(err)
        })?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Load overrides from a `.toml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let parse: fn(&str) -> Result<Self> = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::config_invalid("expected a .toml or .json file")
                    .with_operation("config::from_path")
                    .with_context("path", display));
            }
        };

        let text = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).with_context("path", display.clone()))?;
        parse(&text).map_err(|err| err.with_context("path", display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termgraph_core::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.node_char, '●');
        assert_eq!(config.edge_char, '─');
        assert_eq!(config.vertex_char, '│');
        assert_eq!(config.corner_char, '└');
        assert_eq!((config.max_width, config.max_height), (80, 20));
        assert!(config.show_properties);
        assert!(config.show_labels);
    }

    #[test]
    fn test_merge_leaves_defaults_untouched() {
        let overrides = RenderOverrides::new()
            .with_canvas(40, 10)
            .with_show_labels(false);
        let config = RenderConfig::from_overrides(&overrides);

        assert_eq!((config.max_width, config.max_height), (40, 10));
        assert!(!config.show_labels);
        assert_eq!(config.node_char, RenderConfig::DEFAULT.node_char);
        assert_eq!(RenderConfig::DEFAULT.max_width, 80);
    }

    #[test]
    fn test_merge_layers() {
        let base = RenderConfig::from_overrides(&RenderOverrides::ascii());
        let config = base.merge(&RenderOverrides::new().with_node_char('*'));
        assert_eq!(config.node_char, '*');
        assert_eq!(config.edge_char, '-');
    }

    #[test]
    fn test_from_toml_str() {
        let overrides = RenderOverrides::from_toml_str(
            r##"
            node_char = "#"
            max_width = 60
            show_properties = false
            "##,
        )
        .unwrap();
        assert_eq!(overrides.node_char, Some('#'));
        assert_eq!(overrides.max_width, Some(60));
        assert_eq!(overrides.show_properties, Some(false));
        assert_eq!(overrides.max_height, None);
    }

    #[test]
    fn test_from_json_str() {
        let overrides =
            RenderOverrides::from_json_str(r#"{"edge_char": "=", "max_height": 12}"#).unwrap();
        assert_eq!(overrides.edge_char, Some('='));
        assert_eq!(overrides.max_height, Some(12));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = RenderOverrides::from_json_str(r#"{"colour": "red"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
        assert_eq!(err.context_value("format"), Some("json"));
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_multi_char_glyph_rejected() {
        let err = RenderOverrides::from_toml_str("node_char = \"ab\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let err = RenderOverrides::from_json_str(
            r#"{"max_width": 0, "max_height": 18446744073709551615}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context_value("option"), Some("max_height"));

        let err = RenderOverrides::from_toml_str("max_width = 5000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let ok = RenderOverrides::from_toml_str("max_width = 4096").unwrap();
        assert_eq!(ok.max_width, Some(MAX_CANVAS_DIM));
    }

    #[test]
    fn test_merge_caps_canvas() {
        let overrides = RenderOverrides::new().with_canvas(usize::MAX, 10_000);
        let config = RenderConfig::from_overrides(&overrides);
        assert_eq!(
            (config.max_width, config.max_height),
            (MAX_CANVAS_DIM, MAX_CANVAS_DIM)
        );
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&RenderOverrides::new().with_max_width(30)).unwrap();
        assert_eq!(json, r#"{"max_width":30}"#);
    }
}
