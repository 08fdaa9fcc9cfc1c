///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::path::{Path, PathBuf};

use druid::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::indicator::RotationIndicator;
use crate::style::IndicatorStyle;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid indicator config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid color for `{field}`: {value:?}")]
    Color { field: &'static str, value: String },
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// IndicatorConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Indicator attributes as they appear in a TOML file. Missing keys keep the
/// widget defaults.
///
/// ```toml
/// style = "vertical"
///
/// [animation]
/// enabled = true
/// duration_ms = 300
///
/// [axis]
/// horizontal = true
/// vertical = false
/// color = "#ffffff"
/// width = 2.0
///
/// [pointer]
/// color = "#ff4444"
/// width = 6.0
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    pub style: Option<IndicatorStyle>,
    pub rotation: Option<f64>,
    pub background_color: Option<String>,
    pub animation: AnimationSection,
    pub axis: AxisSection,
    pub pointer: PointerSection,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationSection {
    pub enabled: Option<bool>,
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisSection {
    pub horizontal: Option<bool>,
    pub vertical: Option<bool>,
    pub color: Option<String>,
    pub width: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerSection {
    pub color: Option<String>,
    pub width: Option<f64>,
}

impl IndicatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading indicator config from {}", path.display());
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        parse_color("background_color", &self.background_color)?;
        parse_color("axis.color", &self.axis.color)?;
        parse_color("pointer.color", &self.pointer.color)?;
        Ok(())
    }

    /// Writes every set attribute onto `indicator`.
    pub fn apply(&self, indicator: &mut RotationIndicator) -> Result<(), ConfigError> {
        if let Some(style) = self.style {
            indicator.set_style(style);
        }
        if let Some(enabled) = self.animation.enabled {
            indicator.set_animation_enabled(enabled);
        }
        if let Some(duration) = self.animation.duration_ms {
            indicator.set_animation_duration(duration);
        }
        if let Some(horizontal) = self.axis.horizontal {
            indicator.set_horizontal_axis_enabled(horizontal);
        }
        if let Some(vertical) = self.axis.vertical {
            indicator.set_vertical_axis_enabled(vertical);
        }
        if let Some(width) = self.axis.width {
            indicator.set_axis_width(width);
        }
        if let Some(width) = self.pointer.width {
            indicator.set_pointer_width(width);
        }
        if let Some(color) = parse_color("background_color", &self.background_color)? {
            indicator.set_background_color(color);
        }
        if let Some(color) = parse_color("axis.color", &self.axis.color)? {
            indicator.set_axis_color(color);
        }
        if let Some(color) = parse_color("pointer.color", &self.pointer.color)? {
            indicator.set_pointer_color(color);
        }
        if let Some(rotation) = self.rotation {
            // Initial angle, shown without a transition.
            let animated = indicator.is_animation_enabled();
            indicator.set_animation_enabled(false);
            indicator.set_rotation(rotation);
            indicator.set_animation_enabled(animated);
        }
        Ok(())
    }
}

fn parse_color(field: &'static str, value: &Option<String>) -> Result<Option<Color>, ConfigError> {
    match value {
        None => Ok(None),
        Some(text) => Color::from_hex_str(text)
            .map(Some)
            .map_err(|_| ConfigError::Color {
                field,
                value: text.clone(),
            }),
    }
}

impl RotationIndicator {
    pub fn from_config(config: &IndicatorConfig) -> Result<Self, ConfigError> {
        let mut indicator = RotationIndicator::new();
        config.apply(&mut indicator)?;
        Ok(indicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
        style = "vertical"
        rotation = 45.0
        background_color = "#202020"

        [animation]
        enabled = false
        duration_ms = 350

        [axis]
        horizontal = false
        color = "#ffffff"
        width = 1.5

        [pointer]
        color = "#ff0000"
        width = 4.0
    "##;

    #[test]
    fn empty_config_keeps_defaults() {
        let config = IndicatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, IndicatorConfig::default());

        let indicator = RotationIndicator::from_config(&config).unwrap();
        assert_eq!(indicator.style(), IndicatorStyle::Horizontal);
        assert!(indicator.is_animation_enabled());
        assert_eq!(indicator.animation_duration(), 200);
        assert_eq!(indicator.rotation(), 0.0);
    }

    #[test]
    fn full_config_is_applied() {
        let config = IndicatorConfig::from_toml_str(FULL).unwrap();
        let indicator = RotationIndicator::from_config(&config).unwrap();

        assert_eq!(indicator.style(), IndicatorStyle::Vertical);
        assert!(!indicator.is_animation_enabled());
        assert_eq!(indicator.animation_duration(), 350);
        assert!(!indicator.is_horizontal_axis_enabled());
        assert!(indicator.is_vertical_axis_enabled());
        assert_eq!(indicator.config().axis_width, 1.5);
        assert_eq!(indicator.config().pointer_width, 4.0);
        assert_eq!(indicator.config().pointer_color.as_rgba_u32(), 0xff0000ff);
        assert_eq!(indicator.rotation(), 45.0);
    }

    #[test]
    fn initial_rotation_skips_the_transition() {
        let config = IndicatorConfig::from_toml_str("rotation = 90.0").unwrap();
        let indicator = RotationIndicator::from_config(&config).unwrap();
        assert_eq!(indicator.rotation(), 90.0);
        assert!(indicator.is_animation_enabled());
    }

    #[test]
    fn circle_is_an_alias_for_horizontal() {
        let config = IndicatorConfig::from_toml_str("style = \"circle\"").unwrap();
        assert_eq!(config.style, Some(IndicatorStyle::Horizontal));
        let config = IndicatorConfig::from_toml_str("style = \"rect\"").unwrap();
        assert_eq!(config.style, Some(IndicatorStyle::Rect));
    }

    #[test]
    fn bad_color_is_reported_with_its_field() {
        let err = IndicatorConfig::from_toml_str("[pointer]\ncolor = \"not-a-color\"").unwrap_err();
        match err {
            ConfigError::Color { field, value } => {
                assert_eq!(field, "pointer.color");
                assert_eq!(value, "not-a-color");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = IndicatorConfig::from_toml_str("speed = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = IndicatorConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
