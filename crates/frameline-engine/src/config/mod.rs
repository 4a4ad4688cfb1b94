//! Border configuration file.
//!
//! ```toml
//! [border]
//! thickness = 2.0
//! gap = 2.0                # space between a border and its neighbours
//! active = "#8B4000"
//! active_end = "#FFB000"   # optional, defaults to `active`
//! inactive = "#2A2A2A"
//! gradient_angle = 0.0     # degrees, 0 = left to right
//! anchor = "centered"      # or "origin"
//! variant = "gradient"     # or "flat"
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

mod error;

pub use error::ConfigError;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paint::{direction_from_degrees, GradientAnchor, Rgb};
use crate::shader::{BorderShader, BorderStyle, FlatBorderStyle};

/// Which window a border is drawn for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FocusState {
    Active,
    Inactive,
}

/// Border policy selected in the config file.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderVariant {
    #[default]
    Gradient,
    Flat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub border: BorderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub thickness: f32,
    pub gap: f32,
    pub active: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_end: Option<String>,
    pub inactive: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_end: Option<String>,
    pub gradient_angle: f32,
    pub anchor: GradientAnchor,
    pub variant: BorderVariant,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            gap: 2.0,
            active: "#8B4000".to_string(),
            active_end: None,
            inactive: "#2A2A2A".to_string(),
            inactive_end: None,
            gradient_angle: 0.0,
            anchor: GradientAnchor::Centered,
            variant: BorderVariant::Gradient,
        }
    }
}

impl BorderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(ConfigError::InvalidThickness(self.thickness));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::InvalidGap(self.gap));
        }
        if !self.gradient_angle.is_finite() {
            return Err(ConfigError::InvalidAngle(self.gradient_angle));
        }
        Ok(())
    }

    /// Distance from a window's edge to the edge of its layout slot.
    ///
    /// The border occupies the first `thickness` of it, the gap the rest.
    #[inline]
    pub fn outer_offset(&self) -> f32 {
        self.gap + self.thickness
    }

    /// Resolves the configured colors into a kernel policy for `focus`.
    pub fn shader(&self, focus: FocusState) -> Result<BorderShader, ConfigError> {
        self.validate()?;

        let (start_field, start, end_field, end) = match focus {
            FocusState::Active => ("active", &self.active, "active_end", &self.active_end),
            FocusState::Inactive => ("inactive", &self.inactive, "inactive_end", &self.inactive_end),
        };
        let start_color = parse_color(start_field, start)?;
        let end_color = match end {
            Some(hex) => parse_color(end_field, hex)?,
            None => start_color,
        };

        Ok(match self.variant {
            BorderVariant::Gradient => BorderStyle::new(
                self.thickness,
                start_color,
                end_color,
                direction_from_degrees(self.gradient_angle),
            )
            .with_anchor(self.anchor)
            .into(),
            BorderVariant::Flat => FlatBorderStyle::new(start_color, self.thickness).into(),
        })
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.border.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, or writes the default config there if it does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Config::default();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
        }
        fs::write(path, config.to_toml_string()?).map_err(|e| ConfigError::io(path, e))?;
        log::info!("wrote default config to {}", path.display());
        Ok(config)
    }
}

/// `$XDG_CONFIG_HOME/frameline/config.toml`, else `$HOME/.config/frameline/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
}

fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(home.filter(|v| !v.is_empty())?).join(".config"),
    };
    Some(base.join("frameline").join("config.toml"))
}

fn parse_color(field: &'static str, hex: &str) -> Result<Rgb, ConfigError> {
    Rgb::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
}
