use std::fmt;
use std::path::{Path, PathBuf};

use crate::paint::ColorParseError;

/// Failure to read, parse or resolve a border config.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    /// A color field could not be parsed as `#RRGGBB`.
    Color { field: &'static str, source: ColorParseError },
    InvalidThickness(f32),
    InvalidGap(f32),
    InvalidAngle(f32),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io { path: path.to_path_buf(), source }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
            ConfigError::Color { field, source } => write!(f, "border.{field}: {source}"),
            ConfigError::InvalidThickness(t) => {
                write!(f, "border.thickness must be a non-negative number, got {t}")
            }
            ConfigError::InvalidGap(g) => {
                write!(f, "border.gap must be a non-negative number, got {g}")
            }
            ConfigError::InvalidAngle(a) => {
                write!(f, "border.gradient_angle must be finite, got {a}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
            ConfigError::Color { source, .. } => Some(source),
            ConfigError::InvalidThickness(_)
            | ConfigError::InvalidGap(_)
            | ConfigError::InvalidAngle(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}
