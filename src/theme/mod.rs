mod color;
mod decode;
mod defaults;
mod merge;
mod model;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use color::{classify_color, ColorError, ColorSyntax};
pub use defaults::{default_theme, validate_default, validate_default_theme, PALETTE_KEYS};
pub use merge::{merge_theme, merge_theme_over, MergedTheme};
pub use model::{is_valid_palette_key, normalize_palette_key, Branding, Palette, Theme};

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defects in the built-in default theme. These are configuration bugs, not
/// runtime conditions, and are surfaced once at process start.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("default {mode} palette is missing key `{key}`")]
    MissingDefaultKey { mode: ColorMode, key: &'static str },
    #[error("default {mode} palette has an unusable value for `{key}`")]
    InvalidDefaultValue {
        mode: ColorMode,
        key: String,
        #[source]
        source: ColorError,
    },
    #[error("default {mode} palette has an invalid key `{key}`")]
    InvalidDefaultKey { mode: ColorMode, key: String },
    #[error("default font `{0}` is not in the font catalog")]
    UnknownDefaultFont(String),
}
