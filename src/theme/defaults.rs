use std::sync::OnceLock;

use super::color::classify_color;
use super::model::{is_valid_palette_key, Branding, Palette, Theme};
use super::{ColorMode, ThemeError, ThemeResult};
use crate::fonts::{FontFamily, FALLBACK_FONT_ID};

/// Canonical palette keys, in emission order.
pub const PALETTE_KEYS: [&str; 19] = [
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
];

const LIGHT_VALUES: [&str; 19] = [
    "#FFFFFF", "#0A0A0A", "#FFFFFF", "#0A0A0A", "#FFFFFF", "#0A0A0A", "#171717", "#FAFAFA",
    "#F5F5F5", "#171717", "#F5F5F5", "#737373", "#F5F5F5", "#171717", "#EF4444", "#FAFAFA",
    "#E5E5E5", "#E5E5E5", "#0A0A0A",
];

const DARK_VALUES: [&str; 19] = [
    "#0A0A0A", "#FAFAFA", "#0A0A0A", "#FAFAFA", "#0A0A0A", "#FAFAFA", "#FAFAFA", "#171717",
    "#262626", "#FAFAFA", "#262626", "#A3A3A3", "#262626", "#FAFAFA", "#7F1D1D", "#FAFAFA",
    "#262626", "#262626", "#D4D4D4",
];

static DEFAULT_THEME: OnceLock<Theme> = OnceLock::new();

pub fn default_theme() -> &'static Theme {
    DEFAULT_THEME.get_or_init(build_default_theme)
}

fn build_default_theme() -> Theme {
    Theme {
        light: palette_from(&LIGHT_VALUES),
        dark: palette_from(&DARK_VALUES),
        branding: Branding {
            logo_url: Some("/logo.svg".to_string()),
            logo_alt: Some("Store logo".to_string()),
            logo_width: Some(120),
            logo_height: Some(40),
            ..Branding::default()
        },
        font_id: Some(FALLBACK_FONT_ID.to_string()),
    }
}

fn palette_from(values: &[&str; 19]) -> Palette {
    PALETTE_KEYS
        .iter()
        .zip(values)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Check the process-wide default theme. Call once at startup.
pub fn validate_default_theme() -> ThemeResult<()> {
    validate_default(default_theme())
}

/// A theme usable as the merge base must cover every canonical key in both
/// modes with emittable values, and name a font from the catalog.
pub fn validate_default(theme: &Theme) -> ThemeResult<()> {
    for mode in ColorMode::ALL {
        let palette = theme.palette(mode);
        for key in PALETTE_KEYS {
            if !palette.contains_key(key) {
                return Err(ThemeError::MissingDefaultKey { mode, key });
            }
        }
        for (key, value) in palette {
            if !is_valid_palette_key(key) {
                return Err(ThemeError::InvalidDefaultKey {
                    mode,
                    key: key.clone(),
                });
            }
            classify_color(value).map_err(|source| ThemeError::InvalidDefaultValue {
                mode,
                key: key.clone(),
                source,
            })?;
        }
    }

    if let Some(font_id) = theme.font_id.as_deref() {
        if FontFamily::from_id(font_id).is_none() {
            return Err(ThemeError::UnknownDefaultFont(font_id.to_string()));
        }
    }

    Ok(())
}
