use serde::Serialize;

use super::defaults::default_theme;
use super::model::{normalize_palette_key, Branding, Palette, Theme};
use super::ColorMode;
use crate::fonts::FALLBACK_FONT_ID;

/// A theme with every default key filled in. Only produced by the merger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedTheme(Theme);

impl MergedTheme {
    pub fn as_theme(&self) -> &Theme {
        &self.0
    }

    pub fn palette(&self, mode: ColorMode) -> &Palette {
        self.0.palette(mode)
    }

    pub fn branding(&self) -> &Branding {
        &self.0.branding
    }

    pub fn font_id(&self) -> &str {
        self.0.font_id.as_deref().unwrap_or(FALLBACK_FONT_ID)
    }
}

/// Resolve a store's partial theme against the built-in default theme.
pub fn merge_theme(partial: Option<&Theme>) -> MergedTheme {
    merge_theme_over(default_theme(), partial)
}

/// Resolve a partial theme against an explicit base theme.
pub fn merge_theme_over(defaults: &Theme, partial: Option<&Theme>) -> MergedTheme {
    let Some(partial) = partial else {
        let mut theme = defaults.clone();
        theme.font_id = Some(resolve_font_id(None, defaults));
        return MergedTheme(theme);
    };

    MergedTheme(Theme {
        light: merge_palette(ColorMode::Light, &defaults.light, &partial.light),
        dark: merge_palette(ColorMode::Dark, &defaults.dark, &partial.dark),
        branding: defaults.branding.merged_with(&partial.branding),
        font_id: Some(resolve_font_id(partial.font_id.as_deref(), defaults)),
    })
}

fn merge_palette(mode: ColorMode, defaults: &Palette, overrides: &Palette) -> Palette {
    let mut merged = defaults.clone();
    for (raw_key, value) in overrides {
        let Some(key) = normalize_palette_key(raw_key) else {
            tracing::debug!(%mode, key = %raw_key, "skipping override with invalid key");
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        merged.insert(key.to_string(), value.to_string());
    }
    merged
}

fn resolve_font_id(requested: Option<&str>, defaults: &Theme) -> String {
    requested
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .or_else(|| defaults.font_id.as_deref())
        .unwrap_or(FALLBACK_FONT_ID)
        .to_string()
}
