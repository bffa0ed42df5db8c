use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ColorMode;

/// Palette key → CSS color value. Keys are custom property names without the
/// leading `--`.
pub type Palette = BTreeMap<String, String>;

/// A store's visual configuration. Every part may be partial; see
/// [`merge_theme`](super::merge_theme) for how gaps are filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub light: Palette,
    #[serde(default)]
    pub dark: Palette,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_id: Option<String>,
}

impl Theme {
    pub fn palette(&self, mode: ColorMode) -> &Palette {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn palette_mut(&mut self, mode: ColorMode) -> &mut Palette {
        match mode {
            ColorMode::Light => &mut self.light,
            ColorMode::Dark => &mut self.dark,
        }
    }
}

/// Store identity metadata. Absent fields are omitted on serialization,
/// never written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
}

const DEFAULT_FAVICON_HREF: &str = "/favicon.ico";

impl Branding {
    /// Per-field merge: `overrides` wins when a string field is non-empty
    /// after trimming, or when a numeric field is present at all.
    pub(super) fn merged_with(&self, overrides: &Branding) -> Branding {
        Branding {
            logo_url: pick_text(&overrides.logo_url, &self.logo_url),
            logo_alt: pick_text(&overrides.logo_alt, &self.logo_alt),
            logo_width: overrides.logo_width.or(self.logo_width),
            logo_height: overrides.logo_height.or(self.logo_height),
            contact_email: pick_text(&overrides.contact_email, &self.contact_email),
            contact_phone: pick_text(&overrides.contact_phone, &self.contact_phone),
            contact_address: pick_text(&overrides.contact_address, &self.contact_address),
            social_facebook: pick_text(&overrides.social_facebook, &self.social_facebook),
            social_instagram: pick_text(&overrides.social_instagram, &self.social_instagram),
            social_twitter: pick_text(&overrides.social_twitter, &self.social_twitter),
            favicon_url: pick_text(&overrides.favicon_url, &self.favicon_url),
            slogan: pick_text(&overrides.slogan, &self.slogan),
        }
    }

    pub fn favicon_href(&self) -> &str {
        self.favicon_url
            .as_deref()
            .filter(|href| !href.trim().is_empty())
            .unwrap_or(DEFAULT_FAVICON_HREF)
    }
}

fn pick_text(overrides: &Option<String>, fallback: &Option<String>) -> Option<String> {
    overrides
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| fallback.clone())
}

/// Palette keys become `--{key}` custom properties, so only identifier
/// characters are allowed.
pub fn is_valid_palette_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with("--")
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Trimmed key without a leading `--`, or `None` when it cannot name a
/// custom property.
pub fn normalize_palette_key(raw: &str) -> Option<&str> {
    let key = raw.trim();
    let key = key.strip_prefix("--").unwrap_or(key);
    is_valid_palette_key(key).then_some(key)
}
