use serde_json::{Map, Value};

use super::model::{normalize_palette_key, Branding, Palette, Theme};
use super::ColorMode;

impl Theme {
    /// Decode a persisted theme. Anything other than a JSON object is treated
    /// as "no theme".
    pub fn from_json_value(value: &Value) -> Option<Theme> {
        let Some(object) = value.as_object() else {
            if !value.is_null() {
                tracing::debug!(kind = json_kind(value), "ignoring non-object theme value");
            }
            return None;
        };

        Some(Theme {
            light: decode_palette(ColorMode::Light, object.get("light")),
            dark: decode_palette(ColorMode::Dark, object.get("dark")),
            branding: decode_branding(object.get("branding")),
            font_id: text_field(object, "fontId"),
        })
    }

    pub fn from_json_str(serialized: &str) -> serde_json::Result<Option<Theme>> {
        let raw: Value = serde_json::from_str(serialized)?;
        Ok(Theme::from_json_value(&raw))
    }
}

fn decode_palette(mode: ColorMode, value: Option<&Value>) -> Palette {
    let Some(entries) = value.and_then(Value::as_object) else {
        return Palette::new();
    };

    let mut palette = Palette::new();
    for (raw_key, raw_value) in entries {
        let Some(key) = normalize_palette_key(raw_key) else {
            tracing::debug!(%mode, key = %raw_key, "dropping palette entry with invalid key");
            continue;
        };
        match raw_value {
            Value::String(color) => {
                palette.insert(key.to_string(), color.clone());
            }
            Value::Null => {}
            other => {
                tracing::debug!(
                    %mode,
                    key,
                    kind = json_kind(other),
                    "dropping non-string palette entry"
                );
            }
        }
    }
    palette
}

fn decode_branding(value: Option<&Value>) -> Branding {
    let Some(object) = value.and_then(Value::as_object) else {
        return Branding::default();
    };

    Branding {
        logo_url: text_field(object, "logoUrl"),
        logo_alt: text_field(object, "logoAlt"),
        logo_width: pixel_field(object, "logoWidth"),
        logo_height: pixel_field(object, "logoHeight"),
        contact_email: text_field(object, "contactEmail"),
        contact_phone: text_field(object, "contactPhone"),
        contact_address: text_field(object, "contactAddress"),
        social_facebook: text_field(object, "socialFacebook"),
        social_instagram: text_field(object, "socialInstagram"),
        social_twitter: text_field(object, "socialTwitter"),
        favicon_url: text_field(object, "faviconUrl"),
        slogan: text_field(object, "slogan"),
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => {
            tracing::debug!(key, kind = json_kind(other), "dropping non-string field");
            None
        }
    }
}

fn pixel_field(object: &Map<String, Value>, key: &str) -> Option<u32> {
    let parsed = match object.get(key)? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.fract() == 0.0 && *n >= 0.0)
                    .map(|n| n as u64)
            })
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        Value::Null => return None,
        _ => None,
    };
    if parsed.is_none() {
        tracing::debug!(key, "dropping unusable pixel dimension");
    }
    parsed
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
