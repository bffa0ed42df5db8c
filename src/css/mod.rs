//! Palette keys become `--key` custom properties under the root and dark selectors.

use std::fmt::Write as _;

use crate::theme::{
    classify_color, default_theme, is_valid_palette_key, ColorMode, MergedTheme, Palette,
    PALETTE_KEYS,
};

pub const DEFAULT_ROOT_SELECTOR: &str = ":root";
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOptions {
    root_selector: String,
    dark_selector: String,
}

impl CssOptions {
    /// Selectors that could break out of the rule are replaced by the defaults.
    pub fn new(root_selector: Option<&str>, dark_selector: Option<&str>) -> Self {
        Self {
            root_selector: checked_selector(root_selector, DEFAULT_ROOT_SELECTOR),
            dark_selector: checked_selector(dark_selector, DEFAULT_DARK_SELECTOR),
        }
    }

    pub fn root_selector(&self) -> &str {
        &self.root_selector
    }

    pub fn dark_selector(&self) -> &str {
        &self.dark_selector
    }
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            root_selector: DEFAULT_ROOT_SELECTOR.to_string(),
            dark_selector: DEFAULT_DARK_SELECTOR.to_string(),
        }
    }
}

fn checked_selector(selector: Option<&str>, fallback: &str) -> String {
    let Some(selector) = selector.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback.to_string();
    };
    let safe = selector
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || " .#:-_[]=()>+~,*".contains(c));
    if safe && brackets_balanced(selector) {
        selector.to_string()
    } else {
        tracing::warn!(selector, fallback, "rejecting unsafe css selector");
        fallback.to_string()
    }
}

fn brackets_balanced(selector: &str) -> bool {
    let mut open = Vec::new();
    for c in selector.chars() {
        match c {
            '[' | '(' => open.push(c),
            ']' if open.pop() != Some('[') => return false,
            ')' if open.pop() != Some('(') => return false,
            _ => {}
        }
    }
    open.is_empty()
}

pub fn theme_to_css_vars(merged: &MergedTheme) -> String {
    theme_to_css_vars_with(merged, &CssOptions::default())
}

pub fn theme_to_css_vars_with(merged: &MergedTheme, options: &CssOptions) -> String {
    let mut css = String::new();
    write_rule(
        &mut css,
        options.root_selector(),
        ColorMode::Light,
        merged.palette(ColorMode::Light),
    );
    css.push('\n');
    write_rule(
        &mut css,
        options.dark_selector(),
        ColorMode::Dark,
        merged.palette(ColorMode::Dark),
    );
    css
}

/// `--{key}` for keys that are valid property identifiers.
pub fn custom_property_name(key: &str) -> Option<String> {
    is_valid_palette_key(key).then(|| format!("--{key}"))
}

fn write_rule(css: &mut String, selector: &str, mode: ColorMode, palette: &Palette) {
    let _ = writeln!(css, "{selector} {{");
    for key in ordered_keys(palette) {
        let Some(name) = custom_property_name(key) else {
            tracing::warn!(%mode, key, "skipping palette key that is not a valid property name");
            continue;
        };
        let Some(value) = emittable_value(mode, key, &palette[key]) else {
            continue;
        };
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");
}

fn ordered_keys(palette: &Palette) -> Vec<&str> {
    let mut keys: Vec<&str> = PALETTE_KEYS
        .iter()
        .filter_map(|key| palette.get_key_value(*key))
        .map(|(key, _)| key.as_str())
        .collect();
    keys.extend(
        palette
            .keys()
            .map(String::as_str)
            .filter(|key| !PALETTE_KEYS.iter().any(|canonical| canonical == key)),
    );
    keys
}

fn emittable_value<'a>(mode: ColorMode, key: &str, value: &'a str) -> Option<&'a str> {
    match classify_color(value) {
        Ok(_) => Some(value.trim()),
        Err(err) => {
            let fallback = default_theme().palette(mode).get(key).map(String::as_str);
            tracing::warn!(
                %mode,
                key,
                error = %err,
                has_default = fallback.is_some(),
                "rejecting unsafe palette value"
            );
            fallback
        }
    }
}
