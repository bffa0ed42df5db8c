use std::fmt::Write as _;

use crate::css::{theme_to_css_vars_with, CssOptions};
use crate::fonts::FontFamily;
use crate::store::{StoreId, ThemeSource};
use crate::theme::{merge_theme, MergedTheme};

pub const STYLE_ELEMENT_ID: &str = "store-theme";

pub struct ThemeProvider<S> {
    source: S,
    options: CssOptions,
}

impl<S: ThemeSource> ThemeProvider<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, CssOptions::default())
    }

    pub fn with_options(source: S, options: CssOptions) -> Self {
        Self { source, options }
    }

    /// Merged theme for the store, or the default theme when there is no
    /// active store or its theme cannot be loaded.
    pub fn theme_for(&self, store: Option<&StoreId>) -> MergedTheme {
        let Some(store) = store else {
            return merge_theme(None);
        };

        match self.source.load_theme(store) {
            Ok(theme) => merge_theme(theme.as_ref()),
            Err(err) => {
                tracing::warn!(%store, error = %err, "failed to load store theme; using defaults");
                merge_theme(None)
            }
        }
    }

    pub fn stylesheet_for(&self, store: Option<&StoreId>) -> String {
        render_stylesheet(&self.theme_for(store), &self.options)
    }

    pub fn style_tag_for(&self, store: Option<&StoreId>) -> String {
        style_tag(&self.stylesheet_for(store))
    }
}

/// Palette variables followed by the `--font-sans` variable of the theme font.
pub fn render_stylesheet(theme: &MergedTheme, options: &CssOptions) -> String {
    let mut css = theme_to_css_vars_with(theme, options);
    let font = FontFamily::resolve(theme.font_id());
    let _ = write!(
        css,
        "\n{root} {{\n  --font-sans: {stack};\n}}\n",
        root = options.root_selector(),
        stack = font.css_stack(),
    );
    css
}

pub fn style_tag(css: &str) -> String {
    format!("<style id=\"{STYLE_ELEMENT_ID}\">\n{css}</style>")
}
