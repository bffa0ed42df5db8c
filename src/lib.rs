//! Per-store theming for a multi-tenant storefront.
//!
//! A store's persisted theme is decoded leniently, merged over the built-in
//! default theme, and emitted as CSS custom properties for the page head.

pub mod checkout;
pub mod config;
pub mod css;
pub mod error;
pub mod fonts;
pub mod logging;
pub mod provider;
pub mod store;
pub mod theme;

pub use css::{theme_to_css_vars, theme_to_css_vars_with, CssOptions};
pub use error::{AppError, AppResult};
pub use provider::ThemeProvider;
pub use theme::{merge_theme, Branding, MergedTheme, Theme};

/// Process startup: logging, default theme check, configuration.
///
/// Fails only when the built-in default theme is incomplete.
pub fn startup() -> AppResult<config::AppConfig> {
    logging::init();
    theme::validate_default_theme()?;

    let config = config::load_app_config();
    tracing::info!(
        themes_dir = ?config.themes_dir,
        cookie = config.cookie_name(),
        "storefront theme ready"
    );
    Ok(config)
}
