use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::css::CssOptions;
use crate::store::DEFAULT_STORE_COOKIE;

const APP_DIR: &str = "storefront-theme";
const APP_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigPathError {
    #[error("neither XDG_CONFIG_HOME nor HOME is set")]
    MissingHomeDirectory,
}

/// Settings from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub root_selector: Option<String>,
    #[serde(default)]
    pub dark_selector: Option<String>,
    #[serde(default)]
    pub cookie_name: Option<String>,
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn css_options(&self) -> CssOptions {
        CssOptions::new(self.root_selector.as_deref(), self.dark_selector.as_deref())
    }

    pub fn cookie_name(&self) -> &str {
        self.cookie_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_STORE_COOKIE)
    }
}

/// Base directories `config.json` is looked up under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDirs {
    pub xdg_config_home: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl ConfigDirs {
    pub fn from_env() -> Self {
        Self {
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// `$XDG_CONFIG_HOME/storefront-theme/config.json`, or the same under
    /// `$HOME/.config` when the XDG variable is unset or empty.
    pub fn config_file(&self) -> Result<PathBuf, ConfigPathError> {
        let xdg = self
            .xdg_config_home
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty());
        let root = match xdg {
            Some(xdg) => xdg.to_path_buf(),
            None => self
                .home
                .as_deref()
                .ok_or(ConfigPathError::MissingHomeDirectory)?
                .join(".config"),
        };
        Ok(root.join(APP_DIR).join(APP_CONFIG_FILE))
    }
}

pub fn load_app_config() -> AppConfig {
    load_app_config_from(&ConfigDirs::from_env())
}

/// A missing file means defaults; an unreadable or invalid one is logged and
/// also yields defaults.
pub fn load_app_config_from(dirs: &ConfigDirs) -> AppConfig {
    let path = match dirs.config_file() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(%err, "no config directory; using defaults");
            return AppConfig::default();
        }
    };

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            tracing::warn!(?err, path = %path.display(), "failed to read config.json; using defaults");
            return AppConfig::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(?err, path = %path.display(), "failed to parse config.json; using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("storefront-config-{pid}-{nanos}"));
        path
    }

    fn xdg_dirs(root: &Path) -> ConfigDirs {
        ConfigDirs {
            xdg_config_home: Some(root.to_path_buf()),
            home: None,
        }
    }

    fn with_config_file<F: FnOnce(&Path)>(contents: &str, f: F) {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(APP_CONFIG_FILE), contents).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn config_file_prefers_xdg_config_home() {
        let dirs = ConfigDirs {
            xdg_config_home: Some(PathBuf::from("/tmp/config-root")),
            home: Some(PathBuf::from("/tmp/home")),
        };
        assert_eq!(
            dirs.config_file().unwrap(),
            PathBuf::from("/tmp/config-root/storefront-theme/config.json")
        );
    }

    #[test]
    fn config_file_falls_back_to_home_dot_config() {
        let dirs = ConfigDirs {
            xdg_config_home: Some(PathBuf::new()),
            home: Some(PathBuf::from("/tmp/home")),
        };
        assert_eq!(
            dirs.config_file().unwrap(),
            PathBuf::from("/tmp/home/.config/storefront-theme/config.json")
        );
    }

    #[test]
    fn config_file_errors_without_any_base_directory() {
        let err = ConfigDirs::default().config_file().unwrap_err();
        assert_eq!(err, ConfigPathError::MissingHomeDirectory);
        assert_eq!(err.to_string(), "neither XDG_CONFIG_HOME nor HOME is set");
        assert_eq!(load_app_config_from(&ConfigDirs::default()), AppConfig::default());
    }

    #[test]
    fn load_app_config_defaults_when_missing() {
        let config = load_app_config_from(&xdg_dirs(&fixture_root()));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cookie_name(), DEFAULT_STORE_COOKIE);
        assert_eq!(config.css_options(), CssOptions::default());
    }

    #[test]
    fn load_app_config_reads_selectors_and_paths() {
        with_config_file(
            r#"{
                "darkSelector": "[data-theme=dark]",
                "cookieName": "tienda",
                "themesDir": "/srv/themes"
            }"#,
            |root| {
                let config = load_app_config_from(&xdg_dirs(root));
                assert_eq!(config.cookie_name(), "tienda");
                assert_eq!(config.themes_dir, Some(PathBuf::from("/srv/themes")));
                let options = config.css_options();
                assert_eq!(options.root_selector(), ":root");
                assert_eq!(options.dark_selector(), "[data-theme=dark]");
            },
        );
    }

    #[test]
    fn load_app_config_invalid_payload_uses_defaults() {
        with_config_file("{ invalid ", |root| {
            assert_eq!(load_app_config_from(&xdg_dirs(root)), AppConfig::default());
        });
    }
}
