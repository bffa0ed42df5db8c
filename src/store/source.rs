use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde_json::Value;

use super::{StoreError, StoreId, StoreResult};
use crate::theme::Theme;

const THEME_FILE_EXTENSION: &str = "json";

/// Supplies the persisted, possibly partial theme of a store.
pub trait ThemeSource: Send + Sync {
    /// `Ok(None)` when the store has no theme of its own.
    fn load_theme(&self, store: &StoreId) -> StoreResult<Option<Theme>>;
}

/// Raw theme JSON held in memory, as it would come out of a store record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeSource {
    themes: HashMap<StoreId, Value>,
}

impl InMemoryThemeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, store: StoreId, theme: Value) {
        self.themes.insert(store, theme);
    }

    pub fn with_theme(mut self, store: StoreId, theme: Value) -> Self {
        self.insert(store, theme);
        self
    }
}

impl ThemeSource for InMemoryThemeSource {
    fn load_theme(&self, store: &StoreId) -> StoreResult<Option<Theme>> {
        Ok(self.themes.get(store).and_then(Theme::from_json_value))
    }
}

/// One `<store-id>.json` file per store.
#[derive(Debug, Clone)]
pub struct JsonDirThemeSource {
    dir: PathBuf,
}

impl JsonDirThemeSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn theme_path(&self, store: &StoreId) -> PathBuf {
        let mut path = self.dir.join(store.as_str());
        path.set_extension(THEME_FILE_EXTENSION);
        path
    }
}

impl ThemeSource for JsonDirThemeSource {
    fn load_theme(&self, store: &StoreId) -> StoreResult<Option<Theme>> {
        let path = self.theme_path(store);
        let serialized = match fs::read_to_string(&path) {
            Ok(serialized) => serialized,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(%store, path = %path.display(), "store has no theme file");
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        Theme::from_json_str(&serialized).map_err(|source| StoreError::Parse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("storefront-themes-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn store(id: &str) -> StoreId {
        StoreId::new(id).unwrap()
    }

    #[test]
    fn in_memory_source_decodes_stored_json() {
        let source = InMemoryThemeSource::new()
            .with_theme(store("main"), json!({ "light": { "primary": "#ff0000" } }))
            .with_theme(store("broken"), json!("not a theme"));

        let theme = source.load_theme(&store("main")).unwrap().unwrap();
        assert_eq!(theme.light["primary"], "#ff0000");
        assert!(source.load_theme(&store("broken")).unwrap().is_none());
        assert!(source.load_theme(&store("missing")).unwrap().is_none());
    }

    #[test]
    fn json_dir_source_reads_store_file() {
        with_temp_root(|root| {
            fs::write(
                root.join("tienda.json"),
                r##"{ "dark": { "background": "#101010" }, "fontId": "lato" }"##,
            )
            .unwrap();

            let source = JsonDirThemeSource::new(root);
            let theme = source.load_theme(&store("tienda")).unwrap().unwrap();
            assert_eq!(theme.dark["background"], "#101010");
            assert_eq!(theme.font_id.as_deref(), Some("lato"));
        });
    }

    #[test]
    fn json_dir_source_missing_file_is_no_theme() {
        with_temp_root(|root| {
            let source = JsonDirThemeSource::new(root);
            assert!(source.load_theme(&store("nobody")).unwrap().is_none());
        });
    }

    #[test]
    fn json_dir_source_rejects_invalid_payload() {
        with_temp_root(|root| {
            fs::write(root.join("bad.json"), "{ invalid ").unwrap();
            let source = JsonDirThemeSource::new(root);
            let err = source.load_theme(&store("bad")).unwrap_err();
            assert!(matches!(err, StoreError::Parse { .. }));
        });
    }

    #[test]
    fn json_dir_source_reports_unreadable_file() {
        with_temp_root(|root| {
            fs::create_dir_all(root.join("shop.json")).unwrap();
            let source = JsonDirThemeSource::new(root);
            let err = source.load_theme(&store("shop")).unwrap_err();
            match err {
                StoreError::Read { path, source } => {
                    assert_eq!(path, root.join("shop.json"));
                    assert_ne!(source.kind(), io::ErrorKind::NotFound);
                }
                other => panic!("expected read error, got {other:?}"),
            }
        });
    }

    #[test]
    fn theme_path_uses_store_id_as_file_stem() {
        let source = JsonDirThemeSource::new("/srv/themes");
        assert_eq!(
            source.theme_path(&store("shop-1")),
            PathBuf::from("/srv/themes/shop-1.json")
        );
    }
}
