pub mod cookie;
pub mod error;
pub mod source;

use std::fmt;

pub use cookie::{active_store_from_cookie, DEFAULT_STORE_COOKIE};
pub use error::{StoreError, StoreResult};
pub use source::{InMemoryThemeSource, JsonDirThemeSource, ThemeSource};

const MAX_STORE_ID_LEN: usize = 64;

/// Identifier of a tenant store. Safe to use as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(raw: &str) -> StoreResult<Self> {
        let id = raw.trim();
        let valid = !id.is_empty()
            && id.len() <= MAX_STORE_ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidStoreId(raw.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
