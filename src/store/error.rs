use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store id `{0}`")]
    InvalidStoreId(String),
    #[error("failed to read store theme: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse store theme: {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
