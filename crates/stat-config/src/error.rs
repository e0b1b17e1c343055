use std::path::PathBuf;

use thiserror::Error;

pub type ConfResult<T> = Result<T, ConfError>;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("cannot read {kind} config {path:?}: {source}")]
    Read {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write config {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config {path:?} already exists")]
    Exists { path: PathBuf },
    #[error("invalid toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("{0}")]
    Validation(String),
}

impl ConfError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        ConfError::Validation(msg.into())
    }
}
