//! Document loading utilities
//!
//! [`DocumentLoader`] reads man page source from a file or a string and runs
//! conversion pipelines on it. Used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use man2rst::man2rst::loader::DocumentLoader;
//!
//! let rst = DocumentLoader::from_path("ls.1")?.convert()?;
//! ```

use crate::man2rst::config::ConvertConfig;
use crate::man2rst::document::Document;
use crate::man2rst::transforms::standard::{pipeline, MAN_TO_DOCUMENT};
use crate::man2rst::transforms::{Transform, TransformError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    /// The input file could not be opened or read; `message` is the OS reason
    Io { path: PathBuf, message: String },
    /// The input file was read but is not valid UTF-8
    Decode { path: PathBuf, message: String },
    /// Transform error
    TransformError(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io { path, .. } => {
                write!(f, "Cannot load input file: '{}'", path.display())
            }
            LoaderError::Decode { path, message } => {
                write!(f, "Cannot decode input file '{}': {}", path.display(), message)
            }
            LoaderError::TransformError(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::TransformError(err)
    }
}

/// Man page source with conversion shortcuts
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => LoaderError::Decode {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            _ => LoaderError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        })?;
        log::debug!("loaded {} bytes from {}", source.len(), path.display());
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Convert with default settings
    pub fn document(&self) -> Result<Document, LoaderError> {
        self.with(&*MAN_TO_DOCUMENT)
    }

    /// Convert with `config`
    pub fn document_with(&self, config: &ConvertConfig) -> Result<Document, LoaderError> {
        self.with(&pipeline(config))
    }

    /// Convert with default settings and render to rst text
    pub fn convert(&self) -> Result<String, LoaderError> {
        Ok(self.document()?.render())
    }

    /// Convert with `config` and render to rst text
    pub fn convert_with(&self, config: &ConvertConfig) -> Result<String, LoaderError> {
        Ok(self.document_with(config)?.render())
    }
}
