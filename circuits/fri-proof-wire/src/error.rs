use std::path::PathBuf;

use thiserror::Error;

use crate::field::FieldError;

/// Path of the document root, matching `serde_path_to_error`'s rendering.
pub const ROOT_PATH: &str = ".";

#[derive(Debug, Error)]
pub enum ProofDecodeError {
    #[error("failed to read document {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document {} is {size} bytes, limit is {limit}", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("malformed document at {path}: {message}")]
    Decode { path: String, message: String },

    #[error("digest at {path} has no limbs")]
    InvalidDigest { path: String },
}

/// Coarse classification of [`ProofDecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Load,
    Decode,
    InvalidDigest,
}

impl ProofDecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load { .. } | Self::TooLarge { .. } => ErrorKind::Load,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidDigest { .. } => ErrorKind::InvalidDigest,
        }
    }

    /// Location of the offending node inside the document, if any.
    pub fn document_path(&self) -> Option<&str> {
        match self {
            Self::Decode { path, .. } | Self::InvalidDigest { path } => Some(path),
            Self::Load { .. } | Self::TooLarge { .. } => None,
        }
    }

    pub(crate) fn from_field(err: FieldError) -> Self {
        match err {
            FieldError::EmptyLimbs => Self::InvalidDigest {
                path: ROOT_PATH.to_owned(),
            },
            FieldError::ExtensionDegree { .. } => Self::Decode {
                path: ROOT_PATH.to_owned(),
                message: err.to_string(),
            },
        }
    }

    /// Prefixes the node path with an object key as the error moves up a level.
    pub(crate) fn at_field(self, name: &str) -> Self {
        self.map_path(|path| {
            if path == ROOT_PATH {
                name.to_owned()
            } else if path.starts_with('[') {
                format!("{name}{path}")
            } else {
                format!("{name}.{path}")
            }
        })
    }

    /// Prefixes the node path with an array index as the error moves up a level.
    pub(crate) fn at_index(self, index: usize) -> Self {
        self.map_path(|path| {
            if path == ROOT_PATH {
                format!("[{index}]")
            } else if path.starts_with('[') {
                format!("[{index}]{path}")
            } else {
                format!("[{index}].{path}")
            }
        })
    }

    fn map_path(self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Self::Decode { path, message } => Self::Decode {
                path: f(&path),
                message,
            },
            Self::InvalidDigest { path } => Self::InvalidDigest { path: f(&path) },
            other => other,
        }
    }
}
