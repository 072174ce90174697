use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ProofDecodeError, ROOT_PATH};

/// Reads the whole document in one attempt. The file handle is dropped on
/// every return path.
pub(crate) fn read_document(path: &Path, limit: Option<u64>) -> Result<Vec<u8>, ProofDecodeError> {
    let load_err = |source| ProofDecodeError::Load {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(load_err)?;
    let size = file.metadata().map_err(load_err)?.len();
    if let Some(limit) = limit {
        if size > limit {
            return Err(ProofDecodeError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    // The file may grow between `metadata` and the read.
    let read_limit = limit.map_or(u64::MAX, |limit| limit.saturating_add(1));
    file.take(read_limit)
        .read_to_end(&mut bytes)
        .map_err(load_err)?;
    if let Some(limit) = limit {
        let read = bytes.len() as u64;
        if read > limit {
            return Err(ProofDecodeError::TooLarge {
                path: path.to_path_buf(),
                size: read,
                limit,
            });
        }
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read proof document");
    Ok(bytes)
}

/// Parses one JSON document, reporting the path of the first node whose
/// shape does not match `T`.
pub(crate) fn parse_document<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProofDecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        ProofDecodeError::Decode {
            path,
            message: err.into_inner().to_string(),
        }
    })?;
    deserializer.end().map_err(|err| ProofDecodeError::Decode {
        path: ROOT_PATH.to_owned(),
        message: err.to_string(),
    })?;
    Ok(value)
}
