use serde::{Deserialize, Serialize};

use crate::field::{ExtensionFieldElement, FieldElement};

/// Default upper bound on a single proof document.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 256 * 1024 * 1024;

/// How reconstructed base-field values are finalised.
///
/// Digests are never reduced: a multi-limb digest is an integer larger than
/// `p` on purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalMode {
    /// Values are passed through exactly as the limbs encode them.
    #[default]
    Permissive,
    /// Field and extension values are reduced mod `p` after reconstruction.
    Strict,
}

impl CanonicalMode {
    /// Finalises `value`; the flag is set when strict mode had to reduce it.
    pub(crate) fn element(self, value: FieldElement) -> (FieldElement, bool) {
        match self {
            Self::Strict if !value.is_canonical() => (value.reduce(), true),
            _ => (value, false),
        }
    }

    pub(crate) fn extension(self, value: ExtensionFieldElement) -> (ExtensionFieldElement, bool) {
        match self {
            Self::Strict if !value.is_canonical() => (value.reduce(), true),
            _ => (value, false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub canonical_mode: CanonicalMode,
    /// `None` disables the size check.
    pub max_document_bytes: Option<u64>,
}

impl DecodeConfig {
    pub fn strict() -> Self {
        Self {
            canonical_mode: CanonicalMode::Strict,
            ..Self::default()
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            canonical_mode: CanonicalMode::Permissive,
            max_document_bytes: Some(DEFAULT_MAX_DOCUMENT_BYTES),
        }
    }
}
