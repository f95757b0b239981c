use alloc::string::String;

use mithril_json::{DecodeError, EncodeError};

/// Failure of a capture or apply pass.
///
/// Every variant that concerns a single field names it, so the caller can
/// report which part of the snapshot is stale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MirrorError {
    #[error("the mirror holds no snapshot")]
    NotCaptured,
    #[error("`{type_path}` has no field table")]
    NotComposite { type_path: String },
    #[error("no field `{field}` on `{type_path}`, by name or alias")]
    FieldNotFound { field: String, type_path: String },
    #[error("failed to encode field `{field}`")]
    Encode {
        field: String,
        #[source]
        source: EncodeError,
    },
    #[error("failed to decode field `{field}`")]
    Decode {
        field: String,
        #[source]
        source: DecodeError,
    },
    #[error("field `{field}` expects `{expected}`, the snapshot produced `{found}`")]
    MismatchedType {
        field: String,
        expected: String,
        found: String,
    },
}

impl MirrorError {
    /// The field this error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldNotFound { field, .. }
            | Self::Encode { field, .. }
            | Self::Decode { field, .. }
            | Self::MismatchedType { field, .. } => Some(field),
            Self::NotCaptured | Self::NotComposite { .. } => None,
        }
    }
}
