use thiserror::Error;

use crate::registry::ConvertError;
use crate::value::Kind;

// -----------------------------------------------------------------------------
// TransferError

/// A per-field failure recorded while copying between records.
///
/// The engine never aborts on a field failure: it records the error, leaves
/// that destination field untouched and moves on, so one call reports every
/// incompatible field at once. Only [`TransferError::EmptySource`] is
/// operation-level.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// The source record resolved to nothing (an absent optional or empty
    /// dynamic slot at the top level).
    #[error("source is empty")]
    EmptySource,

    /// The source field has no counterpart in the destination record.
    #[error("field `{field}`: no matching field in destination")]
    FieldNotFound { field: &'static str },

    /// The field pair disagrees on structural shape.
    #[error("field `{field}`: kind mismatch, cannot copy {from} into {to}")]
    KindMismatch {
        field: &'static str,
        from: Kind,
        to: Kind,
    },

    /// The field pair agrees on shape but not on concrete type.
    #[error("field `{field}`: type mismatch, cannot copy `{from}` into `{to}`")]
    TypeMismatch {
        field: &'static str,
        from: &'static str,
        to: &'static str,
    },

    /// A registered conversion for the field pair failed.
    #[error("field `{field}`: conversion failed")]
    Conversion {
        field: &'static str,
        #[source]
        source: ConvertError,
    },
}

impl TransferError {
    /// Returns the name of the field this error concerns, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            TransferError::EmptySource => None,
            TransferError::FieldNotFound { field }
            | TransferError::KindMismatch { field, .. }
            | TransferError::TypeMismatch { field, .. }
            | TransferError::Conversion { field, .. } => Some(field),
        }
    }
}
