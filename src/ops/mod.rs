//! Structural views and capability subtraits over [`Value`]s.

mod assoc;
mod optional;
mod record;
mod seq;

pub use assoc::{Assoc, AssocIter};
pub use optional::Optional;
pub use record::{Record, RecordFieldIter};
pub use seq::{Seq, SeqIter};

use crate::Value;

// -----------------------------------------------------------------------------
// Structural views

/// An immutable view of a [`Value`], resolved to its structural shape.
///
/// Obtained through [`Value::value_ref`]; the engine matches on this once
/// per value instead of chaining capability downcasts.
pub enum ValueRef<'a> {
    Record(&'a dyn Record),
    Seq(&'a dyn Seq),
    Assoc(&'a dyn Assoc),
    Optional(&'a dyn Optional),
    /// The payload held by a dynamic slot.
    Dynamic(&'a dyn Value),
    Bytes(&'a dyn Value),
    Scalar(&'a dyn Value),
}

/// A mutable view of a [`Value`], resolved to its structural shape.
pub enum ValueMut<'a> {
    Record(&'a mut dyn Record),
    Seq(&'a mut dyn Seq),
    Assoc(&'a mut dyn Assoc),
    Optional(&'a mut dyn Optional),
    /// The payload held by a dynamic slot.
    Dynamic(&'a mut dyn Value),
    Bytes(&'a mut dyn Value),
    Scalar(&'a mut dyn Value),
}

impl ValueRef<'_> {
    /// Returns the [`Kind`](crate::Kind) this view corresponds to.
    pub fn kind(&self) -> crate::Kind {
        match self {
            ValueRef::Record(_) => crate::Kind::Record,
            ValueRef::Seq(_) => crate::Kind::Seq,
            ValueRef::Assoc(_) => crate::Kind::Assoc,
            ValueRef::Optional(_) => crate::Kind::Optional,
            ValueRef::Dynamic(_) => crate::Kind::Dynamic,
            ValueRef::Bytes(_) => crate::Kind::Bytes,
            ValueRef::Scalar(_) => crate::Kind::Scalar,
        }
    }
}
