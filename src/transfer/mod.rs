//! The recursive value-transfer engine: copy, clone and flatten-to-map.

mod copy;
mod error;
mod map;

pub use copy::{clone_record, copy};
pub use error::TransferError;
pub use map::{FieldMap, field_map};
