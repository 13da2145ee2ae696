//! Process-wide registries steering traversal and conversion.

mod convert;
mod no_traverse;

pub use convert::{ConvertError, add_conversion, remove_conversion};
pub use no_traverse::{add_no_traverse_type, remove_no_traverse_type};

pub(crate) use convert::conversion_for;
pub(crate) use no_traverse::is_no_traverse_type;
