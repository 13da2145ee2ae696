//! Deep value transfer and introspection over annotated record types.
//!
//! `remodel` copies, clones and flattens arbitrarily nested records without
//! hand-written per-type plumbing. Record types opt in with
//! [`#[derive(Model)]`](Model); fields steer the engine with
//! `#[model("name,omitempty,notraverse")]` annotations and the
//! `#[model(embedded)]` marker.
//!
//! # Operations
//!
//! - [`copy`] / [`clone_record`] — deep field-by-field transfer with
//!   per-field error accumulation.
//! - [`field_map`] — flatten a record into a [`FieldMap`], splicing embedded
//!   fields into the parent.
//! - [`is_zero`] / [`has_zero`] / [`is_zero_in_fields`] — zero-value tests.
//! - [`fields`] / [`tag()`] / [`tags`] / [`field_kind`] — introspection;
//!   [`get_field`] / [`set_field`] — by-name access.
//! - [`add_no_traverse_type`] / [`add_conversion`] — process-wide registries
//!   steering traversal and cross-type assignment.
//!
//! # Examples
//!
//! ```
//! use remodel::{Model, copy, field_map, is_zero};
//!
//! #[derive(Model, Default)]
//! struct Author {
//!     pub name: String,
//!     #[model("handle")]
//!     pub login: String,
//!     #[model(",omitempty")]
//!     pub karma: i64,
//! }
//!
//! let src = Author { name: "Jeevanandam".into(), login: "jeeva".into(), karma: 0 };
//! assert!(!is_zero(&src));
//!
//! let mut dst = Author::default();
//! copy(&mut dst, &src).unwrap();
//! assert_eq!(dst.login, "jeeva");
//!
//! let map = field_map(&src);
//! assert!(map.contains_key("handle"));
//! assert!(!map.contains_key("karma"));
//! ```

extern crate self as remodel;

pub mod hash;
pub mod ops;

mod access;
mod impls;
mod info;
mod registry;
mod tag;
mod transfer;
mod value;
mod zero;

pub use access::{AccessError, field_kind, fields, get_field, set_field, tag, tags};
pub use info::FieldInfo;
pub use ops::{Assoc, Optional, Record, Seq};
pub use registry::{
    ConvertError, add_conversion, add_no_traverse_type, remove_conversion,
    remove_no_traverse_type,
};
pub use tag::Tag;
pub use transfer::{FieldMap, TransferError, clone_record, copy, field_map};
pub use value::{Kind, Value};
pub use zero::{has_zero, is_zero, is_zero_in_fields};

pub use remodel_derive::Model;

// -----------------------------------------------------------------------------

#[doc(hidden)]
pub mod __macro_exports {
    pub use crate::info::FieldInfo;
    use crate::value::Value;

    /// Unboxes a value known to be of type `T`.
    ///
    /// Every `Value` impl reproduces its own concrete type from
    /// `clone_literal` and `make_zero`; a mismatch here is an impl bug.
    pub fn concrete<T: Value>(boxed: Box<dyn Value>) -> T {
        match boxed.take::<T>() {
            Ok(value) => value,
            Err(other) => panic!(
                "expected a value of type `{}`, got `{}`",
                core::any::type_name::<T>(),
                other.type_path(),
            ),
        }
    }
}
