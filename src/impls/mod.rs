//! [`Value`](crate::Value) implementations for std types.

mod assoc;
mod dynamic;
mod option;
mod scalar;
mod sequence;
mod time;
