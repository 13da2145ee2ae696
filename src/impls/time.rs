use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::value::{Value, impl_value_cast_fn};

// Clock types are opaque terminals and are additionally seeded into the
// no-traverse registry so their record-shaped internals are never walked.

impl Value for Duration {
    impl_value_cast_fn!(Scalar);

    #[inline]
    fn clone_literal(&self) -> Box<dyn Value> {
        Box::new(*self)
    }

    #[inline]
    fn make_zero(&self) -> Box<dyn Value> {
        Box::new(Duration::ZERO)
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        *self == Duration::ZERO
    }
}

impl Value for SystemTime {
    impl_value_cast_fn!(Scalar);

    #[inline]
    fn clone_literal(&self) -> Box<dyn Value> {
        Box::new(*self)
    }

    #[inline]
    fn make_zero(&self) -> Box<dyn Value> {
        Box::new(UNIX_EPOCH)
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        *self == UNIX_EPOCH
    }
}
