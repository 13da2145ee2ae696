use core::any::TypeId;

use crate::ops::{ValueMut, ValueRef};
use crate::value::{Kind, Value};

// A dynamic slot: any concrete value behind one more indirection. The slot
// reports its own kind but forwards identity to the payload, so type checks
// resolve to whatever the slot currently holds.
impl Value for Box<dyn Value> {
    #[inline]
    fn type_path(&self) -> &'static str {
        (**self).type_path()
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        (**self).ty_id()
    }

    #[inline]
    fn value_kind(&self) -> Kind {
        Kind::Dynamic
    }

    #[inline]
    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Dynamic(&**self)
    }

    #[inline]
    fn value_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Dynamic(&mut **self)
    }

    fn set_boxed(&mut self, value: Box<dyn Value>) -> Result<(), Box<dyn Value>> {
        // A slot accepts any payload; unwrap one level so assigning from
        // another slot's clone does not nest boxes.
        *self = match value.take::<Box<dyn Value>>() {
            Ok(inner) => inner,
            Err(value) => value,
        };
        Ok(())
    }

    fn clone_literal(&self) -> Box<dyn Value> {
        Box::new((**self).clone_literal())
    }

    fn make_zero(&self) -> Box<dyn Value> {
        Box::new((**self).make_zero())
    }

    /// A filled slot is never zero, whatever it holds.
    #[inline]
    fn is_zero_value(&self) -> bool {
        false
    }

    #[inline]
    fn key_string(&self) -> String {
        (**self).key_string()
    }
}
