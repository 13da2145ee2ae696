use core::any::TypeId;

use crate::__macro_exports::concrete;
use crate::ops::{Seq, ValueMut, ValueRef};
use crate::value::{Kind, Value};

#[inline]
fn is_byte_elem<T: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<u8>()
}

// -----------------------------------------------------------------------------
// Vec<T>

impl<T: Value> Value for Vec<T> {
    #[inline]
    fn value_kind(&self) -> Kind {
        if is_byte_elem::<T>() { Kind::Bytes } else { Kind::Seq }
    }

    #[inline]
    fn value_ref(&self) -> ValueRef<'_> {
        if is_byte_elem::<T>() {
            ValueRef::Bytes(self)
        } else {
            ValueRef::Seq(self)
        }
    }

    #[inline]
    fn value_mut(&mut self) -> ValueMut<'_> {
        if is_byte_elem::<T>() {
            ValueMut::Bytes(self)
        } else {
            ValueMut::Seq(self)
        }
    }

    fn set_boxed(&mut self, value: Box<dyn Value>) -> Result<(), Box<dyn Value>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn clone_literal(&self) -> Box<dyn Value> {
        let cloned: Vec<T> = self
            .iter()
            .map(|elem| concrete::<T>(elem.clone_literal()))
            .collect();
        Box::new(cloned)
    }

    fn make_zero(&self) -> Box<dyn Value> {
        Box::new(Vec::<T>::new())
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Value> Seq for Vec<T> {
    #[inline]
    fn elem(&self, index: usize) -> Option<&dyn Value> {
        self.get(index).map(|elem| elem as &dyn Value)
    }

    #[inline]
    fn elem_len(&self) -> usize {
        self.len()
    }

    fn rebuild_with(&self, f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>) -> Box<dyn Value> {
        let mut out = Vec::with_capacity(self.len());
        for elem in self {
            out.push(match f(elem).take::<T>() {
                Ok(mapped) => mapped,
                Err(_) => concrete::<T>(elem.clone_literal()),
            });
        }
        Box::new(out)
    }

    fn rebuild_from(
        &self,
        src: &dyn Seq,
        convert: &mut dyn FnMut(&dyn Value, TypeId) -> Option<Box<dyn Value>>,
    ) -> Option<Box<dyn Value>> {
        let mut out = Vec::with_capacity(src.elem_len());
        for elem in src.iter_elems() {
            out.push(convert(elem, TypeId::of::<T>())?.take::<T>().ok()?);
        }
        Some(Box::new(out))
    }
}

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Value, const N: usize> Value for [T; N] {
    #[inline]
    fn value_kind(&self) -> Kind {
        if is_byte_elem::<T>() { Kind::Bytes } else { Kind::Seq }
    }

    #[inline]
    fn value_ref(&self) -> ValueRef<'_> {
        if is_byte_elem::<T>() {
            ValueRef::Bytes(self)
        } else {
            ValueRef::Seq(self)
        }
    }

    #[inline]
    fn value_mut(&mut self) -> ValueMut<'_> {
        if is_byte_elem::<T>() {
            ValueMut::Bytes(self)
        } else {
            ValueMut::Seq(self)
        }
    }

    fn set_boxed(&mut self, value: Box<dyn Value>) -> Result<(), Box<dyn Value>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn clone_literal(&self) -> Box<dyn Value> {
        let cloned: [T; N] = core::array::from_fn(|i| concrete::<T>(self[i].clone_literal()));
        Box::new(cloned)
    }

    fn make_zero(&self) -> Box<dyn Value> {
        let zero: [T; N] = core::array::from_fn(|i| concrete::<T>(self[i].make_zero()));
        Box::new(zero)
    }

    fn is_zero_value(&self) -> bool {
        self.iter().all(Value::is_zero_value)
    }
}

impl<T: Value, const N: usize> Seq for [T; N] {
    #[inline]
    fn elem(&self, index: usize) -> Option<&dyn Value> {
        self.get(index).map(|elem| elem as &dyn Value)
    }

    #[inline]
    fn elem_len(&self) -> usize {
        N
    }

    fn rebuild_with(&self, f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>) -> Box<dyn Value> {
        let rebuilt: [T; N] = core::array::from_fn(|i| match f(&self[i]).take::<T>() {
            Ok(mapped) => mapped,
            Err(_) => concrete::<T>(self[i].clone_literal()),
        });
        Box::new(rebuilt)
    }

    fn rebuild_from(
        &self,
        src: &dyn Seq,
        convert: &mut dyn FnMut(&dyn Value, TypeId) -> Option<Box<dyn Value>>,
    ) -> Option<Box<dyn Value>> {
        if src.elem_len() != N {
            return None;
        }
        let mut out = Vec::with_capacity(N);
        for elem in src.iter_elems() {
            out.push(convert(elem, TypeId::of::<T>())?.take::<T>().ok()?);
        }
        match <[T; N]>::try_from(out) {
            Ok(rebuilt) => Some(Box::new(rebuilt)),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::Seq;
    use crate::{Kind, Value};

    #[test]
    fn byte_payloads_are_not_sequences() {
        assert_eq!(vec![1_u8, 2].value_kind(), Kind::Bytes);
        assert_eq!([1_u8, 2].value_kind(), Kind::Bytes);
        assert_eq!(vec![1_u16, 2].value_kind(), Kind::Seq);
        assert_eq!([1_i32, 2].value_kind(), Kind::Seq);
    }

    #[test]
    fn empty_sequence_is_zero() {
        assert!(Vec::<i32>::new().is_zero_value());
        assert!(!vec![0_i32].is_zero_value());
        assert!([0_i32; 3].is_zero_value());
        assert!(!([0_i32, 1, 0]).is_zero_value());
    }

    #[test]
    fn rebuild_replaces_elements() {
        let values = vec![1_i32, 2, 3];
        let doubled = values.rebuild_with(&mut |elem| {
            let n = elem.downcast_ref::<i32>().copied().unwrap_or_default();
            Box::new(n * 2)
        });
        assert_eq!(doubled.take::<Vec<i32>>().ok(), Some(vec![2, 4, 6]));
    }

    #[test]
    fn rebuild_falls_back_on_type_mismatch() {
        let values = vec![7_i32, 8];
        let rebuilt = values.rebuild_with(&mut |_| Box::new("wrong"));
        assert_eq!(rebuilt.take::<Vec<i32>>().ok(), Some(vec![7, 8]));
    }
}
