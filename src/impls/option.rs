use crate::__macro_exports::concrete;
use crate::ops::Optional;
use crate::value::{Value, impl_value_cast_fn};

impl<T: Value> Value for Option<T> {
    impl_value_cast_fn!(Optional);

    fn clone_literal(&self) -> Box<dyn Value> {
        match self {
            Some(inner) => Box::new(Some(concrete::<T>(inner.clone_literal()))),
            None => Box::new(None::<T>),
        }
    }

    fn make_zero(&self) -> Box<dyn Value> {
        Box::new(None::<T>)
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: Value> Optional for Option<T> {
    #[inline]
    fn inner(&self) -> Option<&dyn Value> {
        self.as_ref().map(|inner| inner as &dyn Value)
    }

    fn rebuild_with(&self, f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>) -> Box<dyn Value> {
        match self {
            Some(inner) => {
                let mapped = match f(inner).take::<T>() {
                    Ok(mapped) => mapped,
                    Err(_) => concrete::<T>(inner.clone_literal()),
                };
                Box::new(Some(mapped))
            }
            None => Box::new(None::<T>),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::Optional;
    use crate::{Kind, Value};

    #[test]
    fn absent_is_zero() {
        assert!(None::<i32>.is_zero_value());
        assert!(!Some(0_i32).is_zero_value());
        assert_eq!(Some(1_i32).value_kind(), Kind::Optional);
    }

    #[test]
    fn rebuild_preserves_absence() {
        let none = None::<String>;
        let rebuilt = none.rebuild_with(&mut |inner| inner.clone_literal());
        assert_eq!(rebuilt.take::<Option<String>>().ok(), Some(None));
    }

    #[test]
    fn rebuild_maps_payload() {
        let some = Some(5_i32);
        let rebuilt = some.rebuild_with(&mut |_| Box::new(9_i32));
        assert_eq!(rebuilt.take::<Option<i32>>().ok(), Some(Some(9)));
    }
}
