use crate::value::{Value, impl_value_cast_fn};

/// Implements [`Value`] for atomic terminals: default-zero, literal clone,
/// textual key form.
macro_rules! impl_scalar_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                impl_value_cast_fn!(Scalar);

                #[inline]
                fn clone_literal(&self) -> Box<dyn Value> {
                    Box::new(self.clone())
                }

                #[inline]
                fn make_zero(&self) -> Box<dyn Value> {
                    Box::new(<$ty>::default())
                }

                #[inline]
                fn is_zero_value(&self) -> bool {
                    *self == <$ty>::default()
                }

                #[inline]
                fn key_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_scalar_value!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    &'static str,
);

#[cfg(test)]
mod tests {
    use crate::{Kind, Value};

    #[test]
    fn scalar_zero_values() {
        assert!(0_i32.is_zero_value());
        assert!(!1_i32.is_zero_value());
        assert!(0.0_f64.is_zero_value());
        assert!(false.is_zero_value());
        assert!(!true.is_zero_value());
        assert!(String::new().is_zero_value());
        assert!(!"x".is_zero_value());
    }

    #[test]
    fn scalar_kind_and_keys() {
        assert_eq!(42_u64.value_kind(), Kind::Scalar);
        assert_eq!(42_u64.key_string(), "42");
        assert_eq!("id".key_string(), "id");
        assert_eq!(true.key_string(), "true");
    }

    #[test]
    fn set_boxed_rejects_mismatched_type() {
        let mut n = 3_i64;
        let rejected = n.set_boxed(Box::new("three")).unwrap_err();
        assert!(rejected.is::<&'static str>());
        assert_eq!(n, 3);
    }
}
