use core::any::{Any, TypeId};

use crate::ops::{ValueMut, ValueRef};

// -----------------------------------------------------------------------------
// Kind

/// A pure enumeration of the structural shapes a [`Value`] can take.
///
/// The kind decides how the transfer engine treats a value: records are
/// walked field-by-field, sequences and maps are rebuilt element-wise,
/// optionals are unwrapped and re-wrapped, dynamic slots are resolved to
/// their payload, and everything else is copied as an atomic terminal.
///
/// # Examples
///
/// ```
/// use remodel::{Kind, Value};
///
/// assert_eq!(10_i32.value_kind(), Kind::Scalar);
/// assert_eq!(vec![1_i32, 2].value_kind(), Kind::Seq);
/// assert_eq!(vec![1_u8, 2].value_kind(), Kind::Bytes);
/// assert_eq!(Some(10_i32).value_kind(), Kind::Optional);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A named aggregate of typed fields (`#[derive(Model)]` structs).
    Record,
    /// An ordered sequence rebuilt element-wise (`Vec<T>`, `[T; N]`).
    Seq,
    /// An associative container (`HashMap`, `BTreeMap`).
    Assoc,
    /// An optional/absent reference (`Option<T>`).
    Optional,
    /// An open slot holding any concrete value (`Box<dyn Value>`).
    Dynamic,
    /// A byte payload (`Vec<u8>`, `[u8; N]`), copied wholesale rather than
    /// element-wise.
    Bytes,
    /// An atomic terminal: numbers, strings, booleans, opaque std types.
    Scalar,
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Kind::Record => "record",
            Kind::Seq => "sequence",
            Kind::Assoc => "map",
            Kind::Optional => "optional",
            Kind::Dynamic => "dynamic",
            Kind::Bytes => "bytes",
            Kind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// Value

/// The foundational capability trait for every value that can participate in
/// model processing.
///
/// `Value` gives the engine a uniform, type-erased view over arbitrarily
/// nested data: structural dispatch through [`value_ref`]/[`value_mut`],
/// literal whole-value operations ([`clone_literal`], [`make_zero`],
/// [`is_zero_value`]) and type-checked assignment ([`set_boxed`]).
///
/// Implementations ship for scalars, `String`, `Vec<T>`, arrays, `HashMap`,
/// `BTreeMap`, `Option<T>`, `Box<dyn Value>` and a few opaque std types.
/// Record types obtain their implementation through
/// [`#[derive(Model)]`](crate::Model).
///
/// # Type identification
///
/// Calling [`Any::type_id`] on a `Box<dyn Value>` yields the id of the box,
/// not the payload. Use [`Value::ty_id`] instead, which looks through
/// dynamic slots:
///
/// ```
/// use core::any::TypeId;
/// use remodel::Value;
///
/// let x: Box<dyn Value> = Box::new(32_i32);
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// [`value_ref`]: Value::value_ref
/// [`value_mut`]: Value::value_mut
/// [`clone_literal`]: Value::clone_literal
/// [`make_zero`]: Value::make_zero
/// [`is_zero_value`]: Value::is_zero_value
/// [`set_boxed`]: Value::set_boxed
pub trait Value: Any + Send + Sync {
    /// Returns the textual path of the concrete type.
    #[inline]
    fn type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns the [`TypeId`] of the concrete value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the structural [`Kind`] of this value.
    fn value_kind(&self) -> Kind;

    /// Returns an immutable structural view of this value.
    fn value_ref(&self) -> ValueRef<'_>;

    /// Returns a mutable structural view of this value.
    fn value_mut(&mut self) -> ValueMut<'_>;

    /// Performs a type-checked whole-value assignment.
    ///
    /// On a type mismatch the rejected value is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use remodel::Value;
    ///
    /// let mut x = 1_i32;
    /// x.set_boxed(Box::new(7_i32)).unwrap();
    /// assert_eq!(x, 7);
    ///
    /// assert!(x.set_boxed(Box::new("seven")).is_err());
    /// ```
    fn set_boxed(&mut self, value: Box<dyn Value>) -> Result<(), Box<dyn Value>>;

    /// Clones this value as one opaque unit.
    ///
    /// Unlike the transfer engine, a literal clone never consults field
    /// annotations or the no-traverse registry: every nested value, including
    /// omitted and private record fields, is reproduced verbatim.
    fn clone_literal(&self) -> Box<dyn Value>;

    /// Builds a fresh zero value of the same concrete type.
    fn make_zero(&self) -> Box<dyn Value>;

    /// Reports whether this value literally equals its type's zero value.
    ///
    /// Zero means: `0` for numbers, empty for strings and containers,
    /// `false`, `None`, and all-fields-zero for records. A filled dynamic
    /// slot is never zero.
    fn is_zero_value(&self) -> bool;

    /// Renders this value for use as a mapping key.
    ///
    /// Scalars override this with their natural textual form; the default
    /// falls back to the type path.
    fn key_string(&self) -> String {
        self.type_path().to_string()
    }
}

impl dyn Value {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remodel::Value;
    ///
    /// let x: Box<dyn Value> = Box::new(10_i32);
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        // `Any::type_id`, not `Value::ty_id`: downcasting must target the
        // erased type itself even for dynamic slots.
        (self as &dyn Any).type_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait
    /// object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remodel::Value;
    ///
    /// let x: Box<dyn Value> = Box::new(10_i32);
    /// assert_eq!(x.take::<i32>().ok(), Some(10));
    /// ```
    pub fn take<T: Any>(self: Box<dyn Value>) -> Result<T, Box<dyn Value>> {
        if self.is::<T>() {
            match <Box<dyn Any>>::downcast::<T>(self) {
                Ok(value) => Ok(*value),
                // `is` already checked the id
                Err(_) => unreachable!(),
            }
        } else {
            Err(self)
        }
    }
}

impl core::fmt::Debug for dyn Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Value({})", self.type_path())
    }
}

/// Resolves a value to the record it holds, looking through dynamic slots
/// and present optionals.
pub(crate) fn as_record(value: &dyn Value) -> Option<&dyn crate::ops::Record> {
    match value.value_ref() {
        ValueRef::Record(record) => Some(record),
        ValueRef::Dynamic(inner) => as_record(inner),
        ValueRef::Optional(optional) => optional.inner().and_then(as_record),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements the structural dispatch methods for a fixed [`Kind`].
macro_rules! impl_value_cast_fn {
    ($kind:ident) => {
        fn set_boxed(
            &mut self,
            value: Box<dyn $crate::Value>,
        ) -> Result<(), Box<dyn $crate::Value>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn value_kind(&self) -> $crate::Kind {
            $crate::Kind::$kind
        }

        #[inline]
        fn value_ref(&self) -> $crate::ops::ValueRef<'_> {
            $crate::ops::ValueRef::$kind(self)
        }

        #[inline]
        fn value_mut(&mut self) -> $crate::ops::ValueMut<'_> {
            $crate::ops::ValueMut::$kind(self)
        }
    };
}

pub(crate) use impl_value_cast_fn;
