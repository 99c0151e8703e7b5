//! The decoded-value union.

use std::any::Any;
use std::sync::Arc;

use crate::descriptor::TypeDescriptor;

/// Result of reading one JSON value against a descriptor.
///
/// Exactly three forms:
/// - [`Decoded::Null`] — a JSON `null` read at a primitive position; keeps
///   the declared type so "present but null" is distinguishable from "never
///   set".
/// - [`Decoded::Value`] — a concrete value together with its descriptor.
/// - [`Decoded::Absent`] — no value: a skipped unknown field, a skipped
///   `Other`-kind value, or a JSON `null` read at a record/sequence
///   position. Composite nulls do not retain a type tag; that asymmetry
///   with primitive nulls is deliberate.
///
/// Parse failures are never encoded here; they travel as `Err` through the
/// decoder.
pub enum Decoded {
    Null(Arc<TypeDescriptor>),
    Value(TypedValue),
    Absent,
}

/// A concrete value paired with the descriptor it was decoded against.
pub struct TypedValue {
    pub ty: Arc<TypeDescriptor>,
    pub payload: Payload,
}

/// The payload of a concrete decoded value.
pub enum Payload {
    Str(String),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    /// A record or sequence instance produced by the descriptor's factory.
    Instance(Box<dyn Any>),
}

impl Decoded {
    /// Shorthand for `Decoded::Value(TypedValue { ty, payload })`.
    pub fn value(ty: Arc<TypeDescriptor>, payload: Payload) -> Self {
        Decoded::Value(TypedValue { ty, payload })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Decoded::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Decoded::Null(_))
    }

    /// The descriptor carried by a null marker or concrete value.
    pub fn ty(&self) -> Option<&Arc<TypeDescriptor>> {
        match self {
            Decoded::Null(ty) => Some(ty),
            Decoded::Value(v) => Some(&v.ty),
            Decoded::Absent => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::Str(s),
                ..
            }) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::I32(n),
                ..
            }) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::I64(n),
                ..
            }) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::F32(n),
                ..
            }) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::F64(n),
                ..
            }) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::Bool(b),
                ..
            }) => Some(*b),
            _ => None,
        }
    }

    /// Borrow a record/sequence instance as its concrete type.
    pub fn instance_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::Instance(obj),
                ..
            }) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Mutably borrow a record/sequence instance as its concrete type.
    pub fn instance_mut<T: 'static>(&mut self) -> Option<&mut T> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::Instance(obj),
                ..
            }) => obj.downcast_mut::<T>(),
            _ => None,
        }
    }

    /// Take ownership of a record/sequence instance as its concrete type.
    /// Returns `None` (consuming `self`) if the payload is not an instance
    /// of `T`.
    pub fn into_instance<T: 'static>(self) -> Option<Box<T>> {
        match self {
            Decoded::Value(TypedValue {
                payload: Payload::Instance(obj),
                ..
            }) => obj.downcast::<T>().ok(),
            _ => None,
        }
    }

    /// Borrow the elements of a sequence instance built by the standard
    /// appender.
    pub fn elements(&self) -> Option<&[Decoded]> {
        self.instance_ref::<Vec<Decoded>>().map(|v| v.as_slice())
    }
}

impl std::fmt::Debug for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decoded::Null(ty) => f.debug_tuple("Null").field(&ty.name()).finish(),
            Decoded::Value(v) => v.fmt(f),
            Decoded::Absent => f.write_str("Absent"),
        }
    }
}

impl std::fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedValue")
            .field("ty", &self.ty.name())
            .field("payload", &self.payload)
            .finish()
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Payload::I32(n) => f.debug_tuple("I32").field(n).finish(),
            Payload::I64(n) => f.debug_tuple("I64").field(n).finish(),
            Payload::F32(n) => f.debug_tuple("F32").field(n).finish(),
            Payload::F64(n) => f.debug_tuple("F64").field(n).finish(),
            Payload::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Payload::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;

    #[test]
    fn test_primitive_accessors() {
        let v = Decoded::value(builder::int32(), Payload::I32(7));
        assert_eq!(v.as_i32(), Some(7));
        assert_eq!(v.as_i64(), None);
        assert!(!v.is_null());
        assert!(!v.is_absent());
        assert_eq!(v.ty().map(|t| t.name()), Some("int32"));
    }

    #[test]
    fn test_null_keeps_type() {
        let null = Decoded::Null(builder::float64());
        assert!(null.is_null());
        assert_eq!(null.as_f64(), None);
        assert_eq!(null.ty().map(|t| t.name()), Some("float64"));
    }

    #[test]
    fn test_absent_has_no_type() {
        let absent = Decoded::Absent;
        assert!(absent.is_absent());
        assert!(absent.ty().is_none());
    }

    #[test]
    fn test_instance_downcast() {
        #[derive(Default, Debug, PartialEq)]
        struct Point {
            x: i32,
        }

        let ty = builder::record::<Point>("Point").build();
        let mut v = Decoded::value(ty, Payload::Instance(Box::new(Point { x: 3 })));
        assert_eq!(v.instance_ref::<Point>(), Some(&Point { x: 3 }));
        if let Some(p) = v.instance_mut::<Point>() {
            p.x = 4;
        }
        assert_eq!(v.into_instance::<Point>().map(|b| b.x), Some(4));
    }

    #[test]
    fn test_elements() {
        let ty = builder::sequence(builder::int32());
        let items = vec![
            Decoded::value(builder::int32(), Payload::I32(1)),
            Decoded::Absent,
        ];
        let v = Decoded::value(ty, Payload::Instance(Box::new(items)));
        let elements = v.elements().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].as_i32(), Some(1));
        assert!(elements[1].is_absent());
    }
}
