//! Descriptor construction helpers.
//!
//! Free functions build primitive descriptors; [`record`] opens a typed
//! builder that erases per-field closures into the `dyn Any` setters and
//! getters the decoder works with.
//!
//! # Example
//!
//! ```
//! use typed_json_type::{builder, Decoded, Payload};
//!
//! #[derive(Default)]
//! struct User {
//!     name: Option<String>,
//!     age: Option<i32>,
//! }
//!
//! let ty = builder::record::<User>("User")
//!     .field(
//!         "name",
//!         builder::string(),
//!         |u, v| u.name = v.as_str().map(str::to_string),
//!         |u| match &u.name {
//!             Some(s) => Decoded::value(builder::string(), Payload::Str(s.clone())),
//!             None => Decoded::Null(builder::string()),
//!         },
//!     )
//!     .field(
//!         "age",
//!         builder::int32(),
//!         |u, v| u.age = v.as_i32(),
//!         |u| match u.age {
//!             Some(n) => Decoded::value(builder::int32(), Payload::I32(n)),
//!             None => Decoded::Null(builder::int32()),
//!         },
//!     )
//!     .build();
//! assert_eq!(ty.name(), "User");
//! ```

use indexmap::IndexMap;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::descriptor::{
    Appender, FieldDescriptor, Getter, RecordDescriptor, SequenceDescriptor, Setter,
    TypeDescriptor,
};
use crate::value::Decoded;

pub fn string() -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::String)
}

pub fn int32() -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::Int32)
}

pub fn int64() -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::Int64)
}

pub fn float32() -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::Float32)
}

pub fn float64() -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::Float64)
}

pub fn boolean() -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::Boolean)
}

/// A named type the decoder should recognize but skip.
pub fn other(name: impl Into<String>) -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::Other(name.into()))
}

/// A homogeneous sequence of `element` values. Instances are
/// `Vec<Decoded>` built by the standard appender.
pub fn sequence(element: Arc<TypeDescriptor>) -> Arc<TypeDescriptor> {
    let name = format!("sequence<{}>", element.name());
    let append: Appender = Arc::new(|obj: &mut dyn Any, item: Decoded| {
        if let Some(items) = obj.downcast_mut::<Vec<Decoded>>() {
            items.push(item);
        }
    });
    Arc::new(TypeDescriptor::Sequence(SequenceDescriptor {
        name,
        element,
        factory: Arc::new(|| Box::new(Vec::<Decoded>::new()) as Box<dyn Any>),
        append,
    }))
}

/// Open a record descriptor builder for the plain struct `T`.
pub fn record<T: Default + 'static>(name: impl Into<String>) -> RecordBuilder<T> {
    RecordBuilder {
        name: name.into(),
        fields: IndexMap::new(),
        _marker: PhantomData,
    }
}

pub struct RecordBuilder<T> {
    name: String,
    fields: IndexMap<String, FieldDescriptor>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Default + 'static> RecordBuilder<T> {
    /// Declare one field: its JSON key, declared type, setter, and the
    /// getter used when encoding.
    pub fn field<S, G>(
        mut self,
        key: impl Into<String>,
        ty: Arc<TypeDescriptor>,
        set: S,
        get: G,
    ) -> Self
    where
        S: Fn(&mut T, Decoded) + Send + Sync + 'static,
        G: Fn(&T) -> Decoded + Send + Sync + 'static,
    {
        let set: Setter = Arc::new(move |obj: &mut dyn Any, value: Decoded| {
            if let Some(target) = obj.downcast_mut::<T>() {
                set(target, value);
            }
        });
        let get: Getter = Arc::new(move |obj: &dyn Any| match obj.downcast_ref::<T>() {
            Some(target) => get(target),
            None => Decoded::Absent,
        });
        self.fields.insert(key.into(), FieldDescriptor { ty, set, get });
        self
    }

    pub fn build(self) -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::Record(RecordDescriptor {
            name: self.name,
            fields: self.fields,
            factory: Arc::new(|| Box::new(T::default()) as Box<dyn Any>),
        }))
    }
}
