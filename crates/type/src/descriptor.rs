//! Runtime type descriptors.
//!
//! A [`TypeDescriptor`] tells the decoder what shape of value to produce.
//! Descriptors are built once (see [`crate::builder`]), shared behind `Arc`,
//! and only ever read during decoding. Composite descriptors carry erased
//! factory/setter/getter functions so that record instances can be plain
//! caller-defined structs.

use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

use crate::value::Decoded;

/// Closed set of descriptor kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Record,
    Sequence,
    Other,
}

/// Creates a fresh, default-initialized instance for a composite descriptor.
pub type Factory = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Writes a decoded value into a record instance. Setters accept all three
/// [`Decoded`] forms.
pub type Setter = Arc<dyn Fn(&mut dyn Any, Decoded) + Send + Sync>;

/// Reads a field back out of a record instance (the encoder-side
/// counterpart of [`Setter`]).
pub type Getter = Arc<dyn Fn(&dyn Any) -> Decoded + Send + Sync>;

/// Appends a decoded element to a sequence instance.
pub type Appender = Arc<dyn Fn(&mut dyn Any, Decoded) + Send + Sync>;

/// Runtime description of a decode target.
pub enum TypeDescriptor {
    String,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Record(RecordDescriptor),
    Sequence(SequenceDescriptor),
    /// Recognized but not decodable; values of this type are skipped whole.
    Other(String),
}

/// An object type with named, typed fields.
pub struct RecordDescriptor {
    pub name: String,
    /// Field map in declaration order; looked up by JSON key.
    pub fields: IndexMap<String, FieldDescriptor>,
    pub factory: Factory,
}

/// A homogeneous dynamically-sized container type.
pub struct SequenceDescriptor {
    pub name: String,
    pub element: Arc<TypeDescriptor>,
    pub factory: Factory,
    pub append: Appender,
}

/// One named field of a record.
pub struct FieldDescriptor {
    pub ty: Arc<TypeDescriptor>,
    pub set: Setter,
    pub get: Getter,
}

impl TypeDescriptor {
    pub fn kind(&self) -> Kind {
        match self {
            TypeDescriptor::String => Kind::String,
            TypeDescriptor::Int32 => Kind::Int32,
            TypeDescriptor::Int64 => Kind::Int64,
            TypeDescriptor::Float32 => Kind::Float32,
            TypeDescriptor::Float64 => Kind::Float64,
            TypeDescriptor::Boolean => Kind::Boolean,
            TypeDescriptor::Record(_) => Kind::Record,
            TypeDescriptor::Sequence(_) => Kind::Sequence,
            TypeDescriptor::Other(_) => Kind::Other,
        }
    }

    /// Display name: the primitive kind name, or the declared name of a
    /// record/sequence/other type.
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::String => "string",
            TypeDescriptor::Int32 => "int32",
            TypeDescriptor::Int64 => "int64",
            TypeDescriptor::Float32 => "float32",
            TypeDescriptor::Float64 => "float64",
            TypeDescriptor::Boolean => "boolean",
            TypeDescriptor::Record(r) => &r.name,
            TypeDescriptor::Sequence(s) => &s.name,
            TypeDescriptor::Other(name) => name,
        }
    }
}

impl std::fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Record(r) => f
                .debug_struct("Record")
                .field("name", &r.name)
                .field("fields", &r.fields.keys().collect::<Vec<_>>())
                .finish(),
            TypeDescriptor::Sequence(s) => f
                .debug_struct("Sequence")
                .field("name", &s.name)
                .field("element", &s.element)
                .finish(),
            TypeDescriptor::Other(name) => f.debug_tuple("Other").field(name).finish(),
            primitive => f.write_str(primitive.name()),
        }
    }
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("ty", &self.ty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;

    #[test]
    fn test_kind_of_primitives() {
        assert_eq!(TypeDescriptor::String.kind(), Kind::String);
        assert_eq!(TypeDescriptor::Int32.kind(), Kind::Int32);
        assert_eq!(TypeDescriptor::Int64.kind(), Kind::Int64);
        assert_eq!(TypeDescriptor::Float32.kind(), Kind::Float32);
        assert_eq!(TypeDescriptor::Float64.kind(), Kind::Float64);
        assert_eq!(TypeDescriptor::Boolean.kind(), Kind::Boolean);
    }

    #[test]
    fn test_names() {
        assert_eq!(TypeDescriptor::Int32.name(), "int32");
        assert_eq!(TypeDescriptor::Other("blob".into()).name(), "blob");
        let seq = builder::sequence(builder::int64());
        assert_eq!(seq.name(), "sequence<int64>");
        assert_eq!(seq.kind(), Kind::Sequence);
    }
}
