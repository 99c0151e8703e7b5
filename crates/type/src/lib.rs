//! Runtime type metadata for descriptor-driven JSON mapping.
//!
//! This crate defines the vocabulary the decoder dispatches on:
//!
//! - [`TypeDescriptor`] — what shape of value to produce (primitive,
//!   record, sequence, or an `Other` type that is skipped);
//! - [`FieldDescriptor`] — one named field of a record, with its declared
//!   type and erased setter/getter;
//! - [`Decoded`] — the three-case result of reading one value (typed null
//!   marker, concrete value, absent);
//! - [`builder`] — helpers for declaring descriptors over plain structs.
//!
//! Descriptors are immutable once built and shared behind `Arc`; they are
//! `Send + Sync`, so concurrent decodes against the same descriptor need no
//! synchronization.

pub mod builder;
mod descriptor;
mod value;

pub use descriptor::{
    Appender, Factory, FieldDescriptor, Getter, Kind, RecordDescriptor, SequenceDescriptor,
    Setter, TypeDescriptor,
};
pub use value::{Decoded, Payload, TypedValue};
