//! Recursive-descent typed decoder.
//!
//! [`Decoder::decode`] reads one JSON value against a [`TypeDescriptor`],
//! producing a [`Decoded`]. Record and sequence reads recurse back through
//! the value reader for nested fields and elements; the first error anywhere
//! in the recursion unwinds the whole call.

use std::sync::Arc;

use log::trace;
use typed_json_caret::Caret;
use typed_json_type::{
    Decoded, Payload, RecordDescriptor, SequenceDescriptor, TypeDescriptor,
};

use crate::error::DecodeError;
use crate::scan;

/// Decoding policy, read-only input to every recursive call.
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Accept JSON keys with no matching field descriptor and skip their
    /// values. When false, an unmatched key fails the decode.
    pub allow_unknown_fields: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            allow_unknown_fields: true,
        }
    }
}

/// Decode one JSON value against `ty`, starting at the caret's position.
///
/// Convenience wrapper around [`Decoder`].
pub fn decode(
    ty: &Arc<TypeDescriptor>,
    caret: &mut Caret,
    config: &DecodeConfig,
) -> Result<Decoded, DecodeError> {
    Decoder::new(config.clone()).decode(ty, caret)
}

pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Decode one JSON value against `ty`.
    ///
    /// `Ok(Decoded::Absent)` is a legitimate outcome, not a failure: a JSON
    /// `null` at a record/sequence position, or a skipped value of an
    /// `Other`-kind type.
    ///
    /// Recursion depth equals JSON nesting depth and is not bounded here;
    /// callers decoding untrusted input should limit nesting themselves.
    pub fn decode(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        caret.skip_whitespace();
        self.read_value(ty, caret)
    }

    fn read_value(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        match ty.as_ref() {
            TypeDescriptor::String => self.read_str(ty, caret),
            TypeDescriptor::Int32 => self.read_i32(ty, caret),
            TypeDescriptor::Int64 => self.read_i64(ty, caret),
            TypeDescriptor::Float32 => self.read_f32(ty, caret),
            TypeDescriptor::Float64 => self.read_f64(ty, caret),
            TypeDescriptor::Boolean => self.read_bool(ty, caret),
            TypeDescriptor::Record(record) => {
                if caret.advance_if(b"null") {
                    // Composite nulls carry no type tag
                    Ok(Decoded::Absent)
                } else {
                    self.read_record(ty, record, caret)
                }
            }
            TypeDescriptor::Sequence(seq) => {
                if caret.advance_if(b"null") {
                    Ok(Decoded::Absent)
                } else {
                    self.read_sequence(ty, seq, caret)
                }
            }
            TypeDescriptor::Other(name) => {
                trace!("skipping value of unhandled type {name}");
                scan::skip_value(caret);
                Ok(Decoded::Absent)
            }
        }
    }

    fn read_str(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if caret.advance_if(b"null") {
            return Ok(Decoded::Null(ty.clone()));
        }
        let s = caret.parse_string()?;
        Ok(Decoded::value(ty.clone(), Payload::Str(s)))
    }

    fn read_i32(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if caret.advance_if(b"null") {
            return Ok(Decoded::Null(ty.clone()));
        }
        let n = caret.parse_i32()?;
        Ok(Decoded::value(ty.clone(), Payload::I32(n)))
    }

    fn read_i64(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if caret.advance_if(b"null") {
            return Ok(Decoded::Null(ty.clone()));
        }
        let n = caret.parse_i64()?;
        Ok(Decoded::value(ty.clone(), Payload::I64(n)))
    }

    fn read_f32(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if caret.advance_if(b"null") {
            return Ok(Decoded::Null(ty.clone()));
        }
        let n = caret.parse_f32()?;
        Ok(Decoded::value(ty.clone(), Payload::F32(n)))
    }

    fn read_f64(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if caret.advance_if(b"null") {
            return Ok(Decoded::Null(ty.clone()));
        }
        let n = caret.parse_f64()?;
        Ok(Decoded::value(ty.clone(), Payload::F64(n)))
    }

    fn read_bool(
        &self,
        ty: &Arc<TypeDescriptor>,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if caret.advance_if(b"null") {
            return Ok(Decoded::Null(ty.clone()));
        }
        let b = caret.parse_bool(b"true", b"false")?;
        Ok(Decoded::value(ty.clone(), Payload::Bool(b)))
    }

    /// Read a `{...}` object into an instance from the record's factory.
    ///
    /// The instance is a local builder: it is handed to the caller only on
    /// the success path, so a failing decode never exposes partial state.
    fn read_record(
        &self,
        ty: &Arc<TypeDescriptor>,
        record: &RecordDescriptor,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if !caret.expect(b'{') {
            return Err(DecodeError::ObjectOpenExpected(caret.position()));
        }
        let mut instance = (record.factory)();

        while !caret.at(b'}') && caret.can_continue() {
            caret.skip_whitespace();
            let key_pos = caret.position();
            let key = caret.parse_string()?;

            match record.fields.get(key.as_str()) {
                Some(field) => {
                    caret.skip_whitespace();
                    if !caret.expect(b':') {
                        return Err(DecodeError::ObjectColonMissing(caret.position()));
                    }
                    caret.skip_whitespace();
                    let value = self.read_value(&field.ty, caret)?;
                    (field.set)(instance.as_mut(), value);
                }
                None if self.config.allow_unknown_fields => {
                    trace!("skipping unknown field {key:?} of {}", record.name);
                    caret.skip_whitespace();
                    if !caret.expect(b':') {
                        return Err(DecodeError::ObjectColonMissing(caret.position()));
                    }
                    caret.skip_whitespace();
                    scan::skip_value(caret);
                }
                None => {
                    return Err(DecodeError::ObjectUnknownField { key, pos: key_pos });
                }
            }

            caret.skip_whitespace();
            // A separator is optional here; the loop re-checks the close
            // condition, which also admits a trailing comma before '}'.
            caret.expect(b',');
        }

        if !caret.expect(b'}') {
            return Err(DecodeError::ObjectCloseExpected(caret.position()));
        }
        Ok(Decoded::value(ty.clone(), Payload::Instance(instance)))
    }

    /// Read a `[...]` array into an instance from the sequence's factory,
    /// appending elements in encounter order.
    fn read_sequence(
        &self,
        ty: &Arc<TypeDescriptor>,
        seq: &SequenceDescriptor,
        caret: &mut Caret,
    ) -> Result<Decoded, DecodeError> {
        if !caret.expect(b'[') {
            return Err(DecodeError::ArrayOpenExpected(caret.position()));
        }
        let mut instance = (seq.factory)();

        while !caret.at(b']') && caret.can_continue() {
            caret.skip_whitespace();
            let element = self.read_value(&seq.element, caret)?;
            (seq.append)(instance.as_mut(), element);

            caret.skip_whitespace();
            caret.expect(b',');
        }

        if !caret.expect(b']') {
            return Err(DecodeError::ArrayCloseExpected(caret.position()));
        }
        Ok(Decoded::value(ty.clone(), Payload::Instance(instance)))
    }
}
