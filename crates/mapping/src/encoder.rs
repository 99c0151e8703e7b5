//! Descriptor-driven JSON encoder.
//!
//! The write-side counterpart of the decoder: walks a [`Decoded`] value and
//! its descriptor and emits compact JSON text. Record fields are read back
//! through their getters in declaration order; `Absent` fields are omitted,
//! null markers emit `null`.

use std::any::Any;

use typed_json_type::{Decoded, Payload, RecordDescriptor, TypeDescriptor, TypedValue};

pub struct Encoder {
    out: String,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Encode one decoded value to JSON text.
    pub fn encode(&mut self, value: &Decoded) -> String {
        self.out.clear();
        self.write_any(value);
        std::mem::take(&mut self.out)
    }

    fn write_any(&mut self, value: &Decoded) {
        match value {
            Decoded::Null(_) | Decoded::Absent => self.out.push_str("null"),
            Decoded::Value(v) => self.write_value(v),
        }
    }

    fn write_value(&mut self, value: &TypedValue) {
        match &value.payload {
            Payload::Str(s) => self.write_str(s),
            Payload::I32(n) => self.out.push_str(&n.to_string()),
            Payload::I64(n) => self.out.push_str(&n.to_string()),
            Payload::F32(n) => self.write_f64(f64::from(*n)),
            Payload::F64(n) => self.write_f64(*n),
            Payload::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Payload::Instance(obj) => match value.ty.as_ref() {
                TypeDescriptor::Record(record) => self.write_record(record, obj.as_ref()),
                TypeDescriptor::Sequence(_) => self.write_sequence(obj.as_ref()),
                _ => self.out.push_str("null"),
            },
        }
    }

    fn write_f64(&mut self, n: f64) {
        // JSON has no spelling for NaN or infinities
        if n.is_finite() {
            self.out.push_str(&n.to_string());
        } else {
            self.out.push_str("null");
        }
    }

    /// Write a JSON-encoded string with escaping.
    fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();

        // Fast path: printable ASCII without quotes or backslashes
        let special = bytes
            .iter()
            .any(|&b| b < 32 || b > 126 || b == b'"' || b == b'\\');
        if !special {
            self.out.push('"');
            self.out.push_str(s);
            self.out.push('"');
            return;
        }

        // Fall back to serde_json for proper escaping
        let quoted = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.out.push_str(&quoted);
    }

    fn write_record(&mut self, record: &RecordDescriptor, obj: &dyn Any) {
        self.out.push('{');
        let mut first = true;
        for (key, field) in &record.fields {
            let value = (field.get)(obj);
            if value.is_absent() {
                continue;
            }
            if !first {
                self.out.push(',');
            }
            self.write_str(key);
            self.out.push(':');
            self.write_any(&value);
            first = false;
        }
        self.out.push('}');
    }

    fn write_sequence(&mut self, obj: &dyn Any) {
        match obj.downcast_ref::<Vec<Decoded>>() {
            Some(items) => {
                self.out.push('[');
                let last = items.len().saturating_sub(1);
                for (i, item) in items.iter().enumerate() {
                    self.write_any(item);
                    if i < last {
                        self.out.push(',');
                    }
                }
                self.out.push(']');
            }
            None => self.out.push_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typed_json_type::builder;

    #[test]
    fn test_write_primitives() {
        let mut encoder = Encoder::new();
        assert_eq!(
            encoder.encode(&Decoded::value(builder::int32(), Payload::I32(-5))),
            "-5"
        );
        assert_eq!(
            encoder.encode(&Decoded::value(builder::float64(), Payload::F64(1.5))),
            "1.5"
        );
        assert_eq!(
            encoder.encode(&Decoded::value(builder::boolean(), Payload::Bool(true))),
            "true"
        );
        assert_eq!(encoder.encode(&Decoded::Null(builder::int32())), "null");
        assert_eq!(encoder.encode(&Decoded::Absent), "null");
    }

    #[test]
    fn test_write_nonfinite_floats_as_null() {
        let mut encoder = Encoder::new();
        assert_eq!(
            encoder.encode(&Decoded::value(
                builder::float64(),
                Payload::F64(f64::NAN)
            )),
            "null"
        );
        assert_eq!(
            encoder.encode(&Decoded::value(
                builder::float32(),
                Payload::F32(f32::INFINITY)
            )),
            "null"
        );
    }

    #[test]
    fn test_write_str_escaping() {
        let mut encoder = Encoder::new();
        assert_eq!(
            encoder.encode(&Decoded::value(
                builder::string(),
                Payload::Str("plain".into())
            )),
            "\"plain\""
        );
        assert_eq!(
            encoder.encode(&Decoded::value(
                builder::string(),
                Payload::Str("a\"b\\c\n".into())
            )),
            r#""a\"b\\c\n""#
        );
    }

    #[test]
    fn test_write_sequence() {
        let ty = builder::sequence(builder::int32());
        let items = vec![
            Decoded::value(builder::int32(), Payload::I32(1)),
            Decoded::Null(builder::int32()),
            Decoded::value(builder::int32(), Payload::I32(3)),
        ];
        let value = Decoded::value(ty, Payload::Instance(Box::new(items)));
        assert_eq!(Encoder::new().encode(&value), "[1,null,3]");
    }
}
