//! Descriptor-driven JSON mapping.
//!
//! Maps JSON text onto strongly-typed object graphs described by runtime
//! [`TypeDescriptor`]s, without panics for control flow: every parsing step
//! returns a `Result`, and the first error anywhere in the recursion unwinds
//! the whole decode. Values of unknown shape are skipped byte-accurately by
//! the [`scan`] routines, honoring string quoting and backslash escapes
//! inside nested scopes.
//!
//! # Example
//!
//! ```
//! use typed_json_mapping::{decode, Caret, DecodeConfig};
//! use typed_json_type::{builder, Decoded, Payload};
//!
//! #[derive(Default)]
//! struct User {
//!     name: Option<String>,
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
//!     .build();
//!
//! let mut caret = Caret::new(b"{\"name\": \"ada\"}");
//! let decoded = decode(&ty, &mut caret, &DecodeConfig::default()).unwrap();
//! let user = decoded.into_instance::<User>().unwrap();
//! assert_eq!(user.name.as_deref(), Some("ada"));
//! ```

mod decoder;
mod encoder;
mod error;
pub mod scan;

pub use decoder::{decode, DecodeConfig, Decoder};
pub use encoder::Encoder;
pub use error::DecodeError;

pub use typed_json_caret::{Caret, CaretError};
pub use typed_json_type::{Decoded, Kind, Payload, TypeDescriptor, TypedValue};
