//! # bitlayout
//!
//! Compiles a declarative field schema — an ordered list of typed,
//! optionally width-overridden fields — into a deterministic decoder for
//! tightly packed binary records, so you never hand-write bit-twiddling
//! extraction code for protocol headers with sub-byte flags and odd-width
//! integers.
//!
//! Single-bit boolean flags pack tightly and share bytes; a wider field
//! that starts mid-byte consumes only the bits remaining in its declared
//! budget (its wire width is a function of its neighbors, by contract).
//! A compiled schema can decode buffers directly or be rendered into
//! Rust source with [emit::render_unmarshal].
//!
//! ## Example
//!
//! ```
//! use bitlayout::assembly::{ByteOrder, Value};
//! use bitlayout::compiled::CompiledSchema;
//! use bitlayout::field::{SchemaField, ValueKind};
//!
//! let fields = vec![
//!     SchemaField::new("version", ValueKind::U8),
//!     SchemaField::new("urgent", ValueKind::Bool),
//!     SchemaField::new("ack", ValueKind::Bool),
//!     SchemaField::new("window", ValueKind::U8),
//! ];
//! let schema = CompiledSchema::compile(&fields, ByteOrder::Big).unwrap();
//! assert_eq!(schema.min_len, 2);
//!
//! let decoded = schema.decode(&[0x04, 0b11_010101]).unwrap();
//! assert_eq!(decoded["version"], Value::U8(4));
//! assert_eq!(decoded["urgent"], Value::Bool(true));
//! assert_eq!(decoded["window"], Value::U8(0b01_0101));
//! ```

pub mod assembly;
pub mod bits;
pub mod compiled;
pub mod emit;
pub mod errors;
pub mod field;
pub mod layout;
#[cfg(feature = "serde")]
pub mod serde;

pub use assembly::{ByteOrder, Value};
pub use compiled::CompiledSchema;
pub use errors::{DecodeError, SchemaError};
pub use field::{SchemaField, ValueKind};
