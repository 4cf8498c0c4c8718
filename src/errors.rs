//! Error types for schema validation and decoding.

use thiserror::Error;

use crate::field::ValueKind;

/// Errors raised while validating a schema, before any layout runs.
///
/// A schema that passes validation always lays out and compiles; there are
/// no later compile-time failure modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field declares a wire width of zero bits.
    #[error("field {name:?} has zero width")]
    ZeroWidth { name: String },
    /// A field's width override exceeds its kind's natural width; widening
    /// is not supported.
    #[error("field {name:?} declares {width} bits but {kind:?} holds at most {} bits", .kind.natural_bits())]
    WidthExceedsNatural {
        name: String,
        kind: ValueKind,
        width: usize,
    },
    /// A boolean field carries a width override other than 1.
    #[error("boolean field {name:?} must be exactly 1 bit, got {width}")]
    BoolWidth { name: String, width: usize },
    /// Two fields in the same schema share a name.
    #[error("duplicate field name {0:?}")]
    DuplicateName(String),
    /// A field has an empty name.
    #[error("field name is empty")]
    EmptyName,
}

/// Errors raised when decoding a buffer against a compiled schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is shorter than the schema's minimum byte length. The
    /// caller may retry once more bytes are available.
    #[error("buffer truncated: need {needed} bytes, got {len}")]
    Truncated { needed: usize, len: usize },
}
