//! JSON-deserializable schema description.
//!
//! These types describe the shape of a packed record — field names, kinds,
//! and optional width overrides — and are intended to be loaded from a
//! schema file shipped with your application, then converted into core
//! types and compiled.
//!
//! Conversion is fallible: invalid overrides surface as
//! [crate::errors::SchemaError] at ingestion time, before layout runs.

use serde::{Deserialize, Serialize};

use crate::{
    assembly::ByteOrder,
    errors::SchemaError,
    field::{SchemaField, ValueKind},
};

/// Top-level schema definition: byte order plus the ordered field list.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchemaDef {
    /// Byte order for multi-byte integer fields; defaults to big-endian.
    #[serde(default)]
    pub byte_order: ByteOrderDef,
    /// All fields of the record, in wire order.
    pub fields: Vec<FieldDef>,
}

impl SchemaDef {
    /// Converts every field definition, surfacing the first invalid one.
    pub fn into_fields(self) -> Result<Vec<SchemaField>, SchemaError> {
        self.fields.into_iter().map(TryInto::try_into).collect()
    }
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Name used in decoded output; unique within the schema.
    pub name: String,
    /// Primitive kind the field decodes into.
    pub kind: ValueKindDef,
    /// Optional wire width override in bits; defaults to the kind's
    /// natural width. Only narrowing is supported.
    #[serde(default)]
    pub width_bits: Option<usize>,
}

impl TryFrom<FieldDef> for SchemaField {
    type Error = SchemaError;

    fn try_from(value: FieldDef) -> Result<Self, Self::Error> {
        let kind: ValueKind = value.kind.into();
        match value.width_bits {
            Some(width) => SchemaField::with_width(value.name, kind, width),
            None => {
                let field = SchemaField::new(value.name, kind);
                field.validate()?;
                Ok(field)
            }
        }
    }
}

/// Primitive kind of a field value.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub enum ValueKindDef {
    U8,
    U16,
    U32,
    U64,
    Bool,
}

impl From<ValueKindDef> for ValueKind {
    fn from(value: ValueKindDef) -> Self {
        match value {
            ValueKindDef::U8 => ValueKind::U8,
            ValueKindDef::U16 => ValueKind::U16,
            ValueKindDef::U32 => ValueKind::U32,
            ValueKindDef::U64 => ValueKind::U64,
            ValueKindDef::Bool => ValueKind::Bool,
        }
    }
}

/// Byte order used for multi-byte reassembly.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy)]
pub enum ByteOrderDef {
    #[default]
    Big,
    Little,
}

impl From<ByteOrderDef> for ByteOrder {
    fn from(value: ByteOrderDef) -> Self {
        match value {
            ByteOrderDef::Big => ByteOrder::Big,
            ByteOrderDef::Little => ByteOrder::Little,
        }
    }
}
