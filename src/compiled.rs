//! Compiled schema: per-field extraction plans plus the minimum-length
//! guard, derived once and reused for every decode.

use std::collections::{BTreeMap, HashSet};

use crate::{
    assembly::{ByteOrder, Value},
    bits::{BIT_SELECT, KEEP_LOW},
    errors::{DecodeError, SchemaError},
    field::{SchemaField, ValueKind},
    layout::{LaidOutField, lay_out},
};

/// One byte feeding a field's reassembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteSource {
    /// High-order zero padding for a width narrower than the kind's
    /// natural width.
    Zero,
    /// The byte at this index, unmasked.
    Raw(usize),
    /// The byte at this index with the high bits already claimed by
    /// preceding fields cleared.
    Masked(usize, u8),
}

impl ByteSource {
    fn eval(&self, data: &[u8]) -> u8 {
        match self {
            ByteSource::Zero => 0x00,
            ByteSource::Raw(index) => data[*index],
            ByteSource::Masked(index, mask) => data[*index] & mask,
        }
    }
}

/// How a field's source bytes turn back into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reassemble {
    /// Single byte, as-is.
    U8,
    /// 2/4/8-byte unsigned integer in the schema's byte order.
    Wide(ValueKind),
    /// Single-bit test: raw byte ANDed with a selector mask.
    Flag(u8),
}

/// A field with its extraction plan resolved to byte indices and masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledField {
    pub name: String,
    pub kind: ValueKind,
    /// Source bytes in wire order, padded to the kind's natural byte
    /// width. Every index is below the schema's `min_len` by construction.
    pub bytes: Vec<ByteSource>,
    pub reassemble: Reassemble,
}

impl CompiledField {
    fn build(field: &SchemaField, laid: &LaidOutField) -> Self {
        let mut bytes = Vec::with_capacity(field.kind.natural_bytes());

        let mut i = 0;
        while i < laid.effective_bits {
            let index = laid.byte_offset + i / 8;
            if i == 0 && laid.bit_offset > 0 && field.width_bits > 1 {
                bytes.push(ByteSource::Masked(index, KEEP_LOW[laid.bit_offset]));
            } else {
                bytes.push(ByteSource::Raw(index));
            }
            i += 8;
        }

        while bytes.len() < field.kind.natural_bytes() {
            bytes.insert(0, ByteSource::Zero);
        }

        let reassemble = match field.kind {
            ValueKind::U8 => Reassemble::U8,
            ValueKind::Bool => Reassemble::Flag(BIT_SELECT[laid.bit_offset]),
            kind => Reassemble::Wide(kind),
        };

        CompiledField {
            name: field.name.clone(),
            kind: field.kind,
            bytes,
            reassemble,
        }
    }

    fn decode(&self, data: &[u8], byte_order: ByteOrder) -> Value {
        match self.reassemble {
            Reassemble::U8 => Value::U8(self.bytes[0].eval(data)),
            Reassemble::Flag(mask) => {
                // The flag byte is always a Raw source at the field's start.
                Value::Bool(self.bytes[0].eval(data) & mask != 0)
            }
            Reassemble::Wide(kind) => {
                let mut buf = [0u8; 8];
                for (slot, source) in buf.iter_mut().zip(&self.bytes) {
                    *slot = source.eval(data);
                }
                let raw = byte_order.read_uint(&buf[..self.bytes.len()]);
                match kind {
                    ValueKind::U16 => Value::U16(raw as u16),
                    ValueKind::U32 => Value::U32(raw as u32),
                    _ => Value::U64(raw),
                }
            }
        }
    }
}

/// A compiled schema: ordered extraction plans and the minimum buffer
/// length. Build with [CompiledSchema::compile], then either decode
/// buffers directly or render source with [crate::emit::render_unmarshal].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchema {
    /// Compiled fields in declaration order.
    pub fields: Vec<CompiledField>,
    /// Minimum input length in bytes; decoding anything shorter fails
    /// before any field is read.
    pub min_len: usize,
    /// Byte order for multi-byte reassembly.
    pub byte_order: ByteOrder,
}

impl CompiledSchema {
    /// Validates `fields`, lays them out, and derives every extraction
    /// plan. Deterministic: the same input always yields the same schema.
    pub fn compile(fields: &[SchemaField], byte_order: ByteOrder) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in fields {
            field.validate()?;
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
        }

        let layout = lay_out(fields);
        let compiled = fields
            .iter()
            .zip(&layout.fields)
            .map(|(field, laid)| CompiledField::build(field, laid))
            .collect();

        Ok(CompiledSchema {
            fields: compiled,
            min_len: layout.min_len,
            byte_order,
        })
    }

    /// Decodes `data` into a map of field names to values. Fails with
    /// [DecodeError::Truncated] before producing anything if `data` is
    /// shorter than [CompiledSchema::min_len].
    pub fn decode(&self, data: &[u8]) -> Result<BTreeMap<String, Value>, DecodeError> {
        if data.len() < self.min_len {
            return Err(DecodeError::Truncated {
                needed: self.min_len,
                len: data.len(),
            });
        }

        let mut map = BTreeMap::new();
        for field in &self.fields {
            map.insert(field.name.clone(), field.decode(data, self.byte_order));
        }

        Ok(map)
    }
}
