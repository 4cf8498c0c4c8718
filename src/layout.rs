//! Bit layout engine: assigns every field a starting position and an
//! effective consumed span, and derives the minimum buffer length.

use crate::field::SchemaField;

/// Position and consumed span of one field, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaidOutField {
    /// Byte index where extraction begins.
    pub byte_offset: usize,
    /// Bit position within that byte (0 = MSB).
    pub bit_offset: usize,
    /// Bits the field actually consumes. Less than the declared width when
    /// the field starts mid-byte: the declared width is spent as the budget
    /// for reaching the next byte-granular total, not extended past it.
    pub effective_bits: usize,
}

/// Result of laying out a whole schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// One entry per schema field, in declaration order.
    pub fields: Vec<LaidOutField>,
    /// Minimum buffer length every decode must check before reading.
    pub min_len: usize,
}

/// Walks the field list once with a monotonically advancing bit cursor.
///
/// Single-bit flags pack tightly and never force alignment, so several
/// flags share one byte. A wider field starting mid-byte consumes only
/// `width - bit_offset` bits.
pub fn lay_out(fields: &[SchemaField]) -> Layout {
    let mut laid_out = Vec::with_capacity(fields.len());
    let mut cursor = 0usize;

    for field in fields {
        let byte_offset = cursor / 8;
        let bit_offset = cursor % 8;

        // A width no larger than the bit offset would otherwise drive the
        // cursor backward; such a field consumes nothing and decodes as zero.
        let advance = if bit_offset > 0 && field.width_bits > 1 {
            field.width_bits.saturating_sub(bit_offset)
        } else {
            field.width_bits
        };

        laid_out.push(LaidOutField {
            byte_offset,
            bit_offset,
            effective_bits: advance,
        });
        cursor += advance;
    }

    Layout {
        fields: laid_out,
        min_len: cursor.div_ceil(8),
    }
}
