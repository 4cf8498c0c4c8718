//! Reassembly primitives: byte order and the decoded value variants.

/// Byte order used to reassemble multi-byte integers. Fixed per schema
/// compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

impl ByteOrder {
    /// Interprets `bytes` as an unsigned integer in this byte order.
    /// `bytes` holds at most 8 entries.
    pub fn read_uint(&self, bytes: &[u8]) -> u64 {
        match self {
            ByteOrder::Big => bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64),
            ByteOrder::Little => bytes
                .iter()
                .rev()
                .fold(0u64, |acc, b| (acc << 8) | *b as u64),
        }
    }
}

/// A decoded field value, one variant per [crate::field::ValueKind].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Bool(bool),
}
