//! Definition of the typed fields that make up a schema.

use crate::errors::SchemaError;

/// Primitive kind a field decodes into. The set is closed: every kind has
/// exactly one reassembly rule in [crate::compiled].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    U8,
    U16,
    U32,
    U64,
    Bool,
}

impl ValueKind {
    /// Number of bits the kind occupies when no width override is present.
    pub fn natural_bits(&self) -> usize {
        match self {
            ValueKind::U8 => 8,
            ValueKind::U16 => 16,
            ValueKind::U32 => 32,
            ValueKind::U64 => 64,
            ValueKind::Bool => 1,
        }
    }

    /// Byte count of the reassembled in-memory value. A boolean still
    /// reassembles from a single byte.
    pub fn natural_bytes(&self) -> usize {
        match self {
            ValueKind::Bool => 1,
            _ => self.natural_bits() / 8,
        }
    }

    /// Rust type the kind maps to in emitted source.
    pub fn rust_type(&self) -> &'static str {
        match self {
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::Bool => "bool",
        }
    }
}

/// A single named field in a schema, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Name used in decoded output and emitted assignments. Unique within a
    /// schema.
    pub name: String,
    /// Primitive kind the field decodes into.
    pub kind: ValueKind,
    /// Declared wire width in bits. Equals the kind's natural width unless
    /// an override narrows it (e.g. a 48-bit value held in a u64).
    pub width_bits: usize,
}

impl SchemaField {
    /// A field occupying its kind's natural width.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        SchemaField {
            name: name.into(),
            kind,
            width_bits: kind.natural_bits(),
        }
    }

    /// A field with an explicit wire width. Only narrowing is supported;
    /// booleans must stay at 1 bit.
    pub fn with_width(
        name: impl Into<String>,
        kind: ValueKind,
        width_bits: usize,
    ) -> Result<Self, SchemaError> {
        let field = SchemaField {
            name: name.into(),
            kind,
            width_bits,
        };
        field.validate()?;
        Ok(field)
    }

    pub(crate) fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }
        if self.width_bits == 0 {
            return Err(SchemaError::ZeroWidth {
                name: self.name.clone(),
            });
        }
        if self.kind == ValueKind::Bool && self.width_bits != 1 {
            return Err(SchemaError::BoolWidth {
                name: self.name.clone(),
                width: self.width_bits,
            });
        }
        if self.width_bits > self.kind.natural_bits() {
            return Err(SchemaError::WidthExceedsNatural {
                name: self.name.clone(),
                kind: self.kind,
                width: self.width_bits,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_width_default() {
        let field = SchemaField::new("seq", ValueKind::U32);
        assert_eq!(field.width_bits, 32);
    }

    #[test]
    fn test_narrowing_override() {
        let field = SchemaField::with_width("addr", ValueKind::U64, 48).unwrap();
        assert_eq!(field.width_bits, 48);
    }

    #[test]
    fn test_widening_rejected() {
        let err = SchemaField::with_width("seq", ValueKind::U16, 24).unwrap_err();
        assert_eq!(
            err,
            SchemaError::WidthExceedsNatural {
                name: "seq".to_string(),
                kind: ValueKind::U16,
                width: 24,
            }
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = SchemaField::with_width("seq", ValueKind::U8, 0).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ZeroWidth {
                name: "seq".to_string()
            }
        );
    }

    #[test]
    fn test_bool_override_rejected() {
        let err = SchemaField::with_width("flag", ValueKind::Bool, 2).unwrap_err();
        assert_eq!(
            err,
            SchemaError::BoolWidth {
                name: "flag".to_string(),
                width: 2,
            }
        );
    }
}
