//! Renders a compiled schema into Rust source for a decode method.
//!
//! The rendered method targets a struct whose field names and types mirror
//! the schema (see [crate::field::ValueKind::rust_type]) and expects
//! [crate::errors::DecodeError] to be in scope at the point of use. Output
//! is plain indented text; running it through a formatter is up to the
//! host toolchain.

use crate::{
    assembly::ByteOrder,
    compiled::{ByteSource, CompiledField, CompiledSchema, Reassemble},
    field::ValueKind,
};

fn byte_expr(source: &ByteSource) -> String {
    match source {
        ByteSource::Zero => "0x00".to_string(),
        ByteSource::Raw(index) => format!("data[{index}]"),
        ByteSource::Masked(index, mask) => format!("data[{index}] & {mask:#04x}"),
    }
}

fn field_expr(field: &CompiledField, byte_order: ByteOrder) -> String {
    match field.reassemble {
        Reassemble::U8 => byte_expr(&field.bytes[0]),
        Reassemble::Flag(mask) => format!("{} & {mask:#04x} != 0", byte_expr(&field.bytes[0])),
        Reassemble::Wide(kind) => {
            let bytes: Vec<String> = field.bytes.iter().map(byte_expr).collect();
            let from = match byte_order {
                ByteOrder::Big => "from_be_bytes",
                ByteOrder::Little => "from_le_bytes",
            };
            format!("{}::{from}([{}])", kind.rust_type(), bytes.join(", "))
        }
    }
}

/// Renders an `unmarshal_binary` method for `type_name`: a truncation
/// guard followed by one assignment per field in declaration order. The
/// guard runs before any field is touched, so a short buffer leaves the
/// struct unchanged.
pub fn render_unmarshal(type_name: &str, schema: &CompiledSchema) -> String {
    let mut out = String::new();

    out.push_str(&format!("impl {type_name} {{\n"));
    out.push_str(
        "    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), DecodeError> {\n",
    );
    out.push_str(&format!(
        "        if data.len() < {} {{\n            return Err(DecodeError::Truncated {{ needed: {}, len: data.len() }});\n        }}\n",
        schema.min_len, schema.min_len
    ));
    for field in &schema.fields {
        out.push_str(&format!(
            "        self.{} = {};\n",
            field.name,
            field_expr(field, schema.byte_order)
        ));
    }
    out.push_str("        Ok(())\n    }\n}\n");

    out
}
