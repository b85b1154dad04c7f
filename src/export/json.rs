//! JSON rendering of the descriptor list.

use std::io::Write;

use crate::error::ExportError;
use crate::export::CodecDescriptor;

/// Render the descriptor list as a pretty-printed JSON array with two-space
/// indentation.
pub fn render(records: &[CodecDescriptor]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the whole document to `out` in one shot, trailing newline included.
///
/// The document is rendered fully before the first byte is written, so a
/// serialization failure produces no partial output.
pub fn write_to<W: Write>(records: &[CodecDescriptor], mut out: W) -> Result<(), ExportError> {
    let document = render(records)?;
    out.write_all(document.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Category;
    use crate::schema::SizeSchema;

    fn sample() -> Vec<CodecDescriptor> {
        vec![CodecDescriptor::new(
            "Short",
            "M",
            Category::Primitive,
            SizeSchema {
                hs: Some(1),
                fs: Some(4),
                ss: Some(0),
                ls: Some(0),
                xs: Some(0),
            },
        )]
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let document = render(&sample()).expect("render should succeed");
        assert!(document.starts_with("[\n  {\n    \"name\": \"Short\""));
    }

    #[test]
    fn test_render_empty_list() {
        let document = render(&[]).expect("render should succeed");
        assert_eq!(document, "[]");
    }

    #[test]
    fn test_write_appends_trailing_newline() {
        let mut buffer = Vec::new();
        write_to(&sample(), &mut buffer).expect("write should succeed");
        assert!(buffer.ends_with(b"}\n]\n"));
    }
}
