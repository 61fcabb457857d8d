use std::io::Write;
use crate::errors::VexError;
use crate::models::scan_result::ScanResult;
use crate::models::vex::VexDocument;
use super::document::{build_document, DocumentMetadata};

/// Render the document as tab-indented JSON.
pub fn render(doc: &VexDocument) -> Result<String, VexError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(doc, &mut ser).map_err(VexError::Serialize)?;
    String::from_utf8(buf)
        .map_err(|e| VexError::Serialize(serde::ser::Error::custom(e)))
}

/// Write the rendered document and a trailing newline to `out`.
pub fn emit<W: Write>(doc: &VexDocument, out: &mut W) -> Result<(), VexError> {
    let text = render(doc)?;
    out.write_all(text.as_bytes()).map_err(VexError::Write)?;
    out.write_all(b"\n").map_err(VexError::Write)?;
    out.flush().map_err(VexError::Write)?;
    Ok(())
}

/// Build the document for `result` and print it on stdout.
pub fn print_vex(result: &ScanResult, source: bool, metadata: &DocumentMetadata) -> Result<VexDocument, VexError> {
    let doc = build_document(result, source, metadata);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    emit(&doc, &mut handle)?;
    Ok(doc)
}
