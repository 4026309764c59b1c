use mkdoc_extract::Extraction;

use super::Converter;
use crate::error::MkdocError;

/// Pandoc Markdown: the header block exactly as written, then the body.
/// Pandoc reads the metadata itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PandocConverter;

impl Converter for PandocConverter {
  fn render(
    &self,
    extraction: &Extraction,
    _extracting: bool,
  ) -> Result<String, MkdocError> {
    let raw = &extraction.document.raw_front_matter;
    let mut out = String::with_capacity(raw.len() + extraction.body.len());
    out.push_str(raw);
    out.push_str(&extraction.body);
    Ok(out)
  }
}
