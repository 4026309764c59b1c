use mkdoc_extract::Extraction;
use mkdoc_html::{MarkdownRenderer, to_html};

use super::Converter;
use crate::error::MkdocError;

/// Standalone HTML page.
pub struct HtmlConverter {
  renderer: Box<dyn MarkdownRenderer>,
}

impl HtmlConverter {
  #[must_use]
  pub fn new(renderer: Box<dyn MarkdownRenderer>) -> Self {
    Self { renderer }
  }
}

impl Converter for HtmlConverter {
  fn render(
    &self,
    extraction: &Extraction,
    extracting: bool,
  ) -> Result<String, MkdocError> {
    // A Markdown input has no header block to show.
    Ok(to_html(extraction, self.renderer.as_ref(), extracting)?)
  }
}
