use mkdoc_extract::{Document, Extraction};
use mkdoc_templates::HEADING_TEMPLATE;

use super::Converter;
use crate::error::MkdocError;

/// Plain Markdown: a heading block followed by the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

/// Fill the heading template from `document`.
///
/// Nothing is produced without a title. Blocks whose value is empty are
/// dropped so an unknown author does not leave a bare `##`.
#[must_use]
pub fn heading_block(document: &Document) -> String {
  if document.title.is_empty() {
    return String::new();
  }

  HEADING_TEMPLATE
    .split_inclusive("\n\n")
    .filter_map(|block| {
      let (slot, value) = if block.contains("{title}") {
        ("{title}", &document.title)
      } else if block.contains("{author}") {
        ("{author}", &document.author)
      } else if block.contains("{date}") {
        ("{date}", &document.date)
      } else {
        return Some(block.to_string());
      };
      (!value.is_empty()).then(|| block.replace(slot, value))
    })
    .collect()
}

impl Converter for MarkdownConverter {
  fn render(
    &self,
    extraction: &Extraction,
    _extracting: bool,
  ) -> Result<String, MkdocError> {
    let mut out = heading_block(&extraction.document);
    out.push_str(&extraction.body);
    Ok(out)
  }
}
