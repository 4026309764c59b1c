//! HTML output for `mkdoc`.
//!
//! Takes an [`Extraction`], renders its body through a [`MarkdownRenderer`],
//! applies the synopsis and code-block fix-ups and wraps the result into a
//! standalone page.

pub mod error;
pub mod page;
pub mod postprocess;
pub mod renderer;

use log::debug;
use mkdoc_extract::Extraction;

pub use crate::{
  error::HtmlError,
  page::render_page,
  postprocess::postprocess,
  renderer::{MarkdownRenderer, default_renderer},
};
#[cfg(feature = "comrak")]
pub use crate::renderer::ComrakRenderer;

/// Turn an extraction into a complete HTML document.
///
/// # Errors
///
/// Returns [`HtmlError::Template`] if the page template fails to render.
pub fn to_html(
  extraction: &Extraction,
  renderer: &dyn MarkdownRenderer,
  title_block: bool,
) -> Result<String, HtmlError> {
  let rendered = renderer.render(&extraction.body);
  debug!("Rendered {} bytes of HTML", rendered.len());

  let body = postprocess(&rendered);
  render_page(&extraction.document, &body, title_block)
}
