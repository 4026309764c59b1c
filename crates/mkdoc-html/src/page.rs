use html_escape::{encode_double_quoted_attribute, encode_text};
use mkdoc_extract::Document;
use mkdoc_templates::PAGE_TEMPLATE;
use tera::Tera;

use crate::error::HtmlError;

/// Wrap a rendered HTML body into a complete page.
///
/// The head carries the document title, author and stylesheet. When
/// `title_block` is set, a title/author/date block precedes the body; direct
/// Markdown conversions leave it out since their first heading already plays
/// that role.
///
/// # Errors
///
/// Returns [`HtmlError::Template`] if the page template fails to render.
pub fn render_page(
  document: &Document,
  body_html: &str,
  title_block: bool,
) -> Result<String, HtmlError> {
  let mut tera = Tera::default();
  tera.add_raw_template("page", PAGE_TEMPLATE)?;

  let mut context = tera::Context::new();
  context.insert("title", &encode_text(&document.title));
  context.insert("author", &encode_text(&document.author));
  context.insert("date", &encode_text(&document.date));
  // The same values inside `<meta content="...">`.
  context.insert(
    "title_attr",
    &encode_double_quoted_attribute(&document.title),
  );
  context.insert(
    "author_attr",
    &encode_double_quoted_attribute(&document.author),
  );
  context.insert("style", &document.style);
  context.insert("version", env!("CARGO_PKG_VERSION"));
  context.insert("title_block", &title_block);
  context.insert("content", body_html);

  Ok(tera.render("page", &context)?)
}
