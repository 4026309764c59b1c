//! The Markdown renderer seam.
//!
//! Rendering Markdown itself is delegated to an external engine; everything
//! around it (image rewriting before, the synopsis and code-class fix-ups
//! after) is ours. The engine only has to satisfy [`MarkdownRenderer`].

/// Something that turns Markdown into an HTML fragment.
pub trait MarkdownRenderer {
  fn render(&self, markdown: &str) -> String;
}

impl<F> MarkdownRenderer for F
where
  F: Fn(&str) -> String,
{
  fn render(&self, markdown: &str) -> String {
    self(markdown)
  }
}

/// Markdown rendering backed by `comrak`.
#[cfg(feature = "comrak")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakRenderer;

#[cfg(feature = "comrak")]
impl ComrakRenderer {
  /// Build comrak options. Raw HTML must survive rendering: documents carry
  /// `<a name=...>` anchors and the rewritten `<image>` tags.
  fn options() -> comrak::options::Options<'static> {
    let mut options = comrak::options::Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.description_lists = true;
    options.render.r#unsafe = true;
    options
  }
}

#[cfg(feature = "comrak")]
impl MarkdownRenderer for ComrakRenderer {
  fn render(&self, markdown: &str) -> String {
    let arena = comrak::Arena::new();
    let options = Self::options();
    let root = comrak::parse_document(&arena, markdown, &options);

    let mut html = String::new();
    if let Err(e) = comrak::format_html(root, &options, &mut html) {
      log::error!("Failed to format rendered Markdown: {e}");
    }
    html
  }
}

/// The renderer compiled into this build, if any.
#[must_use]
pub fn default_renderer() -> Option<Box<dyn MarkdownRenderer>> {
  #[cfg(feature = "comrak")]
  {
    Some(Box::new(ComrakRenderer))
  }
  #[cfg(not(feature = "comrak"))]
  {
    None
  }
}
