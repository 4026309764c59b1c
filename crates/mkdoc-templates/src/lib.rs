//! Templates embedded into the `mkdoc` binary.
//!
//! `page.html` is rendered with Tera, `heading.md` is a plain Markdown
//! heading block with `{title}`, `{author}` and `{date}` slots.

pub const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
pub const HEADING_TEMPLATE: &str = include_str!("../templates/heading.md");

pub const DEFAULT_CSS: &str = include_str!("../templates/default.css");
