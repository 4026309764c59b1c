use std::{borrow::Cow, sync::LazyLock};

use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

static EMPTY_CAPTION_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"!\[\]\(([^)\s]+)\)").unwrap_or_else(|e| {
    error!("Failed to compile EMPTY_CAPTION_IMAGE regex: {e}");
    never_matching_regex()
  })
});

/// Rewrite caption-less Markdown images into explicit image tags.
///
/// `![](pic.png)` becomes `<image src="pic.png"></img>`. Images with a
/// caption are left for the Markdown renderer.
#[must_use]
pub fn rewrite_images(line: &str) -> Cow<'_, str> {
  EMPTY_CAPTION_IMAGE.replace_all(line, r#"<image src="$1"></img>"#)
}
