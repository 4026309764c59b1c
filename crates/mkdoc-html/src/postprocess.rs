use std::sync::LazyLock;

use log::error;
use mkdoc_extract::utils::never_matching_regex;
use regex::Regex;

/// Code block as emitted by renderers that tag both elements with `code`.
static CODE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"<pre class='code'><code class='([^']+)'>").unwrap_or_else(|e| {
    error!("Failed to compile CODE_CLASS regex: {e}");
    never_matching_regex()
  })
});

/// Code block as emitted by comrak for a fenced block with an info string.
static LANGUAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"<pre><code class="language-([^"\s]+)">"#).unwrap_or_else(|e| {
    error!("Failed to compile LANGUAGE_CLASS regex: {e}");
    never_matching_regex()
  })
});

/// Any HTML tag, used to get at the text of a heading line.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
    error!("Failed to compile TAG regex: {e}");
    never_matching_regex()
  })
});

const SYNOPSIS_PRE: &str = "<pre class='synopsis'>";

/// Apply the styling fix-ups to rendered HTML.
///
/// Inside a section whose `<h2>` heading text mentions "synopsis" (in any
/// case; attributes such as an anchor name do not count),
/// bare `<pre>` tags get the `synopsis` class. Everywhere else, the language
/// class of a code block is copied onto its `<pre>` tag.
#[must_use]
pub fn postprocess(html: &str) -> String {
  let mut out = String::with_capacity(html.len() + 64);
  let mut synopsis = false;

  for line in html.lines() {
    if line.contains("<h2") {
      synopsis = TAG
        .replace_all(line, "")
        .to_lowercase()
        .contains("synopsis");
    }

    let line = if synopsis && line.contains("<pre>") {
      line.replace("<pre>", SYNOPSIS_PRE)
    } else {
      line.to_string()
    };

    let line = CODE_CLASS
      .replace_all(&line, "<pre class='code $1'><code class='$1'>")
      .into_owned();
    let line = LANGUAGE_CLASS
      .replace_all(&line, r#"<pre class="$1"><code class="language-$1">"#);

    out.push_str(&line);
    out.push('\n');
  }

  out
}
