//! Header block handling.
//!
//! Two header forms are recognized at the top of the body stream:
//!
//! ```text
//! ---                      % Title
//! title: mkdoc manual      % Author
//! author: Jane Doe         % 2024-05-01
//! date: __DATE__
//! style: mkdoc.css
//! ---
//! ```
//!
//! The `---` block must open within the first four body lines; the legacy `%`
//! lines are only honored on lines one to three. From line five on, with no
//! block open, header detection is switched off for the rest of the document.
use std::sync::LazyLock;

use log::{debug, error};
use mkdoc_templates::DEFAULT_CSS;
use regex::Regex;

use crate::{macros::Macros, types::Document, utils::never_matching_regex};

static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([a-z]+):\s*(.*?)\s*$").unwrap_or_else(|e| {
    error!("Failed to compile KEY_VALUE regex: {e}");
    never_matching_regex()
  })
});

static LEGACY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^%\s*(.*?)\s*$").unwrap_or_else(|e| {
    error!("Failed to compile LEGACY_HEADER regex: {e}");
    never_matching_regex()
  })
});

/// Last body line on which a `---` block may open.
const OPENING_WINDOW: usize = 4;

/// Last body line on which a legacy `%` line is honored.
const LEGACY_WINDOW: usize = 3;

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterState {
  /// No header seen yet and still within the detection window.
  Before,
  /// Between the opening and closing `---` lines.
  InFrontMatter,
  /// Header closed, or detection switched off.
  After,
}

/// Stylesheet link markup for `href`.
#[must_use]
pub fn stylesheet_link(href: &str) -> String {
  format!(r#"<link rel="stylesheet" href="{href}">"#)
}

/// Consumes the header lines of a body stream and builds the [`Document`].
#[derive(Debug)]
pub struct FrontMatterParser<'m> {
  state:    FrontMatterState,
  line_no:  usize,
  document: Document,
  css:      Option<String>,
  macros:   &'m Macros,
}

impl<'m> FrontMatterParser<'m> {
  /// Create a parser. `today` is the default document date and `css` an
  /// extra stylesheet requested by the caller.
  #[must_use]
  pub fn new(macros: &'m Macros, today: &str, css: Option<&str>) -> Self {
    Self {
      state: FrontMatterState::Before,
      line_no: 0,
      document: Document {
        date: today.to_string(),
        ..Document::default()
      },
      css: css.map(str::to_owned),
      macros,
    }
  }

  #[must_use]
  pub const fn state(&self) -> FrontMatterState {
    self.state
  }

  /// Feed the next body line.
  ///
  /// Returns `true` if the line belonged to the header and must not be
  /// forwarded to the body.
  pub fn feed(&mut self, line: &str) -> bool {
    self.line_no += 1;

    match self.state {
      FrontMatterState::Before => {
        if self.line_no <= OPENING_WINDOW && is_delimiter(line) {
          debug!("Front matter opens on body line {}", self.line_no);
          self.push_raw(line);
          self.state = FrontMatterState::InFrontMatter;
          return true;
        }
        if self.line_no <= LEGACY_WINDOW {
          if let Some(caps) = LEGACY_HEADER.captures(line) {
            self.push_raw(line);
            let value = self.macros.apply(&caps[1]).into_owned();
            match self.line_no {
              1 => self.document.title = value,
              2 => self.document.author = value,
              _ => self.document.date = value,
            }
            return true;
          }
        }
        if self.line_no > OPENING_WINDOW {
          self.state = FrontMatterState::After;
        }
        false
      },
      FrontMatterState::InFrontMatter => {
        if is_delimiter(line) {
          self.push_raw(line);
          self.state = FrontMatterState::After;
          debug!("Front matter closes on body line {}", self.line_no);
          return true;
        }

        let line = self.macros.apply(line).into_owned();
        self.push_raw(&line);
        if let Some(caps) = KEY_VALUE.captures(&line) {
          self.set_field(&caps[1], &caps[2]);
        }
        true
      },
      FrontMatterState::After => false,
    }
  }

  /// Finish parsing and return the document.
  ///
  /// When no `style` key was given, the caller's stylesheet is linked if
  /// there is one, otherwise the embedded default stylesheet is inlined.
  #[must_use]
  pub fn finish(self) -> Document {
    let mut document = self.document;
    if document.style.is_empty() {
      document.style = self.css.as_deref().map_or_else(
        || format!("<style>\n{DEFAULT_CSS}</style>"),
        stylesheet_link,
      );
    }
    document
  }

  fn set_field(&mut self, key: &str, value: &str) {
    match key {
      "style" => {
        let mut style = stylesheet_link(value);
        if let Some(css) = &self.css {
          style.push('\n');
          style.push_str(&stylesheet_link(css));
        }
        self.document.style = style;
      },
      "title" => self.document.title = value.to_string(),
      "author" => self.document.author = value.to_string(),
      "date" => self.document.date = value.to_string(),
      _ => {},
    }
  }

  fn push_raw(&mut self, line: &str) {
    self.document.raw_front_matter.push_str(line);
    self.document.raw_front_matter.push('\n');
  }
}

fn is_delimiter(line: &str) -> bool {
  line.starts_with("---")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::PackageInfo;

  fn macros() -> Macros {
    Macros::new(
      &PackageInfo {
        name:     "demo".to_string(),
        version:  "1.0".to_string(),
        basename: "demo".to_string(),
      },
      "2024-05-01",
    )
  }

  fn run(parser: &mut FrontMatterParser<'_>, lines: &[&str]) -> Vec<String> {
    lines
      .iter()
      .filter(|line| !parser.feed(line))
      .map(|line| (*line).to_string())
      .collect()
  }

  #[test]
  fn test_block_sets_fields() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let body = run(&mut parser, &[
      "---",
      "title: Manual",
      "author: Jane Doe",
      "date: 2020-01-01",
      "---",
      "## NAME",
    ]);

    assert_eq!(body, vec!["## NAME"]);
    assert_eq!(parser.state(), FrontMatterState::After);

    let doc = parser.finish();
    assert_eq!(doc.title, "Manual");
    assert_eq!(doc.author, "Jane Doe");
    assert_eq!(doc.date, "2020-01-01");
    assert_eq!(
      doc.raw_front_matter,
      "---\ntitle: Manual\nauthor: Jane Doe\ndate: 2020-01-01\n---\n"
    );
  }

  #[test]
  fn test_macros_are_substituted_in_block() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    run(&mut parser, &["---", "title: __PKGNAME__ __PKGVERSION__", "---"]);

    let doc = parser.finish();
    assert_eq!(doc.title, "demo 1.0");
    assert!(doc.raw_front_matter.contains("title: demo 1.0"));
  }

  #[test]
  fn test_date_defaults_to_today() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    run(&mut parser, &["---", "title: T", "---"]);
    assert_eq!(parser.finish().date, "2024-05-01");
  }

  #[test]
  fn test_unknown_keys_only_in_raw_text() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let body = run(&mut parser, &["---", "license: MIT", "Key: ignored", "---"]);

    assert!(body.is_empty());
    let doc = parser.finish();
    assert!(doc.raw_front_matter.contains("license: MIT"));
    assert!(doc.title.is_empty());
  }

  #[test]
  fn test_style_key_with_css_option() {
    let macros = macros();
    let mut parser =
      FrontMatterParser::new(&macros, "2024-05-01", Some("extra.css"));
    run(&mut parser, &["---", "style: mkdoc.css", "---"]);

    assert_eq!(
      parser.finish().style,
      "<link rel=\"stylesheet\" href=\"mkdoc.css\">\n<link \
       rel=\"stylesheet\" href=\"extra.css\">"
    );
  }

  #[test]
  fn test_css_option_without_style_key() {
    let macros = macros();
    let parser = FrontMatterParser::new(&macros, "2024-05-01", Some("x.css"));
    assert_eq!(parser.finish().style, stylesheet_link("x.css"));
  }

  #[test]
  fn test_default_style_is_embedded() {
    let macros = macros();
    let parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let style = parser.finish().style;
    assert!(style.starts_with("<style>"));
    assert!(style.ends_with("</style>"));
  }

  #[test]
  fn test_block_may_open_on_fourth_line() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let body = run(&mut parser, &["", "", "", "---", "title: Late", "---"]);
    assert_eq!(body.len(), 3);
    assert_eq!(parser.finish().title, "Late");
  }

  #[test]
  fn test_block_after_fourth_line_is_body() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let lines = ["a", "b", "c", "d", "---", "title: Nope", "---"];
    let body = run(&mut parser, &lines);

    assert_eq!(body.len(), lines.len());
    assert_eq!(parser.state(), FrontMatterState::After);
    assert!(parser.finish().title.is_empty());
  }

  #[test]
  fn test_unterminated_block_swallows_rest() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let body =
      run(&mut parser, &["---", "title: Open", "## NAME", "text", "more"]);

    assert!(body.is_empty());
    assert_eq!(parser.state(), FrontMatterState::InFrontMatter);
  }

  #[test]
  fn test_legacy_percent_header() {
    let macros = macros();
    let mut parser = FrontMatterParser::new(&macros, "2024-05-01", None);
    let body = run(&mut parser, &[
      "% Manual",
      "% Jane Doe",
      "% 2019-12-31",
      "% not a header any more",
    ]);

    assert_eq!(body, vec!["% not a header any more"]);
    let doc = parser.finish();
    assert_eq!(doc.title, "Manual");
    assert_eq!(doc.author, "Jane Doe");
    assert_eq!(doc.date, "2019-12-31");
    assert_eq!(doc.raw_front_matter, "% Manual\n% Jane Doe\n% 2019-12-31\n");
  }
}
