//! Line classification for prefixed documentation comments.
//!
//! A source file documents itself through lines such as
//!
//! ```text
//! #' ## NAME
//! #'
//! #' #include "usage.md"
//! proc hello {} { ... }
//! ```
//!
//! Only the prefixed lines reach the rest of the pipeline; everything else is
//! ordinary code and dropped.
use regex::Regex;

use crate::error::ExtractError;

/// What a single input line contributes to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
  /// Documentation text with the comment prefix removed. May be empty.
  Doc(&'a str),
  /// An include directive naming the file to inline.
  Include(&'a str),
  /// Source code that does not belong in the documentation.
  Code,
}

/// Compiled patterns for one comment prefix.
#[derive(Debug, Clone)]
pub struct Classifier {
  doc:        Regex,
  include:    Regex,
  extracting: bool,
}

impl Classifier {
  /// Build a classifier for `prefix`.
  ///
  /// When `extracting` is `false` the prefix is ignored and every line is
  /// treated as documentation.
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::Prefix`] if the patterns built from `prefix`
  /// cannot be compiled.
  pub fn new(prefix: &str, extracting: bool) -> Result<Self, ExtractError> {
    let escaped = regex::escape(prefix);
    let compile = |pattern: String| {
      Regex::new(&pattern).map_err(|source| {
        ExtractError::Prefix {
          prefix: prefix.to_string(),
          source,
        }
      })
    };

    Ok(Self {
      doc: compile(format!(r"^\s*{escaped} ?(.*)$"))?,
      include: compile(format!(r#"^\s*{escaped}\s+#include\s+"([^"]+)""#))?,
      extracting,
    })
  }

  /// Classify one line. The trailing line terminator, if any, is ignored.
  #[must_use]
  pub fn classify<'a>(&self, line: &'a str) -> Line<'a> {
    let line = line.trim_end_matches(['\n', '\r']);

    if !self.extracting {
      return Line::Doc(line);
    }

    if let Some(caps) = self.include.captures(line) {
      if let Some(path) = caps.get(1) {
        return Line::Include(path.as_str());
      }
    }

    self
      .doc
      .captures(line)
      .and_then(|caps| caps.get(1))
      .map_or(Line::Code, |content| Line::Doc(content.as_str()))
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Tests can unwrap")]

  use super::*;

  fn tcl() -> Classifier {
    Classifier::new("#'", true).unwrap()
  }

  #[test]
  fn test_strips_prefix_and_single_space() {
    let classifier = tcl();
    assert_eq!(classifier.classify("#' ## NAME"), Line::Doc("## NAME"));
    assert_eq!(classifier.classify("#'  indented"), Line::Doc(" indented"));
    assert_eq!(classifier.classify("#'"), Line::Doc(""));
  }

  #[test]
  fn test_leading_whitespace_before_prefix() {
    assert_eq!(tcl().classify("    #' inside a proc"), Line::Doc("inside a proc"));
  }

  #[test]
  fn test_code_is_discarded() {
    let classifier = tcl();
    assert_eq!(classifier.classify("proc hello {} {"), Line::Code);
    assert_eq!(classifier.classify("# plain comment"), Line::Code);
    assert_eq!(classifier.classify("set x 1 ;#' trailing"), Line::Code);
  }

  #[test]
  fn test_include_directive() {
    assert_eq!(
      tcl().classify("#' #include \"usage.md\""),
      Line::Include("usage.md")
    );
  }

  #[test]
  fn test_passthrough_keeps_line_verbatim() {
    let classifier = Classifier::new("#'", false).unwrap();
    assert_eq!(classifier.classify("    code block\r\n"), Line::Doc("    code block"));
    assert_eq!(
      classifier.classify("#' #include \"x.md\""),
      Line::Doc("#' #include \"x.md\"")
    );
  }

  #[test]
  fn test_custom_prefix_is_escaped() {
    let classifier = Classifier::new("##'", true).unwrap();
    assert_eq!(classifier.classify("##' text"), Line::Doc("text"));
    assert_eq!(classifier.classify("#' text"), Line::Code);
  }
}
