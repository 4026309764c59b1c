//! Output mode selection.
//!
//! The mode is settled before the input is touched, so every configuration
//! mistake surfaces without producing any output.
use std::{fmt, path::Path};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::MkdocError;

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  /// Standalone HTML page.
  Html,
  /// Plain Markdown with a heading block.
  Markdown,
  /// Markdown preceded by the raw front-matter block, for Pandoc.
  Pandoc,
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Html => "html",
      Self::Markdown => "markdown",
      Self::Pandoc => "pandoc",
    })
  }
}

/// Outcome of mode resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
  pub mode:       Mode,
  /// `false` when the input is already Markdown and no comment extraction
  /// takes place.
  pub extracting: bool,
}

/// Whether `output` designates standard output.
#[must_use]
pub fn is_stdout(output: &Path) -> bool {
  output.as_os_str() == "-"
}

fn extension(path: &Path) -> Option<&str> {
  path.extension().and_then(|ext| ext.to_str())
}

/// Decide the output mode for converting `input` into `output`.
///
/// # Errors
///
/// Returns [`MkdocError::Config`] when:
/// - the input is a `.md` file and the output is not `.html`, or an explicit
///   mode other than html was requested for it,
/// - no mode was given and input and output share an extension,
/// - no mode was given and the output extension is neither `.html` nor `.md`.
pub fn resolve(
  input: &Path,
  output: &Path,
  explicit: Option<Mode>,
) -> Result<Resolution, MkdocError> {
  let input_ext = extension(input);
  let output_ext = extension(output);

  if input_ext == Some("md") {
    if output_ext != Some("html") {
      return Err(MkdocError::Config(format!(
        "a Markdown input can only be converted to an .html file, got `{}`",
        output.display()
      )));
    }
    if let Some(mode) = explicit.filter(|mode| *mode != Mode::Html) {
      return Err(MkdocError::Config(format!(
        "a Markdown input can only be converted to html, not {mode}"
      )));
    }
    return Ok(Resolution {
      mode:       Mode::Html,
      extracting: false,
    });
  }

  if is_stdout(output) {
    return Ok(Resolution {
      mode:       explicit.unwrap_or(Mode::Markdown),
      extracting: true,
    });
  }

  if let Some(mode) = explicit {
    return Ok(Resolution {
      mode,
      extracting: true,
    });
  }

  if input_ext == output_ext {
    return Err(MkdocError::Config(format!(
      "input `{}` and output `{}` have the same extension; pass --mode to \
       choose an output format",
      input.display(),
      output.display()
    )));
  }

  let mode = match output_ext {
    Some("html") => Mode::Html,
    Some("md") => Mode::Markdown,
    _ => {
      return Err(MkdocError::Config(format!(
        "cannot infer an output format from `{}`; use an .html or .md file, \
         or pass --mode",
        output.display()
      )));
    },
  };

  Ok(Resolution {
    mode,
    extracting: true,
  })
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Tests can unwrap")]

  use super::*;

  fn resolve_paths(
    input: &str,
    output: &str,
    explicit: Option<Mode>,
  ) -> Result<Resolution, MkdocError> {
    resolve(Path::new(input), Path::new(output), explicit)
  }

  #[test]
  fn test_infers_from_output_extension() {
    assert_eq!(resolve_paths("a.tcl", "a.html", None).unwrap().mode, Mode::Html);
    assert_eq!(
      resolve_paths("a.tcl", "a.md", None).unwrap().mode,
      Mode::Markdown
    );
  }

  #[test]
  fn test_explicit_mode_wins() {
    let resolution =
      resolve_paths("a.tcl", "a.html", Some(Mode::Pandoc)).unwrap();
    assert_eq!(resolution.mode, Mode::Pandoc);
    assert!(resolution.extracting);

    assert_eq!(
      resolve_paths("a.tcl", "b.tcl", Some(Mode::Markdown))
        .unwrap()
        .mode,
      Mode::Markdown
    );
  }

  #[test]
  fn test_same_extension_rejected() {
    let err = resolve_paths("a.tcl", "b.tcl", None).unwrap_err();
    assert!(matches!(err, MkdocError::Config(_)));
  }

  #[test]
  fn test_unknown_output_extension_rejected() {
    assert!(matches!(
      resolve_paths("a.tcl", "a.txt", None),
      Err(MkdocError::Config(_))
    ));
    assert!(matches!(
      resolve_paths("a.tcl", "a", None),
      Err(MkdocError::Config(_))
    ));
  }

  #[test]
  fn test_markdown_input_converts_to_html() {
    let resolution = resolve_paths("README.md", "README.html", None).unwrap();
    assert_eq!(resolution, Resolution {
      mode:       Mode::Html,
      extracting: false,
    });
  }

  #[test]
  fn test_markdown_input_needs_html_output() {
    assert!(resolve_paths("a.md", "a.htm", None).is_err());
    assert!(resolve_paths("a.md", "b.md", Some(Mode::Markdown)).is_err());
    assert!(resolve_paths("a.md", "a.html", Some(Mode::Pandoc)).is_err());
    assert!(resolve_paths("a.md", "a.html", Some(Mode::Html)).is_ok());
  }

  #[test]
  fn test_stdout_defaults_to_markdown() {
    assert_eq!(resolve_paths("a.tcl", "-", None).unwrap().mode, Mode::Markdown);
    assert_eq!(
      resolve_paths("a.tcl", "-", Some(Mode::Html)).unwrap().mode,
      Mode::Html
    );
  }
}
