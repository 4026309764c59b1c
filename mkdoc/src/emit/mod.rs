//! Output strategies, one per [`Mode`].
mod html;
mod markdown;
mod pandoc;

use std::{
  collections::HashMap,
  fs,
  io::{self, Write},
  path::{Path, PathBuf},
};

use log::{debug, info};
use mkdoc_extract::{ExtractOptions, Extraction, extract_from_file};
use mkdoc_html::MarkdownRenderer;

pub use self::{
  html::HtmlConverter,
  markdown::{MarkdownConverter, heading_block},
  pandoc::PandocConverter,
};
use crate::{
  error::MkdocError,
  mode::{Mode, is_stdout},
};

/// Where a rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
  File(PathBuf),
  Stdout,
}

impl Output {
  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    if is_stdout(path) {
      Self::Stdout
    } else {
      Self::File(path.to_path_buf())
    }
  }

  /// Write the whole document in one go.
  ///
  /// # Errors
  ///
  /// Returns [`MkdocError::Write`] if the destination cannot be written.
  pub fn write(&self, content: &str) -> Result<(), MkdocError> {
    match self {
      Self::File(path) => {
        fs::write(path, content).map_err(|source| MkdocError::Write {
          path: path.clone(),
          source,
        })?;
        info!("Wrote {}", path.display());
      },
      Self::Stdout => {
        let mut stdout = io::stdout().lock();
        stdout
          .write_all(content.as_bytes())
          .and_then(|()| stdout.flush())
          .map_err(|source| MkdocError::Write {
            path: PathBuf::from("-"),
            source,
          })?;
      },
    }
    Ok(())
  }
}

/// A conversion strategy for one output mode.
pub trait Converter {
  /// Render an extraction into the final document text.
  ///
  /// `extracting` is `false` when the input was already Markdown.
  ///
  /// # Errors
  ///
  /// Returns an error if rendering fails.
  fn render(
    &self,
    extraction: &Extraction,
    extracting: bool,
  ) -> Result<String, MkdocError>;

  /// Read `input`, run the extraction pipeline and write the rendered
  /// document to `output`. Nothing is written unless every earlier step
  /// succeeded.
  ///
  /// # Errors
  ///
  /// Returns an error if reading, rendering or writing fails.
  fn convert(
    &self,
    input: &Path,
    output: &Output,
    options: &ExtractOptions,
  ) -> Result<(), MkdocError> {
    let extracting = options.extracting;
    let extraction = extract_from_file(input, options.clone())?;
    let rendered = self.render(&extraction, extracting)?;
    output.write(&rendered)
  }
}

/// Converters keyed by output mode.
#[derive(Default)]
pub struct Registry {
  converters: HashMap<Mode, Box<dyn Converter>>,
}

impl Registry {
  /// An empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Register `converter` for `mode`, replacing any previous one.
  pub fn register(&mut self, mode: Mode, converter: Box<dyn Converter>) {
    self.converters.insert(mode, converter);
  }

  /// The built-in converters. HTML output is only available when a Markdown
  /// renderer is supplied.
  #[must_use]
  pub fn with_defaults(renderer: Option<Box<dyn MarkdownRenderer>>) -> Self {
    let mut registry = Self::new();
    registry.register(Mode::Markdown, Box::new(MarkdownConverter));
    registry.register(Mode::Pandoc, Box::new(PandocConverter));
    if let Some(renderer) = renderer {
      registry.register(Mode::Html, Box::new(HtmlConverter::new(renderer)));
    } else {
      debug!("No Markdown renderer available, html output disabled");
    }
    registry
  }

  /// Look up the converter for `mode`.
  ///
  /// # Errors
  ///
  /// Returns [`MkdocError::Config`] if no converter is registered for it.
  pub fn get(&self, mode: Mode) -> Result<&dyn Converter, MkdocError> {
    self
      .converters
      .get(&mode)
      .map(AsRef::as_ref)
      .ok_or_else(|| {
        if mode == Mode::Html {
          MkdocError::Config(
            "html output needs a Markdown renderer; build mkdoc with the \
             `comrak` feature or choose --mode markdown"
              .to_string(),
          )
        } else {
          MkdocError::Config(format!("no converter registered for {mode}"))
        }
      })
  }
}
