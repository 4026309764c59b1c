use std::{io, path::PathBuf};

use mkdoc_extract::ExtractError;
use mkdoc_html::HtmlError;
use thiserror::Error;

/// Top-level error type for the mkdoc crate.
#[derive(Debug, Error)]
pub enum MkdocError {
  /// Invalid combination of input, output and mode, a broken configuration
  /// file, or a missing capability. Raised before any output is written.
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("failed to read configuration file `{path}`: {source}")]
  ReadConfig {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write `{path}`: {source}")]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Extract(#[from] ExtractError),

  #[error(transparent)]
  Html(#[from] HtmlError),
}

impl From<toml::de::Error> for MkdocError {
  fn from(e: toml::de::Error) -> Self {
    Self::Config(e.to_string())
  }
}

impl From<serde_json::Error> for MkdocError {
  fn from(e: serde_json::Error) -> Self {
    Self::Config(e.to_string())
  }
}
