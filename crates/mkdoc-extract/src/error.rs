use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting documentation from a source file.
#[derive(Debug, Error)]
pub enum ExtractError {
  /// The input file could not be read from disk.
  #[error("failed to read input file `{path}`: {source}")]
  ReadInput {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A file named by an include directive could not be read.
  #[error("failed to read included file `{path}`: {source}")]
  ReadInclude {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The configured comment prefix produced an unusable pattern.
  #[error("invalid comment prefix `{prefix}`: {source}")]
  Prefix {
    prefix: String,
    #[source]
    source: regex::Error,
  },
}
