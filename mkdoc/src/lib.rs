//! mkdoc turns documentation comments embedded in source files into
//! Markdown, Pandoc Markdown or a standalone HTML page.
//!
//! The library side exists so that the binary and the integration tests share
//! one code path; [`run`] is what `main` calls.
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod mode;

use log::debug;

use crate::{
  config::Config,
  emit::{Output, Registry},
  error::MkdocError,
};

/// Convert `config.input` into `config.output` with the built-in converters.
///
/// # Errors
///
/// Returns [`MkdocError::Config`] before anything is read when the mode
/// cannot be resolved or is unavailable, and an I/O or rendering error if
/// the conversion itself fails.
pub fn run(config: &Config) -> Result<(), MkdocError> {
  run_with(config, &Registry::with_defaults(mkdoc_html::default_renderer()))
}

/// Like [`run`], with an explicit set of converters.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(config: &Config, registry: &Registry) -> Result<(), MkdocError> {
  let resolution =
    mode::resolve(&config.input, &config.output, config.mode)?;
  debug!(
    "Converting {} to {} as {}",
    config.input.display(),
    config.output.display(),
    resolution.mode
  );

  let converter = registry.get(resolution.mode)?;
  let output = Output::from_path(&config.output);
  converter.convert(
    &config.input,
    &output,
    &config.extract_options(resolution.extracting),
  )
}
