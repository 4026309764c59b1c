use std::{
  fs,
  path::{Path, PathBuf},
};

use log::LevelFilter;
use mkdoc_extract::{
  DEFAULT_PREFIX,
  ExtractOptions,
  default_package_extensions,
  today,
};
use serde::Deserialize;

use crate::{cli::Cli, error::MkdocError, mode::Mode};

fn default_prefix() -> String {
  DEFAULT_PREFIX.to_string()
}

const fn default_log_level() -> LevelFilter {
  LevelFilter::Info
}

/// Configuration for one mkdoc run.
///
/// The serializable part can be loaded from a TOML or JSON file; input,
/// output and log level always come from the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Source file to read.
  #[serde(skip)]
  pub input: PathBuf,

  /// Destination file, or `-` for standard output.
  #[serde(skip)]
  pub output: PathBuf,

  /// Explicit output mode. `None` infers it from the output extension.
  #[serde(default)]
  pub mode: Option<Mode>,

  /// Stylesheet linked from HTML output. An empty string counts as unset.
  #[serde(default)]
  pub css: Option<String>,

  /// Comment prefix marking documentation lines.
  #[serde(default = "default_prefix")]
  pub prefix: String,

  /// Extensions of files that are scanned for a package declaration.
  #[serde(default = "default_package_extensions")]
  pub package_extensions: Vec<String>,

  /// Log verbosity for the run.
  #[serde(skip, default = "default_log_level")]
  pub log_level: LevelFilter,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input:              PathBuf::new(),
      output:             PathBuf::new(),
      mode:               None,
      css:                None,
      prefix:             default_prefix(),
      package_extensions: default_package_extensions(),
      log_level:          default_log_level(),
    }
  }
}

impl Config {
  /// Load configuration from a file.
  /// Only TOML and JSON are supported.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unsupported
  /// extension, or does not parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MkdocError> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).map_err(|source| MkdocError::ReadConfig {
        path: path.to_path_buf(),
        source,
      })?;

    let ext = path
      .extension()
      .and_then(|ext| ext.to_str())
      .unwrap_or("")
      .to_lowercase();

    let config = match ext.as_str() {
      "toml" => toml::from_str(&content)?,
      "json" => serde_json::from_str(&content)?,
      _ => {
        return Err(MkdocError::Config(format!(
          "unsupported configuration file format: {}",
          path.display()
        )));
      },
    };

    Ok(config)
  }

  /// Build the configuration for a CLI invocation, merging an optional
  /// configuration file with the command line flags.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration file cannot be loaded.
  pub fn load(cli: &Cli) -> Result<Self, MkdocError> {
    let mut config = match &cli.config_file {
      Some(path) => Self::from_file(path)?,
      None => Self::default(),
    };

    config.input.clone_from(&cli.input);
    config.output.clone_from(&cli.output);
    config.log_level = cli.verbosity.log_level_filter();

    if cli.mode.is_some() {
      config.mode = cli.mode;
    }
    if cli.css.is_some() {
      config.css.clone_from(&cli.css);
    }
    if let Some(prefix) = &cli.prefix {
      config.prefix.clone_from(prefix);
    }

    Ok(config)
  }

  /// Extraction options for this run.
  #[must_use]
  pub fn extract_options(&self, extracting: bool) -> ExtractOptions {
    ExtractOptions {
      extracting,
      prefix: self.prefix.clone(),
      css: self.css.clone().filter(|css| !css.is_empty()),
      today: today(),
      package_extensions: self.package_extensions.clone(),
      base_dir: None,
    }
  }
}
