use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::mode::Mode;

/// Command line interface for mkdoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Extract documentation comments from source files into Markdown \
           or HTML"
)]
pub struct Cli {
  /// Source file with documentation comments, or a Markdown file to convert
  /// to HTML.
  pub input: PathBuf,

  /// Output file. Its extension (.html or .md) selects the output format
  /// unless --mode is given. Use `-` to print to standard output.
  pub output: PathBuf,

  /// Output format, overriding the output file's extension.
  #[arg(short, long, value_enum)]
  pub mode: Option<Mode>,

  /// Stylesheet to link from HTML output. Without one, a built-in stylesheet
  /// is embedded.
  #[arg(long)]
  pub css: Option<String>,

  /// Comment prefix that marks documentation lines.
  #[arg(long)]
  pub prefix: Option<String>,

  /// Path to a configuration file (TOML or JSON). Command line flags take
  /// precedence over its values.
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,

  #[command(flatten)]
  pub verbosity: Verbosity<InfoLevel>,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
