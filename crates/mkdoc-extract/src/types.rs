use std::path::PathBuf;

/// Metadata collected for a single extraction run.
///
/// Filled in by the front-matter parser while the header block is consumed
/// and left untouched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
  /// Value of the `title` key, or of the first legacy `%` line.
  pub title:            String,
  /// Value of the `author` key, or of the second legacy `%` line.
  pub author:           String,
  /// Value of the `date` key; defaults to the day of the run.
  pub date:             String,
  /// Stylesheet markup for the HTML head: one or two `<link>` tags, or the
  /// embedded default stylesheet wrapped in a `<style>` element.
  pub style:            String,
  /// The header block exactly as it appeared in the body stream, delimiters
  /// included. Empty when the document had no header.
  pub raw_front_matter: String,
}

/// Package metadata used for macro substitution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageInfo {
  /// Name from the `package provide` declaration.
  pub name:     String,
  /// Version from the `package provide` declaration.
  pub version:  String,
  /// Input file name without directory and extension.
  pub basename: String,
}

/// Result of running the extraction pipeline over one input.
#[derive(Debug, Clone)]
pub struct Extraction {
  /// Header metadata.
  pub document: Document,
  /// Transformed Markdown body, one `\n`-terminated line per body line.
  pub body:     String,
  /// Whether a `---` header block was opened but never closed. Everything
  /// after the opening line has then been swallowed as metadata.
  pub unterminated_front_matter: bool,
}

/// Options for a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
  /// When `true`, only lines carrying the comment prefix are documentation.
  /// When `false`, the input is already Markdown and every line is body text.
  pub extracting: bool,

  /// Comment prefix marking documentation lines.
  pub prefix: String,

  /// Extra stylesheet to link from the HTML head.
  pub css: Option<String>,

  /// Date substituted for `__DATE__` and used as the default document date,
  /// formatted as `YYYY-MM-DD`.
  pub today: String,

  /// File extensions (without the dot) whose files are scanned for a
  /// `package provide` declaration.
  pub package_extensions: Vec<String>,

  /// Directory that relative include paths are resolved against. Falls back
  /// to the input file's directory, then to the working directory.
  pub base_dir: Option<PathBuf>,
}

/// The comment prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "#'";

/// Extensions scanned for package declarations when none are configured.
#[must_use]
pub fn default_package_extensions() -> Vec<String> {
  vec!["tcl".to_string(), "tm".to_string()]
}

/// Today's date in the format used by `__DATE__`.
#[must_use]
pub fn today() -> String {
  jiff::Zoned::now().strftime("%Y-%m-%d").to_string()
}

impl Default for ExtractOptions {
  fn default() -> Self {
    Self {
      extracting:         true,
      prefix:             DEFAULT_PREFIX.to_string(),
      css:                None,
      today:              today(),
      package_extensions: default_package_extensions(),
      base_dir:           None,
    }
  }
}
