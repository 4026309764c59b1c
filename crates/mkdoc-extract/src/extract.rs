//! The extraction pipeline.
//!
//! Each input line is classified; documentation lines and the lines of
//! included files then pass, in order, through the front-matter parser, the
//! macro substituter, the image rewrite and the section reorderer.
use std::{fs, path::Path};

use log::{debug, warn};

use crate::{
  classify::{Classifier, Line},
  error::ExtractError,
  frontmatter::{FrontMatterParser, FrontMatterState},
  images::rewrite_images,
  include::read_include,
  macros::Macros,
  sections::SectionReorderer,
  types::{ExtractOptions, Extraction, PackageInfo},
};

/// Runs the pipeline over in-memory source text.
#[derive(Debug, Clone)]
pub struct Extractor {
  options:    ExtractOptions,
  classifier: Classifier,
  macros:     Macros,
}

impl Extractor {
  /// Create an extractor for one input.
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::Prefix`] if the configured comment prefix
  /// cannot be turned into a pattern.
  pub fn new(
    options: ExtractOptions,
    package: &PackageInfo,
  ) -> Result<Self, ExtractError> {
    let classifier = Classifier::new(&options.prefix, options.extracting)?;
    let macros = Macros::new(package, &options.today);
    Ok(Self {
      options,
      classifier,
      macros,
    })
  }

  /// Extract the documentation contained in `source`.
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::ReadInclude`] if an included file cannot be
  /// read.
  pub fn extract(&self, source: &str) -> Result<Extraction, ExtractError> {
    let mut stage = Stages {
      front_matter: FrontMatterParser::new(
        &self.macros,
        &self.options.today,
        self.options.css.as_deref(),
      ),
      sections:     SectionReorderer::new(),
      macros:       &self.macros,
      body:         String::new(),
    };

    for raw in source.lines() {
      match self.classifier.classify(raw) {
        Line::Doc(text) => stage.push(text),
        Line::Include(target) => {
          let lines = read_include(target, self.options.base_dir.as_deref())?;
          for line in &lines {
            stage.push(line);
          }
        },
        Line::Code => {},
      }
    }

    Ok(stage.finish())
  }
}

/// Per-run state threaded through the stages.
struct Stages<'m> {
  front_matter: FrontMatterParser<'m>,
  sections:     SectionReorderer,
  macros:       &'m Macros,
  body:         String,
}

impl Stages<'_> {
  fn push(&mut self, line: &str) {
    if self.front_matter.feed(line) {
      return;
    }
    let line = self.macros.apply(line);
    let line = rewrite_images(&line);
    self.sections.push(&line, &mut self.body);
  }

  fn finish(mut self) -> Extraction {
    self.sections.finish(&mut self.body);

    let unterminated =
      self.front_matter.state() == FrontMatterState::InFrontMatter;
    if unterminated {
      warn!(
        "Front matter block is never closed with `---`; the rest of the \
         document was read as metadata"
      );
    }

    Extraction {
      document: self.front_matter.finish(),
      body: self.body,
      unterminated_front_matter: unterminated,
    }
  }
}

/// Extract the documentation of the file at `path`.
///
/// Package metadata is scanned from the file itself and relative includes
/// resolve against the file's directory unless `options.base_dir` says
/// otherwise.
///
/// # Errors
///
/// Returns an error if the input or an included file cannot be read, or if
/// the comment prefix is invalid.
pub fn extract_from_file(
  path: impl AsRef<Path>,
  mut options: ExtractOptions,
) -> Result<Extraction, ExtractError> {
  let path = path.as_ref();
  let source = fs::read_to_string(path).map_err(|source| {
    ExtractError::ReadInput {
      path: path.to_path_buf(),
      source,
    }
  })?;

  if options.base_dir.is_none() {
    options.base_dir = path.parent().map(Path::to_path_buf);
  }

  let package = PackageInfo::scan(path, &source, &options.package_extensions);
  debug!(
    "Extracting {} (extracting: {})",
    path.display(),
    options.extracting
  );

  Extractor::new(options, &package)?.extract(&source)
}
