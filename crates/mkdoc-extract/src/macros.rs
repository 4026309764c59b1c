use std::borrow::Cow;

use crate::types::PackageInfo;

pub const PKGNAME: &str = "__PKGNAME__";
pub const PKGVERSION: &str = "__PKGVERSION__";
pub const DATE: &str = "__DATE__";
pub const BASENAME: &str = "__BASENAME__";

/// Placeholder substitution for body and front-matter lines.
#[derive(Debug, Clone)]
pub struct Macros {
  replacements: [(&'static str, String); 4],
}

impl Macros {
  #[must_use]
  pub fn new(package: &PackageInfo, date: &str) -> Self {
    Self {
      replacements: [
        (PKGNAME, package.name.clone()),
        (PKGVERSION, package.version.clone()),
        (DATE, date.to_string()),
        (BASENAME, package.basename.clone()),
      ],
    }
  }

  /// Replace every known placeholder in `line`.
  ///
  /// Placeholders without a value are left in place.
  #[must_use]
  pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
    if !line.contains("__") {
      return Cow::Borrowed(line);
    }

    let mut result = Cow::Borrowed(line);
    for (placeholder, value) in &self.replacements {
      if value.is_empty() || !result.contains(placeholder) {
        continue;
      }
      result = Cow::Owned(result.replace(placeholder, value));
    }
    result
  }
}
