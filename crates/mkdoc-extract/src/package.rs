use std::{path::Path, sync::LazyLock};

use log::{debug, error};
use regex::Regex;

use crate::{types::PackageInfo, utils::never_matching_regex};

static PACKAGE_PROVIDE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*package\s+provide\s+([^\s;\]]+)\s+([^\s;\]]+)")
    .unwrap_or_else(|e| {
      error!("Failed to compile PACKAGE_PROVIDE regex: {e}");
      never_matching_regex()
    })
});

impl PackageInfo {
  /// Derive package metadata for the file at `path` with content `source`.
  ///
  /// The first `package provide NAME VERSION` line is only looked for when
  /// the file's extension is one of `extensions`; otherwise name and version
  /// stay empty. The basename is always taken from `path`.
  #[must_use]
  pub fn scan(path: &Path, source: &str, extensions: &[String]) -> Self {
    let basename = path
      .file_stem()
      .map(|stem| stem.to_string_lossy().into_owned())
      .unwrap_or_default();

    let applicable = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));

    let mut info = Self {
      basename,
      ..Self::default()
    };

    if !applicable {
      return info;
    }

    if let Some(caps) = source.lines().find_map(|l| PACKAGE_PROVIDE.captures(l)) {
      info.name = caps[1].to_string();
      info.version = caps[2].to_string();
      debug!("Found package {} {}", info.name, info.version);
    }

    info
  }
}
