use std::{
  fs,
  path::{Path, PathBuf},
};

use log::debug;

use crate::error::ExtractError;

/// Resolve `target` against `base_dir`. Absolute paths are kept as-is.
#[must_use]
pub fn include_path(target: &str, base_dir: Option<&Path>) -> PathBuf {
  let target = Path::new(target);
  match base_dir {
    Some(dir) if target.is_relative() => dir.join(target),
    _ => target.to_path_buf(),
  }
}

/// Read the lines of an included file.
///
/// The lines are returned verbatim. Include directives inside the file are
/// not expanded; they reach the output as literal text.
///
/// # Errors
///
/// Returns [`ExtractError::ReadInclude`] if the file cannot be read.
pub fn read_include(
  target: &str,
  base_dir: Option<&Path>,
) -> Result<Vec<String>, ExtractError> {
  let path = include_path(target, base_dir);
  debug!("Including file: {}", path.display());

  let content = fs::read_to_string(&path)
    .map_err(|source| ExtractError::ReadInclude { path, source })?;

  Ok(content.lines().map(str::to_owned).collect())
}
