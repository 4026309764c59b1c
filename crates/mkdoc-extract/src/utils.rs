use regex::Regex;

/// A regex that never matches anything.
///
/// Used as the fallback for `LazyLock` statics whose pattern failed to
/// compile, so that a broken pattern degrades into a no-op instead of a
/// panic.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
#[allow(clippy::unwrap_used, reason = "Both patterns are known to be valid")]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| Regex::new(r"^\b$").unwrap())
}
