use thiserror::Error;

/// Errors raised while assembling an HTML page.
#[derive(Debug, Error)]
pub enum HtmlError {
  #[error("Template error: {0}")]
  Template(#[from] tera::Error),
}
