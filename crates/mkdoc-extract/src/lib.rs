//! `mkdoc-extract`.
//!
//! Pulls documentation out of source files that carry it in prefixed comment
//! lines (`#' ...` by default), and turns it into a Markdown body plus the
//! document metadata found in its header block.
//!
//! # Example
//!
//! ```no_run
//! use mkdoc_extract::{ExtractOptions, extract_from_file};
//!
//! let extraction =
//!   extract_from_file("lib/mkdoc.tcl", ExtractOptions::default()).unwrap();
//! println!("{}", extraction.document.title);
//! print!("{}", extraction.body);
//! ```

pub mod classify;
pub mod error;
mod extract;
pub mod frontmatter;
mod images;
pub mod include;
pub mod macros;
mod package;
pub mod sections;
mod types;
pub mod utils;

pub use error::ExtractError;
pub use extract::{Extractor, extract_from_file};
pub use images::rewrite_images;
pub use types::{
  DEFAULT_PREFIX,
  Document,
  ExtractOptions,
  Extraction,
  PackageInfo,
  default_package_extensions,
  today,
};
