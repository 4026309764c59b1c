//! Alphabetical reordering of listing sections.
//!
//! A listing section starts at an anchor named `methods`, `options` or
//! `commands`:
//!
//! ```markdown
//! ## <a name='commands'>COMMANDS</a>
//!
//! **zeta** *arg*
//!
//! > Does zeta things.
//!
//! **alpha**
//!
//! > Does alpha things.
//!
//! ## <a name='examples'>EXAMPLES</a>
//! ```
//!
//! Every block introduced by a bold term is buffered under that term, and the
//! blocks are written out sorted by term once the next level-2 anchor heading
//! (or the end of input) closes the section.
use std::{collections::BTreeMap, sync::LazyLock};

use log::{debug, error};
use regex::Regex;

use crate::utils::never_matching_regex;

static LISTING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"<a\s+name=['"](?:methods|options|commands)['"]"#)
    .unwrap_or_else(|e| {
      error!("Failed to compile LISTING_MARKER regex: {e}");
      never_matching_regex()
    })
});

static ANCHOR_HEADING: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^ {0,3}##\s+<a\s+name=").unwrap_or_else(|e| {
    error!("Failed to compile ANCHOR_HEADING regex: {e}");
    never_matching_regex()
  })
});

static TERM: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*(?:\*\*(.+?)\*\*|__(.+?)__)").unwrap_or_else(|e| {
    error!("Failed to compile TERM regex: {e}");
    never_matching_regex()
  })
});

/// Reorderer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
  /// Lines are written straight to the output.
  Passthrough,
  /// Inside a listing section; term blocks are buffered.
  Listing,
}

/// Buffers the blocks of a listing section and emits them sorted by term.
#[derive(Debug)]
pub struct SectionReorderer {
  state:   SectionState,
  entries: BTreeMap<String, String>,
  open:    Option<String>,
}

impl Default for SectionReorderer {
  fn default() -> Self {
    Self::new()
  }
}

impl SectionReorderer {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state:   SectionState::Passthrough,
      entries: BTreeMap::new(),
      open:    None,
    }
  }

  #[must_use]
  pub const fn state(&self) -> SectionState {
    self.state
  }

  /// Process one body line, appending whatever is ready to `out`.
  pub fn push(&mut self, line: &str, out: &mut String) {
    if self.state == SectionState::Listing && ANCHOR_HEADING.is_match(line) {
      self.flush(out);
    }

    if LISTING_MARKER.is_match(line) {
      self.flush(out);
      debug!("Listing section starts at: {line}");
      self.state = SectionState::Listing;
      push_line(out, line);
      return;
    }

    if self.state == SectionState::Passthrough {
      push_line(out, line);
      return;
    }

    if let Some(term) = term_of(line) {
      // A repeated term replaces the earlier block.
      let mut block = String::new();
      push_line(&mut block, line);
      self.entries.insert(term.clone(), block);
      self.open = Some(term);
      return;
    }

    match self.open.as_ref().and_then(|term| self.entries.get_mut(term)) {
      Some(block) => push_line(block, line),
      None => push_line(out, line),
    }
  }

  /// Flush a section left open at the end of input.
  pub fn finish(&mut self, out: &mut String) {
    self.flush(out);
  }

  fn flush(&mut self, out: &mut String) {
    if self.state == SectionState::Listing {
      debug!("Listing section closes with {} entries", self.entries.len());
    }
    for block in std::mem::take(&mut self.entries).into_values() {
      out.push_str(&block);
    }
    self.open = None;
    self.state = SectionState::Passthrough;
  }
}

fn term_of(line: &str) -> Option<String> {
  let caps = TERM.captures(line)?;
  caps
    .get(1)
    .or_else(|| caps.get(2))
    .map(|m| m.as_str().trim().to_string())
}

fn push_line(buf: &mut String, line: &str) {
  buf.push_str(line);
  buf.push('\n');
}
