//! Canonicalization of pointed Hebrew words
//!
//! Raw input can spell the same word in several ways: composed or decomposed
//! marks, a sin dot separated from its letter by vowels, a Holem-Vav written
//! as a vav plus a holem on either side. The [`Canonicalizer`] maps all of
//! them onto one sequence:
//!
//! 1. canonical decomposition, dropping every character without a role in
//!    collation,
//! 2. Sin/Shin resolution ([`resolve_sin_shin`]),
//! 3. Holem-Vav/Shureq resolution ([`resolve_vav`]).
//!
//! Each stage is a single forward pass over an immutable buffer that emits
//! into a fresh one. Canonicalizing an already canonical word returns it
//! unchanged.

mod sin_shin;
mod vav;

pub use sin_shin::{resolve_sin_shin, SIN_DOT_WINDOW};
pub use vav::resolve_vav;

use crate::tables::CollationTables;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Turns arbitrary text into the canonical form the key builder expects
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    tables: Arc<CollationTables>,
}

impl Canonicalizer {
    /// Create a canonicalizer over shared tables
    pub fn new(tables: Arc<CollationTables>) -> Self {
        Self { tables }
    }

    /// Canonicalize a word. Total over all strings; unknown characters are
    /// silently dropped.
    pub fn canonicalize(&self, word: &str) -> String {
        self.canonical_chars(word).into_iter().collect()
    }

    /// Same as [`Canonicalizer::canonicalize`], without collecting into a
    /// `String`
    pub fn canonical_chars(&self, word: &str) -> Vec<char> {
        let decomposed = self.decompose(word);
        let sin_shin = resolve_sin_shin(&self.tables, &decomposed);
        resolve_vav(&self.tables, &sin_shin)
    }

    /// Stage 1: decompose and keep only the characters collation cares about.
    ///
    /// Filtering can splice two combining sequences together (a dropped base
    /// character between them), so the survivors are put back into canonical
    /// order.
    pub fn decompose(&self, word: &str) -> Vec<char> {
        word.nfd()
            .filter(|&ch| self.tables.is_relevant(ch))
            .nfd()
            .collect()
    }

    /// Tables this canonicalizer reads from
    pub fn tables(&self) -> &Arc<CollationTables> {
        &self.tables
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(CollationTables::shared())
    }
}
