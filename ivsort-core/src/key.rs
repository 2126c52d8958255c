//! Two-tier sort keys
//!
//! A key holds the consonant skeleton of a word and, as a tie-breaker, the
//! consonants and vowels together. Comparison is lexicographic on the first
//! tier, then on the second.

use crate::tables::{CollationTables, Rank};
use smallvec::SmallVec;
use std::sync::Arc;

/// Rank sequence with inline storage for typical word lengths
pub type RankSeq = SmallVec<[Rank; 16]>;

/// Comparable collation key of a single word
///
/// Field order matters: the derived `Ord` compares `consonants` first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey {
    /// Ranks from `ConsonantOrder`, separators included
    pub consonants: RankSeq,
    /// Ranks from `FullOrder`: consonants, vowels and separators in text order
    pub full: RankSeq,
}

impl SortKey {
    /// Both tiers as plain slices
    pub fn tiers(&self) -> (&[Rank], &[Rank]) {
        (&self.consonants, &self.full)
    }

    /// Whether no character of the word carried a rank
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}

/// Builds [`SortKey`]s from canonical words
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    tables: Arc<CollationTables>,
}

impl KeyBuilder {
    pub fn new(tables: Arc<CollationTables>) -> Self {
        Self { tables }
    }

    /// Build the key of a canonical word. Characters missing from both
    /// tables contribute nothing.
    pub fn build(&self, canonical: &str) -> SortKey {
        self.build_from_chars(canonical.chars())
    }

    pub fn build_from_chars<I>(&self, canonical: I) -> SortKey
    where
        I: IntoIterator<Item = char>,
    {
        let mut key = SortKey::default();

        for ch in canonical {
            if let Some(rank) = self.tables.consonant_rank(ch) {
                key.consonants.push(rank);
            }
            if let Some(rank) = self.tables.full_rank(ch) {
                key.full.push(rank);
            }
        }

        key
    }
}

impl Default for KeyBuilder {
    fn default() -> Self {
        Self::new(CollationTables::shared())
    }
}
