//! Collation entry point
//!
//! [`Collator`] ties the canonicalizer and the key builder together over one
//! set of shared tables and orders whole word lists. Every ordering it
//! produces is stable: words with equal keys keep their input order.

use crate::canonical::Canonicalizer;
use crate::key::{KeyBuilder, SortKey};
use crate::tables::CollationTables;
use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Word count at which [`Collator::collate_auto`] switches to parallel key
/// computation
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Collator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollatorConfig {
    /// Minimum number of words for the parallel path
    pub parallel_threshold: usize,
}

impl Default for CollatorConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Canonical form and key of one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub canonical: String,
    pub key: SortKey,
}

/// Orders pointed Hebrew words consonants first, vowels second
#[derive(Debug, Clone)]
pub struct Collator {
    tables: Arc<CollationTables>,
    canonicalizer: Canonicalizer,
    key_builder: KeyBuilder,
    config: CollatorConfig,
}

impl Collator {
    /// Create a collator over the process-wide tables
    pub fn new() -> Self {
        Self::with_tables(CollationTables::shared())
    }

    /// Create a collator over the given tables
    pub fn with_tables(tables: Arc<CollationTables>) -> Self {
        Self {
            canonicalizer: Canonicalizer::new(tables.clone()),
            key_builder: KeyBuilder::new(tables.clone()),
            tables,
            config: CollatorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: CollatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CollatorConfig {
        &self.config
    }

    pub fn tables(&self) -> &Arc<CollationTables> {
        &self.tables
    }

    /// Canonical form of `word`
    pub fn canonicalize(&self, word: &str) -> String {
        self.canonicalizer.canonicalize(word)
    }

    /// Collation key of `word`, canonicalizing it first
    pub fn sort_key(&self, word: &str) -> SortKey {
        let canonical = self.canonicalizer.canonical_chars(word);
        self.key_builder.build_from_chars(canonical)
    }

    /// Canonical form and key in one go
    pub fn analyze(&self, word: &str) -> Analysis {
        let canonical = self.canonicalizer.canonicalize(word);
        let key = self.key_builder.build(&canonical);
        Analysis { canonical, key }
    }

    /// Total order over words
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Sort `words` in ascending collation order.
    ///
    /// Each key is computed once. Duplicates are kept and end up adjacent.
    pub fn collate<S: AsRef<str>>(&self, words: Vec<S>) -> Vec<S> {
        log::debug!("collating {} words sequentially", words.len());
        let keys = words.iter().map(|w| self.sort_key(w.as_ref())).collect();
        order_by_keys(words, keys)
    }

    /// Like [`Collator::collate`], computing keys on the rayon pool
    #[cfg(feature = "parallel")]
    pub fn collate_parallel<S>(&self, words: Vec<S>) -> Vec<S>
    where
        S: AsRef<str> + Send + Sync,
    {
        log::debug!("collating {} words in parallel", words.len());
        let keys: Vec<SortKey> = words.par_iter().map(|w| self.sort_key(w.as_ref())).collect();

        let mut decorated: Vec<(SortKey, S)> = keys.into_iter().zip(words).collect();
        // par_sort_by is a stable merge sort
        decorated.par_sort_by(|a, b| a.0.cmp(&b.0));
        decorated.into_iter().map(|(_, word)| word).collect()
    }

    /// Fallback to sequential if the parallel feature is disabled
    #[cfg(not(feature = "parallel"))]
    pub fn collate_parallel<S>(&self, words: Vec<S>) -> Vec<S>
    where
        S: AsRef<str> + Send + Sync,
    {
        self.collate(words)
    }

    /// Pick the sequential or parallel path by input size
    pub fn collate_auto<S>(&self, words: Vec<S>) -> Vec<S>
    where
        S: AsRef<str> + Send + Sync,
    {
        if words.len() >= self.config.parallel_threshold {
            self.collate_parallel(words)
        } else {
            self.collate(words)
        }
    }

    /// Stable in-place sort
    pub fn sort_in_place<S: AsRef<str>>(&self, words: &mut [S]) {
        words.sort_by_cached_key(|w| self.sort_key(w.as_ref()));
    }
}

impl Default for Collator {
    fn default() -> Self {
        Self::new()
    }
}

fn order_by_keys<S>(words: Vec<S>, keys: Vec<SortKey>) -> Vec<S> {
    let mut decorated: Vec<(SortKey, S)> = keys.into_iter().zip(words).collect();
    // sort_by is stable; ties keep input order
    decorated.sort_by(|a, b| a.0.cmp(&b.0));
    decorated.into_iter().map(|(_, word)| word).collect()
}

fn default_collator() -> &'static Collator {
    static DEFAULT: OnceLock<Collator> = OnceLock::new();
    DEFAULT.get_or_init(Collator::new)
}

/// Canonical form of `word` using the shared tables
pub fn canonicalize(word: &str) -> String {
    default_collator().canonicalize(word)
}

/// Sort key of `word` using the shared tables
pub fn sort_key(word: &str) -> SortKey {
    default_collator().sort_key(word)
}

/// Stable collation of `words` using the shared tables
pub fn collate<S: AsRef<str>>(words: Vec<S>) -> Vec<S> {
    default_collator().collate(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_scenario() {
        let words = vec!["שָׁלוֹם", "שָׂדֶה", "אבא", "אִמָּא"];
        let sorted = Collator::new().collate(words);
        assert_eq!(sorted, vec!["אבא", "אִמָּא", "שָׂדֶה", "שָׁלוֹם"]);
    }

    #[test]
    fn test_compare() {
        let collator = Collator::new();
        assert_eq!(collator.compare("אבא", "אִמָּא"), Ordering::Less);
        assert_eq!(collator.compare("שָׁלוֹם", "שָׂדֶה"), Ordering::Greater);
        assert_eq!(collator.compare("אב", "אָב"), Ordering::Less);
        // Different spellings of the same word compare equal
        assert_eq!(
            collator.compare("\u{FB2B}\u{05B8}", "\u{05E9}\u{05B8}\u{05C2}"),
            Ordering::Equal
        );
    }

    #[test]
    fn test_stable_for_equal_keys() {
        // Same key: the accent and the latin letter are ignored
        let words = vec!["בּ֣", "אב", "בּ", "בּx"];
        let sorted = Collator::new().collate(words);
        assert_eq!(sorted, vec!["אב", "בּ֣", "בּ", "בּx"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let words = vec!["גד", "אב", "גד", "אב"];
        assert_eq!(collate(words), vec!["אב", "אב", "גד", "גד"]);
    }

    #[test]
    fn test_empty_word_sorts_first() {
        let words = vec!["אב".to_string(), String::new(), "א".to_string()];
        assert_eq!(collate(words), vec!["", "א", "אב"]);
    }

    #[test]
    fn test_paths_agree() {
        let words: Vec<String> = ["שָׁלוֹם", "שָׂדֶה", "אבא", "אִמָּא", "עָוֹן", "אָב", "אב"]
            .iter()
            .cycle()
            .take(70)
            .map(|w| w.to_string())
            .collect();

        let collator = Collator::new().with_config(CollatorConfig {
            parallel_threshold: 1,
        });
        let sequential = collator.collate(words.clone());
        assert_eq!(collator.collate_parallel(words.clone()), sequential);
        assert_eq!(collator.collate_auto(words.clone()), sequential);

        let mut in_place = words;
        collator.sort_in_place(&mut in_place);
        assert_eq!(in_place, sequential);
    }

    #[test]
    fn test_analyze_matches_parts() {
        let collator = Collator::new();
        let analysis = collator.analyze("שָׁלוֹם");
        assert_eq!(analysis.canonical, collator.canonicalize("שָׁלוֹם"));
        assert_eq!(analysis.key, collator.sort_key("שָׁלוֹם"));
        assert_eq!(analysis.key, sort_key("שָׁלוֹם"));
        assert_eq!(analysis.canonical, canonicalize("שָׁלוֹם"));
    }
}
