//! Collation of pointed Hebrew, consonants first and vowels second
//!
//! Words written with niqqud are sorted by their consonant skeleton; the
//! vowels only break ties. Sin and Shin count as two letters (Sin first), and
//! vowels follow one fixed phonological order:
//!
//! Sheva, Hataf Segol, Hataf Patah, Hataf Qamets, Hiriq, Tsere, Segol, Patah,
//! Qamets, Holem, Holem-Vav, Qibbuts, Shureq.
//!
//! # Architecture
//!
//! - [`tables`]: the `ConsonantOrder` and `FullOrder` rank tables, built once
//!   and shared read-only
//! - [`canonical`]: maps every spelling of a word onto one canonical
//!   character sequence
//! - [`key`]: turns a canonical word into a two-tier [`SortKey`]
//! - [`collator`]: the entry point that orders whole word lists
//!
//! # Example
//!
//! ```rust
//! use ivsort_core::Collator;
//!
//! let collator = Collator::new();
//! let sorted = collator.collate(vec!["שָׁלוֹם", "שָׂדֶה", "אבא", "אִמָּא"]);
//!
//! assert_eq!(sorted, vec!["אבא", "אִמָּא", "שָׂדֶה", "שָׁלוֹם"]);
//! ```

pub mod canonical;
pub mod collator;
pub mod glyphs;
pub mod key;
pub mod tables;

pub use canonical::Canonicalizer;
pub use collator::{
    canonicalize, collate, sort_key, Analysis, Collator, CollatorConfig,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use key::{KeyBuilder, RankSeq, SortKey};
pub use tables::{CharClass, CollationTables, Rank, SEPARATOR_RANK, VOWEL_RANK_BASE};
