//! Character class and rank tables
//!
//! Both orderings are derived once from the literal lists in
//! [`crate::glyphs`] and never change afterwards. Lookup is allocation-free:
//! the Hebrew block goes through a dense array, the handful of characters
//! outside it (space and the presentation forms) through a small map.

use crate::glyphs;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Position of a symbol in a collation tier
pub type Rank = u8;

/// Rank shared by space and maqaf, lower than every letter
pub const SEPARATOR_RANK: Rank = 0;

/// First vowel rank. Keeps vowel ranks disjoint from consonant ranks.
pub const VOWEL_RANK_BASE: Rank = 100;

const HEBREW_BLOCK_START: u32 = 0x0590;
const HEBREW_BLOCK_LEN: usize = 0x70;

/// What a character means to the canonicalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharClass {
    /// Dropped before any resolution happens
    #[default]
    Irrelevant,
    /// Space or maqaf
    Separator,
    /// A letter with a consonant rank
    Consonant,
    /// The undotted Shin/Sin base letter, resolved during canonicalization
    ShinBase,
    /// A ranked vowel point, including the composed Holem-Vav and Shureq
    Vowel,
    /// Dagesh or mapiq
    Dagesh,
    /// The combining sin dot
    SinDot,
}

#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    class: CharClass,
    consonant: Option<Rank>,
    full: Option<Rank>,
}

/// The `ConsonantOrder` and `FullOrder` tables plus character classes
#[derive(Debug, Clone)]
pub struct CollationTables {
    /// Entries for U+0590..U+05FF
    block: [Entry; HEBREW_BLOCK_LEN],
    /// Entries outside the Hebrew block (rare)
    extra: HashMap<char, Entry>,
}

impl CollationTables {
    /// Build the tables from the glyph lists
    pub fn new() -> Self {
        let mut tables = Self {
            block: [Entry::default(); HEBREW_BLOCK_LEN],
            extra: HashMap::new(),
        };

        for sep in glyphs::SEPARATORS {
            tables.insert(sep, Entry {
                class: CharClass::Separator,
                consonant: Some(SEPARATOR_RANK),
                full: Some(SEPARATOR_RANK),
            });
        }

        for (i, &cons) in glyphs::CONSONANTS.iter().enumerate() {
            let rank = SEPARATOR_RANK + 1 + i as Rank;
            tables.insert(cons, Entry {
                class: CharClass::Consonant,
                consonant: Some(rank),
                full: Some(rank),
            });
        }

        for (i, &vowel) in glyphs::VOWELS.iter().enumerate() {
            tables.insert(vowel, Entry {
                class: CharClass::Vowel,
                consonant: None,
                full: Some(VOWEL_RANK_BASE + i as Rank),
            });
        }

        tables.insert(glyphs::SHIN_BASE, Entry {
            class: CharClass::ShinBase,
            ..Entry::default()
        });
        tables.insert(glyphs::DAGESH, Entry {
            class: CharClass::Dagesh,
            ..Entry::default()
        });
        tables.insert(glyphs::SIN_DOT, Entry {
            class: CharClass::SinDot,
            ..Entry::default()
        });

        tables
    }

    /// Process-wide tables, built on first use
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<CollationTables>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::new())).clone()
    }

    fn insert(&mut self, ch: char, entry: Entry) {
        match Self::block_index(ch) {
            Some(idx) => self.block[idx] = entry,
            None => {
                self.extra.insert(ch, entry);
            }
        }
    }

    #[inline]
    fn block_index(ch: char) -> Option<usize> {
        (ch as u32)
            .checked_sub(HEBREW_BLOCK_START)
            .map(|offset| offset as usize)
            .filter(|&offset| offset < HEBREW_BLOCK_LEN)
    }

    #[inline]
    fn entry(&self, ch: char) -> Entry {
        match Self::block_index(ch) {
            // Fast path: direct array lookup
            Some(idx) => self.block[idx],
            None => self.extra.get(&ch).copied().unwrap_or_default(),
        }
    }

    /// Class of `ch` as seen by the canonicalizer
    #[inline]
    pub fn class(&self, ch: char) -> CharClass {
        self.entry(ch).class
    }

    /// Rank in the consonant tier (`ConsonantOrder`)
    #[inline]
    pub fn consonant_rank(&self, ch: char) -> Option<Rank> {
        self.entry(ch).consonant
    }

    /// Rank in the consonant+vowel tier (`FullOrder`)
    #[inline]
    pub fn full_rank(&self, ch: char) -> Option<Rank> {
        self.entry(ch).full
    }

    /// Whether `ch` survives the filtering step of canonicalization
    #[inline]
    pub fn is_relevant(&self, ch: char) -> bool {
        self.class(ch) != CharClass::Irrelevant
    }

    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.class(ch) == CharClass::Vowel
    }

    #[inline]
    pub fn is_vowel_or_dagesh(&self, ch: char) -> bool {
        matches!(self.class(ch), CharClass::Vowel | CharClass::Dagesh)
    }
}

impl Default for CollationTables {
    fn default() -> Self {
        Self::new()
    }
}
