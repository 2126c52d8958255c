//! Sin/Shin resolution
//!
//! The undotted base letter is resolved into one of the two presentation
//! forms by looking at a short trailing window. After canonical decomposition
//! the sin dot sorts behind vowels and dagesh, so it can sit up to two marks
//! away from its letter.

use crate::glyphs::{SHIN, SHIN_BASE, SIN, SIN_DOT};
use crate::tables::CollationTables;

/// Vowel/dagesh marks allowed between the base letter and its sin dot
pub const SIN_DOT_WINDOW: usize = 2;

/// Rewrite every undotted base letter as composed Sin or Shin.
///
/// Sin takes over the sin dot that selected it. Everything else is copied
/// through untouched, including sin dots that belong to no base letter.
pub fn resolve_sin_shin(tables: &CollationTables, input: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    let mut cursor = 0;

    while let Some(&ch) = input.get(cursor) {
        cursor += 1;

        if ch != SHIN_BASE {
            out.push(ch);
            continue;
        }

        let marks = input[cursor..]
            .iter()
            .take(SIN_DOT_WINDOW)
            .take_while(|&&c| tables.is_vowel_or_dagesh(c))
            .count();

        if input.get(cursor + marks) == Some(&SIN_DOT) {
            log::trace!("sin dot found {marks} mark(s) after base letter");
            out.push(SIN);
            out.extend_from_slice(&input[cursor..cursor + marks]);
            cursor += marks + 1;
        } else {
            out.push(SHIN);
        }
    }

    out
}
