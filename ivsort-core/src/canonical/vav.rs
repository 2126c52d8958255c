//! Holem-Vav and Shureq resolution
//!
//! A vav next to a holem, or carrying a dagesh, is either a vowel letter
//! (Holem-Vav, Shureq) or a consonantal vav that happens to carry a mark.
//! Pairs are merged into the composed vowel unless their neighbourhood says
//! the vav is consonantal.

use crate::glyphs::{DAGESH, HOLEM, HOLEM_VAV, SHUREQ, VAV};
use crate::tables::CollationTables;

/// Adjacent pairs that may stand for a composed vowel
const PAIRS: [([char; 2], char); 3] = [
    ([HOLEM, VAV], HOLEM_VAV),
    ([VAV, HOLEM], HOLEM_VAV),
    ([VAV, DAGESH], SHUREQ),
];

/// Composed vowel for a candidate pair starting at `pos`
#[inline]
fn pair_at(input: &[char], pos: usize) -> Option<char> {
    let pair = input.get(pos..pos + 2)?;
    PAIRS
        .iter()
        .find(|(pattern, _)| pattern == pair)
        .map(|&(_, composed)| composed)
}

/// Merge vav pairs in one left-to-right pass.
///
/// A pair stays apart when the character before it (as already resolved) is
/// a vowel, or when the character right after it resolves to a vowel or
/// dagesh. A following pair that itself merges counts as a vowel there; that
/// look-ahead is computed right-to-left up front so each word is scanned a
/// fixed number of times.
pub fn resolve_vav(tables: &CollationTables, input: &[char]) -> Vec<char> {
    let merges_ahead = lookahead(tables, input);
    let mut out = Vec::with_capacity(input.len());
    let mut cursor = 0;

    while let Some(&ch) = input.get(cursor) {
        if let Some(composed) = pair_at(input, cursor) {
            let after_vowel = out.last().is_some_and(|&prev| tables.is_vowel(prev));
            let before_mark = input
                .get(cursor + 2)
                .is_some_and(|&next| tables.is_vowel_or_dagesh(next))
                || merges_ahead[cursor + 2];

            if !(after_vowel || before_mark) {
                out.push(composed);
                cursor += 2;
                continue;
            }
            log::trace!("vav pair at {cursor} kept apart");
        }

        out.push(ch);
        cursor += 1;
    }

    out
}

/// `merges[i]` holds whether a pair starting at `i` would merge when the
/// character before it is left unmerged. Padded by two so `i + 2` is always
/// in bounds.
fn lookahead(tables: &CollationTables, input: &[char]) -> Vec<bool> {
    let mut merges = vec![false; input.len() + 2];

    for pos in (0..input.len()).rev() {
        if pair_at(input, pos).is_none() {
            continue;
        }
        let after_vowel = pos
            .checked_sub(1)
            .is_some_and(|prev| tables.is_vowel(input[prev]));
        let before_mark = input
            .get(pos + 2)
            .is_some_and(|&next| tables.is_vowel_or_dagesh(next))
            || merges[pos + 2];

        merges[pos] = !(after_vowel || before_mark);
    }

    merges
}
