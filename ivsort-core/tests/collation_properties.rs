//! Property-based tests for the collation invariants.
//!
//! 1. **Idempotence**: canonicalize(canonicalize(w)) == canonicalize(w)
//! 2. **Tier lengths**: the full tier is never shorter than the consonant tier
//! 3. **Tier dominance**: differing consonant tiers decide the comparison
//! 4. **Stability**: words with equal keys keep their input order
//! 5. **Separator semantics**: a space ranks 0 in both tiers
//! 6. **Path agreement**: sequential and parallel collation agree

use ivsort_core::{canonicalize, sort_key, Collator, CollatorConfig};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Characters that exercise every resolution rule, plus noise that must be
/// dropped
fn pool() -> Vec<char> {
    let mut chars: Vec<char> = ('\u{05B0}'..='\u{05C2}').collect();
    chars.extend('\u{05D0}'..='\u{05EA}');
    chars.extend(['\u{FB2A}', '\u{FB2B}', '\u{FB2C}', '\u{FB35}', '\u{FB4B}']);
    chars.extend(['\u{0591}', '\u{05A3}', ' ', 'a', '-']);
    // Weight the ambiguous characters so their combinations come up often
    for _ in 0..4 {
        chars.extend(['\u{05D5}', '\u{05B9}', '\u{05BC}', '\u{05E9}', '\u{05C2}']);
    }
    chars
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(pool()), 0..16)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn canonicalize_is_idempotent(word in arb_word()) {
        let once = canonicalize(&word);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn canonicalize_is_idempotent_on_any_text(word in any::<String>()) {
        let once = canonicalize(&word);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn key_unchanged_by_canonicalization(word in arb_word()) {
        prop_assert_eq!(sort_key(&canonicalize(&word)), sort_key(&word));
    }

    #[test]
    fn full_tier_never_shorter(word in arb_word()) {
        let key = sort_key(&word);
        prop_assert!(key.full.len() >= key.consonants.len());
    }

    #[test]
    fn consonant_tier_dominates(a in arb_word(), b in arb_word()) {
        let (ka, kb) = (sort_key(&a), sort_key(&b));
        if ka.consonants != kb.consonants {
            prop_assert_eq!(ka.cmp(&kb), ka.consonants.cmp(&kb.consonants));
        }
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_word(), b in arb_word()) {
        let collator = Collator::new();
        prop_assert_eq!(collator.compare(&a, &b), collator.compare(&b, &a).reverse());
    }

    #[test]
    fn space_ranks_zero_in_both_tiers(a in arb_word(), b in arb_word()) {
        let left = sort_key(&a.replace(' ', ""));
        let right = sort_key(&b.replace(' ', ""));
        let joined = sort_key(&format!("{} {}", a.replace(' ', ""), b.replace(' ', "")));

        let mut consonants = left.consonants.to_vec();
        consonants.push(0);
        consonants.extend_from_slice(&right.consonants);
        prop_assert_eq!(joined.consonants.to_vec(), consonants);

        let mut full = left.full.to_vec();
        full.push(0);
        full.extend_from_slice(&right.full);
        prop_assert_eq!(joined.full.to_vec(), full);
    }

    #[test]
    fn collate_is_sorted_and_stable(words in arb_words()) {
        let collator = Collator::new();
        let indexed: Vec<(usize, String)> = words.into_iter().enumerate().collect();
        let sorted = collator.collate(indexed.iter().map(|(_, w)| w.as_str()).collect());

        // Same multiset, ascending keys
        prop_assert_eq!(sorted.len(), indexed.len());
        for pair in sorted.windows(2) {
            prop_assert_ne!(collator.compare(pair[0], pair[1]), Ordering::Greater);
        }

        // Stable against a reference sort over (key, index)
        let mut reference = indexed.clone();
        reference.sort_by_key(|(i, w)| (sort_key(w), *i));
        let expected: Vec<&str> = reference.iter().map(|(_, w)| w.as_str()).collect();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn parallel_matches_sequential(words in arb_words()) {
        let collator = Collator::new().with_config(CollatorConfig { parallel_threshold: 0 });
        let sequential = collator.collate(words.clone());
        prop_assert_eq!(collator.collate_parallel(words.clone()), sequential.clone());
        prop_assert_eq!(collator.collate_auto(words), sequential);
    }
}
