//! Sort a few pointed words and show how each key is built
//!
//! Run with `cargo run --example sort_words`

use ivsort_core::Collator;

fn main() {
    let collator = Collator::new();

    let words = vec!["שָׁלוֹם", "שָׂדֶה", "אבא", "אִמָּא", "כָּל־הָעָם", "אָב", "אַב"];
    println!("Input:  {words:?}");

    let sorted = collator.collate(words);
    println!("Sorted: {sorted:?}\n");

    for word in &sorted {
        let analysis = collator.analyze(word);
        let (consonants, full) = analysis.key.tiers();
        println!("{word:<12} consonants={consonants:?} full={full:?}");
    }
}
