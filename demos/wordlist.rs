//! Example: exploring a word trie.
//!
//! Builds a small trie and shows the main query surface: word lookup,
//! longest-prefix computation, prefix-constrained enumeration, and
//! pattern-constrained enumeration.
//!
//! Run with: cargo run --example wordlist

use libtrie::trie::{build_trie, LetterClass, LetterSet, WordPattern};

fn main() {
    let words = ["hei", "hello", "helloa", "mama", "mata", "tata"];
    let mut root = build_trie(words).unwrap();

    // Word lookup
    println!("Word lookup:");
    for word in ["hello", "hei", "mat", "mata", "razboi"] {
        println!(
            "  {word}: {}",
            if root.contains(word) { "found" } else { "not found" }
        );
    }

    // Longest prefix before the deepest branch
    println!("\nLongest prefix:");
    for word in ["hello", "tata", "razboi"] {
        println!("  {word}: {:?}", root.longest_prefix(word));
    }

    // Prefix enumeration
    println!("\nWords starting with \"ma\":");
    for word in root.words_with_prefix("ma").unwrap().iter() {
        println!("  {word}");
    }

    // Pattern enumeration: four letters, second one 'a', third anything but 't'
    let pattern = WordPattern::new(vec![
        LetterClass::InSet(LetterSet::ALL),
        LetterClass::InSet(LetterSet::from_letters("a").unwrap()),
        LetterClass::NotInSet(LetterSet::from_letters("t").unwrap()),
        LetterClass::InSet(LetterSet::ALL),
    ])
    .unwrap();
    println!("\nWords matching ?a[^t]?:");
    for word in root.words_matching(&pattern).iter() {
        println!("  {word}");
    }

    // Crude removal prunes the whole unbranched chain below a branch point.
    root.remove("hello").unwrap();
    println!("\nAfter removing \"hello\": {:?}", root.words());
}
