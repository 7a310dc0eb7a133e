//! # libtrie
//!
//! A small, predictable [trie](https://en.wikipedia.org/wiki/Trie) (prefix
//! tree) library over the lowercase Latin alphabet `'a'..='z'`.
//!
//! Each node carries a fixed array of 26 optional children, one slot per
//! letter, so edge lookup is a constant-time index. Paths from the root spell
//! prefixes; leaf-marked nodes denote complete stored words.
//!
//! ## Features
//!
//! - **Validated input**: out-of-alphabet characters are rejected up front via
//!   the [`Letter`](trie::Letter) newtype — no silent misindexing
//! - **Sorted enumeration**: word collection walks children in ascending
//!   letter order, so output is always lexicographically sorted
//! - **Pattern filtering**: enumeration can be constrained by a per-position
//!   character class ([`WordPattern`](trie::WordPattern)), inclusion or
//!   exclusion sets over a 26-bit [`LetterSet`](trie::LetterSet) mask
//! - **Owned results**: matches are accumulated into a
//!   [`WordList`](trie::WordList) that owns its entries and hands them back
//!   to the caller
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::TrieNode;
//!
//! let mut root = TrieNode::new();
//! root.insert("mama").unwrap();
//! root.insert("mata").unwrap();
//! root.insert("tata").unwrap();
//!
//! assert!(root.contains("mata"));
//! assert!(!root.contains("mat")); // internal node, not a stored word
//!
//! let matches = root.words_with_prefix("ma").unwrap();
//! let words: Vec<&str> = matches.iter().collect();
//! assert_eq!(words, ["mama", "mata"]);
//! ```
//!
//! Enumeration can also be filtered by a fixed-length letter pattern:
//!
//! ```
//! use libtrie::trie::{build_trie, LetterClass, LetterSet, WordPattern};
//!
//! let root = build_trie(["abc", "abd", "axc"]).unwrap();
//!
//! let pattern = WordPattern::new(vec![
//!     LetterClass::InSet(LetterSet::from_letters("a").unwrap()),
//!     LetterClass::NotInSet(LetterSet::from_letters("x").unwrap()),
//!     LetterClass::InSet(LetterSet::ALL),
//! ])
//! .unwrap();
//!
//! let matches = root.words_matching(&pattern);
//! let words: Vec<&str> = matches.iter().collect();
//! assert_eq!(words, ["abc", "abd"]);
//! ```

#![warn(missing_docs)]

/// Core trie data structure: nodes, patterns, word lists, and construction.
pub mod trie;
