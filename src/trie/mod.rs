/// Bulk construction from word iterators and dictionary files.
pub mod builder;
/// Prefix- and pattern-constrained word enumeration.
mod enumerate;
/// Error taxonomy for trie operations.
pub mod error;
/// The validated alphabet: letters, bounds, and word conversion.
pub mod letter;
/// The core trie node and its path operations.
pub mod node;
/// Letter sets and per-position pattern classes.
pub mod pattern;
/// The word list accumulator that owns enumerated words.
pub mod words;

pub use builder::{build_trie, build_trie_from_file, LoadError};
pub use error::TrieError;
pub use letter::{IntoWord, Letter, ALPHABET_LEN, MAX_WORD_LEN};
pub use node::{ChildIter, TrieNode};
pub use pattern::{LetterClass, LetterSet, WordPattern};
pub use words::{WordEntry, WordList};
