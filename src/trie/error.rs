use thiserror::Error;

use super::letter::MAX_WORD_LEN;

/// Errors reported by trie operations.
///
/// Input validation failures (`InvalidLetter`, `WordTooLong`, `EmptyWord`,
/// `PatternLength`) are detected before the trie is modified, so a failed
/// operation never leaves a partially extended path behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrieError {
    /// A word, prefix, or letter set contained a character outside `'a'..='z'`.
    #[error("character {0:?} is outside the 'a'..='z' alphabet")]
    InvalidLetter(char),

    /// A word or prefix exceeded [`MAX_WORD_LEN`].
    #[error("word length {0} exceeds the maximum of {MAX_WORD_LEN}")]
    WordTooLong(usize),

    /// An empty word was passed to an operation that requires at least one letter.
    #[error("word is empty")]
    EmptyWord,

    /// The word to remove is not a path in the trie.
    #[error("word is not stored in the trie")]
    WordNotFound,

    /// No stored word starts with the requested prefix.
    #[error("no stored word starts with the given prefix")]
    PrefixNotFound,

    /// A pattern's length was zero or exceeded [`MAX_WORD_LEN`].
    #[error("pattern length {0} is outside the supported range 1..={MAX_WORD_LEN}")]
    PatternLength(usize),
}
