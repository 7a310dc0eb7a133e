use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::error::TrieError;
use super::letter::IntoWord;
use super::node::TrieNode;

/// Errors that can occur when building a trie from a dictionary file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the dictionary file failed.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// A dictionary line was not a valid word.
    #[error(transparent)]
    Word(#[from] TrieError),
}

/// Builds a trie from an iterator of words.
///
/// Each word must implement [`IntoWord`], so `&str`, `String`, and letter
/// sequences are all accepted. Insertion order does not matter — the
/// resulting trie (and its enumeration order) depends only on the word set.
///
/// # Examples
///
/// ```
/// use libtrie::trie::build_trie;
///
/// let root = build_trie(["mama", "mata", "tata"]).unwrap();
/// assert!(root.contains("mata"));
/// ```
///
/// # Errors
///
/// Returns the first [`TrieError`] hit while inserting; the partially
/// built root is dropped, so the caller never observes it.
pub fn build_trie<W: IntoWord>(
    words: impl IntoIterator<Item = W>,
) -> Result<TrieNode, TrieError> {
    let mut root = TrieNode::new();
    for word in words {
        root.insert(word)?;
    }
    Ok(root)
}

/// Builds a trie from a dictionary file.
///
/// Reads words from a text file, one word per line. Lines starting with
/// `'#'` are treated as comments and ignored; empty lines are skipped.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::build_trie_from_file;
///
/// let root = build_trie_from_file("dictionary.txt").unwrap();
/// ```
pub fn build_trie_from_file(path: impl AsRef<Path>) -> Result<TrieNode, LoadError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut root = TrieNode::new();

    // Instead of BufReader::lines() we call read_line repeatedly, which
    // allows us to reuse the same string instead of allocating a new one
    // for every line.
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            root.insert(word)?;
        }
        buf.clear();
    }
    Ok(root)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_from_word_iterator() {
        let root = build_trie(["tata", "mama", "mata"]).unwrap();
        assert!(root.contains("mama"));
        assert!(root.contains("mata"));
        assert!(root.contains("tata"));
        assert!(!root.contains("ma"));
    }

    #[test]
    fn propagates_invalid_words() {
        let res = build_trie(["mama", "Tata"]);
        assert_eq!(res.unwrap_err(), TrieError::InvalidLetter('T'));
    }

    #[test]
    fn builds_from_dictionary_file() {
        let path = std::env::temp_dir().join("libtrie_build_from_file.txt");
        std::fs::write(&path, "# dictionary\nmama\n\n  # indented comment\nmata\ntata\n")
            .unwrap();

        let root = build_trie_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let list = root.words();
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, ["mama", "mata", "tata"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = build_trie_from_file("/nonexistent/libtrie-dict.txt");
        assert!(matches!(res, Err(LoadError::Io(_))));
    }

    #[test]
    fn invalid_dictionary_word_is_reported() {
        let path = std::env::temp_dir().join("libtrie_invalid_word.txt");
        std::fs::write(&path, "mama\nTata\n").unwrap();

        let res = build_trie_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            res,
            Err(LoadError::Word(TrieError::InvalidLetter('T')))
        ));
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("reverberate"));
        assert!(!is_comment(" reverberate"));
    }
}
