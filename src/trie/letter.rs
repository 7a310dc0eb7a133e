use std::fmt;

use smallvec::SmallVec;

use super::error::TrieError;

/// Number of letters in the supported alphabet (`'a'..='z'`).
pub const ALPHABET_LEN: usize = 26;

/// Maximum supported word, prefix, and pattern length.
///
/// This bounds the depth of every trie walk, so recursion depth (and the
/// word buffer threaded through enumeration) stays small and predictable.
pub const MAX_WORD_LEN: usize = 128;

/// A validated letter of the trie alphabet.
///
/// A `Letter` is always one of `'a'..='z'`, stored as its zero-based index.
/// Constructing one from any other character fails with
/// [`TrieError::InvalidLetter`], which is what keeps child-array indexing
/// in bounds everywhere else in the crate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Validates `ch` and converts it to a `Letter`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidLetter`] unless `ch` is in `'a'..='z'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Letter;
    ///
    /// assert_eq!(Letter::from_char('c').unwrap().index(), 2);
    /// assert!(Letter::from_char('C').is_err());
    /// assert!(Letter::from_char('é').is_err());
    /// ```
    pub fn from_char(ch: char) -> Result<Self, TrieError> {
        if ch.is_ascii_lowercase() {
            Ok(Letter(ch as u8 - b'a'))
        } else {
            Err(TrieError::InvalidLetter(ch))
        }
    }

    /// Converts a zero-based child-array index back to a `Letter`.
    ///
    /// Callers must pass `index < ALPHABET_LEN`.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_LEN);
        Letter(index as u8)
    }

    /// Returns the zero-based index of this letter (`'a'` is 0, `'z'` is 25).
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the letter as a `char`.
    #[inline]
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Returns an iterator over the whole alphabet in ascending order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = TrieError;

    fn try_from(ch: char) -> Result<Self, TrieError> {
        Letter::from_char(ch)
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Trait for types that can be used as a word in trie operations.
///
/// Implemented for common string and sequence types so that
/// [`TrieNode::insert`](super::TrieNode::insert) and friends accept them
/// directly without manual conversion. Conversion validates every character,
/// so a word containing anything outside `'a'..='z'` is rejected before the
/// trie is touched.
pub trait IntoWord {
    /// Collects this word into a validated letter buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidLetter`] on the first out-of-alphabet
    /// character.
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError>;
}

// String types → Letter

impl IntoWord for &str {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        self.chars().map(Letter::from_char).collect()
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        self.chars().map(Letter::from_char).collect()
    }
}

impl IntoWord for String {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        self.chars().map(Letter::from_char).collect()
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        self.chars().map(Letter::from_char).collect()
    }
}

// Pre-validated letter sequences

impl IntoWord for &[Letter] {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        Ok(self.iter().copied().collect())
    }
}

impl IntoWord for Vec<Letter> {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        Ok(self.into_iter().collect())
    }
}

impl IntoWord for &Vec<Letter> {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        Ok(self.iter().copied().collect())
    }
}

impl<const N: usize> IntoWord for [Letter; N] {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        Ok(self.into_iter().collect())
    }
}

impl<const N: usize> IntoWord for &[Letter; N] {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, TrieError> {
        Ok(self.iter().copied().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alphabet_endpoints() {
        assert_eq!(Letter::from_char('a').unwrap().index(), 0);
        assert_eq!(Letter::from_char('z').unwrap().index(), 25);
    }

    #[test]
    fn rejects_out_of_alphabet() {
        for ch in ['A', 'Z', '0', ' ', '-', 'ă', '字'] {
            assert_eq!(Letter::from_char(ch), Err(TrieError::InvalidLetter(ch)));
        }
    }

    #[test]
    fn round_trips_through_char() {
        for letter in Letter::all() {
            assert_eq!(Letter::from_char(letter.to_char()), Ok(letter));
        }
    }

    #[test]
    fn all_is_ascending() {
        let letters: Vec<Letter> = Letter::all().collect();
        assert_eq!(letters.len(), ALPHABET_LEN);
        assert!(letters.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn collect_word_validates_each_char() {
        assert!("mama".collect_word().is_ok());
        assert_eq!(
            "maMa".collect_word().unwrap_err(),
            TrieError::InvalidLetter('M')
        );
        assert!("".collect_word().unwrap().is_empty());
    }

    #[test]
    fn collect_word_from_letters_is_infallible() {
        let letters: Vec<Letter> = "cat".collect_word().unwrap().to_vec();
        assert_eq!(letters.as_slice().collect_word().unwrap().len(), 3);
        assert_eq!(letters.collect_word().unwrap().len(), 3);
    }
}
