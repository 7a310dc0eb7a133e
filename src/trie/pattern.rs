use std::fmt;

use super::error::TrieError;
use super::letter::{Letter, ALPHABET_LEN, MAX_WORD_LEN};

/// A set of alphabet letters, stored as a 26-bit mask.
///
/// Bit `i` is set iff letter `'a' + i` is in the set.
///
/// # Examples
///
/// ```
/// use libtrie::trie::{Letter, LetterSet};
///
/// let set = LetterSet::from_letters("ab").unwrap();
/// assert_eq!(set.bits(), 0b11);
/// assert!(set.contains(Letter::from_char('a').unwrap()));
/// assert!(!set.contains(Letter::from_char('c').unwrap()));
///
/// assert_eq!(LetterSet::from_letters("").unwrap(), LetterSet::EMPTY);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The set containing no letters (mask 0).
    pub const EMPTY: LetterSet = LetterSet(0);

    /// The set containing every letter of the alphabet.
    pub const ALL: LetterSet = LetterSet((1 << ALPHABET_LEN) - 1);

    /// Builds a set from the letters appearing in `letters`.
    ///
    /// Duplicates are harmless and the empty string yields [`EMPTY`](LetterSet::EMPTY).
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidLetter`] on the first out-of-alphabet
    /// character.
    pub fn from_letters(letters: &str) -> Result<Self, TrieError> {
        letters.chars().map(Letter::from_char).collect()
    }

    /// Adds a letter to the set.
    #[inline]
    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1 << letter.index();
    }

    /// True if the set contains `letter`.
    #[inline]
    pub fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Returns the raw 26-bit mask.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// True if the set contains no letters.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of letters in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns an iterator over the set's letters in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().map(Letter::to_char).collect();
        write!(f, "LetterSet({letters:?})")
    }
}

/// A per-position character class used to constrain enumeration.
///
/// A class either requires the letter at its position to be inside a
/// [`LetterSet`], or requires it to be outside one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LetterClass {
    /// The letter must be a member of the set.
    InSet(LetterSet),
    /// The letter must not be a member of the set.
    NotInSet(LetterSet),
}

impl LetterClass {
    /// True if `letter` satisfies this class.
    #[inline]
    pub fn matches(self, letter: Letter) -> bool {
        match self {
            LetterClass::InSet(set) => set.contains(letter),
            LetterClass::NotInSet(set) => !set.contains(letter),
        }
    }
}

/// A fixed-length sequence of [`LetterClass`] constraints, one per word
/// position.
///
/// Used by [`TrieNode::words_matching`](super::TrieNode::words_matching) to
/// filter enumeration: a stored word matches iff its length equals the
/// pattern's length and every letter satisfies its positional class.
///
/// The length invariant (`1..=MAX_WORD_LEN`) is checked once at
/// construction, so a `WordPattern` in hand is always valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPattern {
    classes: Vec<LetterClass>,
}

impl WordPattern {
    /// Builds a pattern from one class per word position.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PatternLength`] if `classes` is empty or longer
    /// than [`MAX_WORD_LEN`].
    pub fn new(classes: Vec<LetterClass>) -> Result<Self, TrieError> {
        if classes.is_empty() || classes.len() > MAX_WORD_LEN {
            return Err(TrieError::PatternLength(classes.len()));
        }
        Ok(WordPattern { classes })
    }

    /// Returns the pattern length (always at least 1).
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always `false`: construction rejects empty patterns.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the class constraining position `depth`.
    ///
    /// Panics if `depth >= self.len()`.
    #[inline]
    pub fn class(&self, depth: usize) -> LetterClass {
        self.classes[depth]
    }

    /// Returns all positional classes in order.
    pub fn classes(&self) -> &[LetterClass] {
        &self.classes
    }
}
