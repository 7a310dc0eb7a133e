use super::error::TrieError;
use super::letter::{IntoWord, MAX_WORD_LEN};
use super::node::TrieNode;
use super::pattern::WordPattern;
use super::words::WordList;

impl TrieNode {
    /// Collects every stored word into a new [`WordList`].
    ///
    /// Traversal is depth-first in ascending letter order, so the result is
    /// lexicographically sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::build_trie;
    ///
    /// let root = build_trie(["tata", "mama", "mata"]).unwrap();
    /// let list = root.words();
    /// let words: Vec<&str> = list.iter().collect();
    /// assert_eq!(words, ["mama", "mata", "tata"]);
    /// ```
    pub fn words(&self) -> WordList {
        let mut list = WordList::new();
        let mut word = String::new();
        self.collect_into(&mut word, &mut list);
        list
    }

    /// Collects every stored word starting with `prefix`, in lexicographic
    /// order. The prefix itself is included when it is a stored word.
    ///
    /// The empty prefix collects the whole trie, like
    /// [`words`](TrieNode::words).
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PrefixNotFound`] if no stored word starts with
    /// `prefix`, [`TrieError::InvalidLetter`] for out-of-alphabet
    /// characters, and [`TrieError::WordTooLong`] for prefixes longer than
    /// [`MAX_WORD_LEN`]. On error nothing is returned at all — the caller
    /// never sees a partial result.
    pub fn words_with_prefix(&self, prefix: impl IntoWord) -> Result<WordList, TrieError> {
        let prefix = prefix.collect_word()?;
        if prefix.len() > MAX_WORD_LEN {
            return Err(TrieError::WordTooLong(prefix.len()));
        }

        let start = prefix
            .iter()
            .try_fold(self, |node, &letter| node.child(letter))
            .ok_or(TrieError::PrefixNotFound)?;

        let mut list = WordList::new();
        let mut word: String = prefix.iter().map(|l| l.to_char()).collect();
        start.collect_into(&mut word, &mut list);
        Ok(list)
    }

    fn collect_into(&self, word: &mut String, list: &mut WordList) {
        if self.is_leaf() {
            list.push(word.as_str());
        }
        for (letter, child) in self.children() {
            word.push(letter.to_char());
            child.collect_into(word, list);
            word.pop();
        }
    }

    /// Collects the stored words matching `pattern`, in lexicographic order.
    ///
    /// A word matches iff its length equals the pattern length and the
    /// letter at every position satisfies that position's
    /// [`LetterClass`](super::LetterClass). The traversal only descends
    /// edges the current depth's class admits, so filtering happens during
    /// the walk rather than over a full enumeration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::{build_trie, LetterClass, LetterSet, WordPattern};
    ///
    /// let root = build_trie(["abc", "abd", "axc"]).unwrap();
    /// let pattern = WordPattern::new(vec![
    ///     LetterClass::InSet(LetterSet::from_letters("a").unwrap()),
    ///     LetterClass::InSet(LetterSet::from_letters("b").unwrap()),
    ///     LetterClass::InSet(LetterSet::ALL),
    /// ])
    /// .unwrap();
    ///
    /// let matches = root.words_matching(&pattern);
    /// let words: Vec<&str> = matches.iter().collect();
    /// assert_eq!(words, ["abc", "abd"]);
    /// ```
    pub fn words_matching(&self, pattern: &WordPattern) -> WordList {
        let mut list = WordList::new();
        let mut word = String::with_capacity(pattern.len());
        self.match_into(pattern, 0, &mut word, &mut list);
        list
    }

    fn match_into(
        &self,
        pattern: &WordPattern,
        depth: usize,
        word: &mut String,
        list: &mut WordList,
    ) {
        if depth == pattern.len() {
            if self.is_leaf() {
                list.push(word.as_str());
            }
            return;
        }

        let class = pattern.class(depth);
        for (letter, child) in self.children() {
            if class.matches(letter) {
                word.push(letter.to_char());
                child.match_into(pattern, depth + 1, word, list);
                word.pop();
            }
        }
    }
}
