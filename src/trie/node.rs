use std::fmt;

use super::error::TrieError;
use super::letter::{IntoWord, Letter, ALPHABET_LEN, MAX_WORD_LEN};

/// A node in the trie.
///
/// Every node holds one optional child per alphabet letter plus a leaf flag
/// marking that the root-to-node path spells a complete stored word. A node
/// exclusively owns its children, so dropping a node drops its entire
/// subtree.
///
/// The root node is the whole trie: create one with [`TrieNode::new`] and
/// call the word operations on it.
///
/// # Examples
///
/// ```
/// use libtrie::trie::TrieNode;
///
/// let mut root = TrieNode::new();
/// root.insert("hello").unwrap();
/// root.insert("hei").unwrap();
///
/// assert!(root.contains("hei"));
/// assert!(!root.contains("he"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_LEN],
    leaf: bool,
}

impl TrieNode {
    /// Creates a node with all children unset and the leaf flag cleared.
    pub fn new() -> Self {
        TrieNode {
            children: [const { None }; ALPHABET_LEN],
            leaf: false,
        }
    }

    /// True if the path from the root to this node spells a stored word.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Returns the child reached by `letter`'s edge, or `None` if no such
    /// edge exists.
    #[inline]
    pub fn child(&self, letter: Letter) -> Option<&TrieNode> {
        self.children[letter.index()].as_deref()
    }

    /// Mutable variant of [`child`](TrieNode::child).
    #[inline]
    pub fn child_mut(&mut self, letter: Letter) -> Option<&mut TrieNode> {
        self.children[letter.index()].as_deref_mut()
    }

    /// Detaches and returns the subtree hanging off `letter`'s edge.
    ///
    /// Dropping the returned box destroys the whole subtree. The edge slot
    /// is left unset, so the parent never references freed nodes.
    pub fn take_child(&mut self, letter: Letter) -> Option<Box<TrieNode>> {
        self.children[letter.index()].take()
    }

    /// Returns the child for `letter`, creating it if the edge is missing.
    pub fn child_or_insert(&mut self, letter: Letter) -> &mut TrieNode {
        &mut **self.children[letter.index()].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Returns an iterator over the children of this node in ascending
    /// letter order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            node: self,
            index: 0,
        }
    }

    /// True if this node has at least one child reached by a letter other
    /// than `letter` — i.e. the trie branches here.
    fn has_other_child(&self, letter: Letter) -> bool {
        self.children
            .iter()
            .enumerate()
            .any(|(i, c)| i != letter.index() && c.is_some())
    }

    /// Inserts a word, creating a child node on every missing edge and
    /// marking the final node as a leaf.
    ///
    /// Inserting a word that is already stored leaves the trie unchanged.
    /// Inserting the empty word marks the root itself as a leaf.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidLetter`] for out-of-alphabet characters
    /// and [`TrieError::WordTooLong`] for words longer than [`MAX_WORD_LEN`].
    /// Validation happens before the walk, so a failed insert never leaves
    /// partial path nodes behind.
    pub fn insert(&mut self, word: impl IntoWord) -> Result<(), TrieError> {
        let word = word.collect_word()?;
        if word.len() > MAX_WORD_LEN {
            return Err(TrieError::WordTooLong(word.len()));
        }

        let mut node = self;
        for &letter in word.iter() {
            node = node.child_or_insert(letter);
        }
        node.leaf = true;
        Ok(())
    }

    /// Returns true if `word` is stored in the trie.
    ///
    /// Requires every edge along the path to exist *and* the terminal node
    /// to be leaf-marked; a prefix of a stored word is not itself a word.
    /// Words containing out-of-alphabet characters can never be stored, so
    /// they simply report false.
    pub fn contains(&self, word: impl IntoWord) -> bool {
        let Ok(word) = word.collect_word() else {
            return false;
        };
        word.iter()
            .try_fold(self, |node, &letter| node.child(letter))
            .is_some_and(|node| node.is_leaf())
    }

    /// Walks `word`'s path and reports where the trie last branches along it.
    ///
    /// Returns `None` if `word` is not a path in the trie (some edge is
    /// missing, or the word contains out-of-alphabet characters). Otherwise
    /// returns `Some(p)`:
    ///
    /// - `p == 0`: the walk never branches — the word's path is the only
    ///   path through every node it visits;
    /// - `p > 0`: the deepest branch is at the node reached after consuming
    ///   `p - 1` letters, i.e. the subtree below position `p` is shared
    ///   with no other stored word.
    ///
    /// Branching is checked at each node *before* following the edge, so a
    /// root with two children branches at position 1 already.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::build_trie;
    ///
    /// let root = build_trie(["hello", "helloa", "hei"]).unwrap();
    /// assert_eq!(root.longest_prefix("hello"), Some(3)); // "hel" vs "hei"
    /// assert_eq!(root.longest_prefix("xyz"), None);
    /// ```
    pub fn longest_prefix(&self, word: impl IntoWord) -> Option<usize> {
        let word = word.collect_word().ok()?;

        let mut node = self;
        let mut prefix = 0;
        for (i, &letter) in word.iter().enumerate() {
            let child = node.child(letter)?;
            if node.has_other_child(letter) {
                prefix = i + 1;
            }
            node = child;
        }
        Some(prefix)
    }

    /// Removes a word by pruning the unbranched tail of its path.
    ///
    /// The cut point comes from [`longest_prefix`](TrieNode::longest_prefix):
    /// everything below the deepest branch along the word's path (or below
    /// the root, if the path never branches) is detached and dropped
    /// wholesale.
    ///
    /// This prunes whole suffix chains rather than clearing a single leaf
    /// flag, and it checks only that the *path* exists, not the leaf flag.
    /// Two consequences callers must be aware of:
    ///
    /// - removing a word also removes any longer stored word that extends
    ///   it through an unbranched chain (removing `"hello"` when
    ///   `"helloa"` is stored drops both);
    /// - removing a never-inserted word whose path happens to exist (a
    ///   prefix of a stored word) prunes that chain too.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::WordNotFound`] if the word is not a path in the
    /// trie, [`TrieError::EmptyWord`] for the empty word, and
    /// [`TrieError::InvalidLetter`] for out-of-alphabet characters.
    pub fn remove(&mut self, word: impl IntoWord) -> Result<(), TrieError> {
        let word = word.collect_word()?;
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let prefix = self
            .longest_prefix(word.as_slice())
            .ok_or(TrieError::WordNotFound)?;

        // Cut below the deepest branch: walk to its node and detach the
        // edge the word follows there. With no branch at all (prefix 0)
        // the cut is directly below the root.
        let cut = prefix.saturating_sub(1);
        let mut node = &mut *self;
        for &letter in &word[..cut] {
            node = node
                .child_mut(letter)
                .expect("path verified by longest_prefix");
        }
        let pruned = node.take_child(word[cut]);
        debug_assert!(pruned.is_some(), "path verified by longest_prefix");
        Ok(())
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        TrieNode::new()
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: String = self.children().map(|(letter, _)| letter.to_char()).collect();
        f.debug_struct("TrieNode")
            .field("leaf", &self.leaf)
            .field("edges", &edges)
            .finish()
    }
}

/// An iterator over the children of a [`TrieNode`] in ascending letter order.
#[derive(Clone)]
pub struct ChildIter<'a> {
    node: &'a TrieNode,
    index: usize,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = (Letter, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < ALPHABET_LEN {
            let i = self.index;
            self.index += 1;
            if let Some(child) = self.node.children[i].as_deref() {
                return Some((Letter::from_index(i), child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(ALPHABET_LEN - self.index))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_node_has_no_children() {
        let node = TrieNode::new();
        assert_eq!(node.child_count(), 0);
        assert!(!node.is_leaf());
        assert!(node.children().next().is_none());
    }

    #[test]
    fn children_iterate_in_ascending_order() {
        let mut node = TrieNode::new();
        for word in ["m", "a", "z", "c"] {
            node.insert(word).unwrap();
        }
        let letters: Vec<char> = node.children().map(|(l, _)| l.to_char()).collect();
        assert_eq!(letters, ['a', 'c', 'm', 'z']);
    }

    #[test]
    fn insert_and_contains() {
        let mut root = TrieNode::new();
        root.insert("mama").unwrap();
        root.insert("mata").unwrap();
        assert!(root.contains("mama"));
        assert!(root.contains("mata"));
        assert!(!root.contains("tata"));
    }

    #[test]
    fn contains_requires_leaf_mark() {
        let mut root = TrieNode::new();
        root.insert("mata").unwrap();
        // "mat" exists as a path but was never stored.
        assert!(!root.contains("mat"));
        assert!(!root.contains("m"));
    }

    #[test]
    fn contains_rejects_invalid_words() {
        let mut root = TrieNode::new();
        root.insert("mama").unwrap();
        assert!(!root.contains("MAMA"));
        assert!(!root.contains("ma-ma"));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut once = TrieNode::new();
        once.insert("hello").unwrap();
        once.insert("hei").unwrap();

        let mut twice = once.clone();
        twice.insert("hello").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn insert_validates_before_mutating() {
        let mut root = TrieNode::new();
        root.insert("ab").unwrap();
        let before = root.clone();

        assert_eq!(
            root.insert("abX"),
            Err(TrieError::InvalidLetter('X'))
        );
        assert_eq!(root, before);
    }

    #[test]
    fn insert_rejects_too_long_words() {
        let mut root = TrieNode::new();
        let word = "a".repeat(MAX_WORD_LEN + 1);
        assert_eq!(
            root.insert(&word),
            Err(TrieError::WordTooLong(MAX_WORD_LEN + 1))
        );

        let word = "a".repeat(MAX_WORD_LEN);
        assert!(root.insert(&word).is_ok());
    }

    #[test]
    fn empty_word_marks_root() {
        let mut root = TrieNode::new();
        assert!(!root.contains(""));
        root.insert("").unwrap();
        assert!(root.contains(""));
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn longest_prefix_missing_path() {
        let mut root = TrieNode::new();
        root.insert("hello").unwrap();
        assert_eq!(root.longest_prefix("xyz"), None);
        assert_eq!(root.longest_prefix("help"), None);
        assert_eq!(root.longest_prefix("hellos"), None);
    }

    #[test]
    fn longest_prefix_single_path() {
        let mut root = TrieNode::new();
        root.insert("hello").unwrap();
        assert_eq!(root.longest_prefix("hello"), Some(0));
        assert_eq!(root.longest_prefix("hel"), Some(0));
    }

    #[test]
    fn longest_prefix_branch_inside_word() {
        let mut root = TrieNode::new();
        for word in ["hello", "helloa", "hei"] {
            root.insert(word).unwrap();
        }
        // "hel" and "hei" diverge at the node after "he".
        assert_eq!(root.longest_prefix("hello"), Some(3));
        assert_eq!(root.longest_prefix("hei"), Some(3));
        // "helloa" only extends "hello" past the branch.
        assert_eq!(root.longest_prefix("helloa"), Some(3));
    }

    #[test]
    fn longest_prefix_branch_at_root() {
        let mut root = TrieNode::new();
        root.insert("mama").unwrap();
        root.insert("tata").unwrap();
        assert_eq!(root.longest_prefix("mama"), Some(1));
        assert_eq!(root.longest_prefix("tata"), Some(1));
    }

    #[test]
    fn longest_prefix_reports_deepest_branch() {
        let mut root = TrieNode::new();
        for word in ["abc", "abd", "axc"] {
            root.insert(word).unwrap();
        }
        // Branches after "a" (b/x) and after "ab" (c/d); the deeper one wins.
        assert_eq!(root.longest_prefix("abc"), Some(3));
        assert_eq!(root.longest_prefix("axc"), Some(2));
    }

    #[test]
    fn remove_missing_word_fails() {
        let mut root = TrieNode::new();
        root.insert("mama").unwrap();
        assert_eq!(root.remove("tata"), Err(TrieError::WordNotFound));
        assert!(root.contains("mama"));
    }

    #[test]
    fn remove_empty_word_fails() {
        let mut root = TrieNode::new();
        root.insert("").unwrap();
        assert_eq!(root.remove(""), Err(TrieError::EmptyWord));
    }

    #[test]
    fn remove_word_below_branch() {
        let mut root = TrieNode::new();
        for word in ["mama", "mata", "tata"] {
            root.insert(word).unwrap();
        }
        root.remove("mata").unwrap();
        assert!(!root.contains("mata"));
        assert!(root.contains("mama"));
        assert!(root.contains("tata"));
    }

    #[test]
    fn remove_single_path_clears_whole_chain() {
        let mut root = TrieNode::new();
        root.insert("cat").unwrap();
        root.remove("cat").unwrap();
        assert!(!root.contains("cat"));
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn remove_prunes_unbranched_suffix() {
        let mut root = TrieNode::new();
        for word in ["hello", "helloa", "hei"] {
            root.insert(word).unwrap();
        }
        // "helloa" extends "hello" through an unbranched chain, so pruning
        // "hello" takes it down as well.
        root.remove("hello").unwrap();
        assert!(!root.contains("hello"));
        assert!(!root.contains("helloa"));
        assert!(root.contains("hei"));
    }

    #[test]
    fn remove_pass_through_path_prunes_chain() {
        let mut root = TrieNode::new();
        root.insert("cart").unwrap();
        // "car" was never stored, but its path exists.
        root.remove("car").unwrap();
        assert!(!root.contains("cart"));
    }

    #[test]
    fn take_child_detaches_subtree() {
        let mut root = TrieNode::new();
        root.insert("mama").unwrap();
        root.insert("tata").unwrap();

        let subtree = root.take_child(Letter::from_char('m').unwrap()).unwrap();
        assert!(subtree.contains("ama"));
        assert!(!root.contains("mama"));
        assert!(root.contains("tata"));
    }
}
