use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr;

/// An entry in a [`WordList`]: an owned word plus the embedded link to the
/// next entry.
///
/// Entries own a copy of their word, never a borrow of trie or caller
/// memory, and belong to exactly one list at a time.
pub struct WordEntry {
    word: Box<str>,
    next: *mut WordEntry,
}

impl WordEntry {
    /// Returns the stored word.
    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }
}

impl fmt::Debug for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WordEntry").field(&self.word).finish()
    }
}

/// An ordered, append-only sequence of owned words.
///
/// Enumeration appends each discovered word to the tail, so iteration order
/// is discovery order. The list owns its entries: dropping it releases every
/// entry and its word copy, and the consuming iterator transfers the words
/// out one at a time.
///
/// Single-writer, single-reader usage; the list is not meant for shared
/// mutation.
///
/// # Examples
///
/// ```
/// use libtrie::trie::WordList;
///
/// let mut list = WordList::new();
/// list.push("mama");
/// list.push("mata");
///
/// assert_eq!(list.len(), 2);
/// let words: Vec<&str> = list.iter().collect();
/// assert_eq!(words, ["mama", "mata"]);
/// ```
pub struct WordList {
    /// First entry of the chain; null iff the list is empty.
    head: *mut WordEntry,
    /// Last entry of the chain, for O(1) append; null iff `head` is null.
    tail: *mut WordEntry,
    len: usize,
}

// SAFETY: every entry pointer comes from Box::into_raw and is owned by
// exactly one list until Drop/IntoIter reconstitutes it. Access goes through
// `&self`/`&mut self`, so Rust's borrow rules already serialize readers and
// writers; there is no interior mutability.
unsafe impl Send for WordList {}
unsafe impl Sync for WordList {}

impl WordList {
    /// Creates an empty list.
    pub fn new() -> Self {
        WordList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Returns the number of words in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the list holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an owned copy of `word` at the tail.
    pub fn push(&mut self, word: &str) {
        let entry = Box::into_raw(Box::new(WordEntry {
            word: word.into(),
            next: ptr::null_mut(),
        }));

        if self.tail.is_null() {
            self.head = entry;
        } else {
            // SAFETY: tail is the last entry leaked to this list via
            // Box::into_raw and not yet freed; `&mut self` guarantees no
            // reference into the chain exists right now.
            unsafe { (*self.tail).next = entry };
        }
        self.tail = entry;
        self.len += 1;
    }

    /// Returns a borrowing iterator over the words in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            remaining: self.len,
            list: PhantomData,
        }
    }
}

impl Default for WordList {
    fn default() -> Self {
        WordList::new()
    }
}

impl Drop for WordList {
    fn drop(&mut self) {
        // Free iteratively; a recursive drop of the chain would overflow
        // the stack on long lists.
        let mut next = self.head;
        while !next.is_null() {
            // SAFETY: every chain pointer came from Box::into_raw and is
            // reconstituted exactly once, here or in IntoIter.
            let entry = unsafe { Box::from_raw(next) };
            next = entry.next;
        }
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for WordList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for WordList {}

/// A borrowing iterator over the words of a [`WordList`].
#[derive(Clone)]
pub struct Iter<'a> {
    next: *const WordEntry,
    remaining: usize,
    list: PhantomData<&'a WordEntry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: the chain is owned by the list we borrow for 'a, so the
        // entry outlives the returned reference and is not mutated while
        // the borrow lasts.
        let entry: &'a WordEntry = unsafe { &*self.next };
        self.next = entry.next;
        self.remaining -= 1;
        Some(entry.word())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// A consuming iterator that transfers each word out of a [`WordList`].
pub struct IntoIter {
    next: *mut WordEntry,
    remaining: usize,
}

impl Iterator for IntoIter {
    type Item = Box<str>;

    fn next(&mut self) -> Option<Box<str>> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: the list handed the chain over without freeing it, so
        // each entry is reconstituted exactly once.
        let entry = unsafe { Box::from_raw(self.next) };
        self.next = entry.next;
        self.remaining -= 1;
        Some(entry.word)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IntoIter {}

impl Drop for IntoIter {
    fn drop(&mut self) {
        // Same iterative freeing as WordList::drop for whatever the caller
        // didn't consume.
        let mut next = self.next;
        while !next.is_null() {
            // SAFETY: unconsumed entries are still owned by this iterator.
            let entry = unsafe { Box::from_raw(next) };
            next = entry.next;
        }
    }
}

impl IntoIterator for WordList {
    type Item = Box<str>;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        // The chain now belongs to the iterator; skip the list's Drop so
        // the entries are not freed twice.
        let list = ManuallyDrop::new(self);
        IntoIter {
            next: list.head,
            remaining: list.len,
        }
    }
}
