/// Character-keyed word set with prefix queries.
///
/// Absence is reported through the return values: `false`, an empty
/// `Vec`, or `("", false)`. None of the operations fail.
pub trait Trie {
    /// Creates an empty trie.
    fn new() -> Self;

    /// Stores `word` and returns true if it was already stored.
    fn insert(&mut self, word: &str) -> bool;

    /// True only for stored words, not for bare prefixes of them.
    fn contains(&self, word: &str) -> bool;

    /// True if any stored word starts with `prefix`. Always true for `""`.
    fn starts_with(&self, prefix: &str) -> bool;

    /// All stored words beginning with `prefix`, in character order.
    fn search_by_prefix(&self, prefix: &str) -> Vec<String>;

    /// The trailing part of `word` that no other stored word shares.
    ///
    /// The flag is false when `word` is not stored. A stored word that is
    /// also a prefix of longer words yields `("", true)`.
    fn find_longest_unique_suffix(&self, word: &str) -> (String, bool);

    /// Number of distinct stored words.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
