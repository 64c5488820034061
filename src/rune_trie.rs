//! A trie over Unicode scalar values.

use log::{debug, trace, warn};

use crate::helper::bytes_to_printable_string;
use crate::node::RuneNode;
use crate::traits::Trie;
use crate::{Result, TrieErr};

#[derive(Debug, Default)]
pub struct RuneTrie {
    root: RuneNode,
    size: usize,
}

impl Trie for RuneTrie {
    fn new() -> Self {
        RuneTrie {
            root: RuneNode::new(),
            size: 0,
        }
    }

    fn insert(&mut self, word: &str) -> bool {
        trace!("Insert word: {}", word);
        let mut created = 0;
        let mut current = &mut self.root;
        for c in word.chars() {
            let (next, new_edge) = current.child_or_insert(c);
            if new_edge {
                created += 1;
            }
            current = next;
        }

        let exists = current.mark_terminal();
        if !exists {
            self.size += 1;
            debug!("Stored word: {}, new nodes: {}, size: {}", word, created, self.size);
        }
        exists
    }

    fn contains(&self, word: &str) -> bool {
        trace!("Contains word: {}", word);
        self.root
            .descend(word)
            .map_or(false, |node| node.is_terminal())
    }

    fn starts_with(&self, prefix: &str) -> bool {
        trace!("Starts with prefix: {}", prefix);
        self.root.descend(prefix).is_some()
    }

    fn search_by_prefix(&self, prefix: &str) -> Vec<String> {
        trace!("Search by prefix: {}", prefix);
        let mut words = Vec::new();
        if let Some(node) = self.root.descend(prefix) {
            let mut buffer = String::with_capacity(prefix.len() + 16);
            buffer.push_str(prefix);
            collect(node, &mut buffer, &mut words);
        }
        words
    }

    fn find_longest_unique_suffix(&self, word: &str) -> (String, bool) {
        trace!("Find longest unique suffix: {}", word);
        let mut chars = word.chars();
        let last = match chars.next_back() {
            Some(c) => c,
            None => return (String::new(), self.root.is_terminal()),
        };

        let mut suffix = String::new();
        let mut current = &self.root;
        for c in chars {
            let node = match current.child(c) {
                Some(node) => node,
                None => return (String::new(), false),
            };
            // a branch or another word ends here, so the unique part starts after it
            if node.child_count() > 1 || node.is_terminal() {
                suffix.clear();
            } else {
                suffix.push(c);
            }
            current = node;
        }

        let node = match current.child(last) {
            Some(node) if node.is_terminal() => node,
            _ => return (String::new(), false),
        };
        if node.has_children() {
            return (String::new(), true);
        }

        suffix.push(last);
        (suffix, true)
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl RuneTrie {
    /// Like [`Trie::insert`], for raw input that must be valid UTF-8.
    pub fn insert_bytes(&mut self, word: &[u8]) -> Result<bool> {
        let word = decode(word)?;
        Ok(self.insert(word))
    }

    pub fn contains_bytes(&self, word: &[u8]) -> Result<bool> {
        let word = decode(word)?;
        Ok(self.contains(word))
    }

    pub fn starts_with_bytes(&self, prefix: &[u8]) -> Result<bool> {
        let prefix = decode(prefix)?;
        Ok(self.starts_with(prefix))
    }

    pub fn search_by_prefix_bytes(&self, prefix: &[u8]) -> Result<Vec<String>> {
        let prefix = decode(prefix)?;
        Ok(self.search_by_prefix(prefix))
    }

    pub fn find_longest_unique_suffix_bytes(&self, word: &[u8]) -> Result<(String, bool)> {
        let word = decode(word)?;
        Ok(self.find_longest_unique_suffix(word))
    }
}

impl<S: AsRef<str>> Extend<S> for RuneTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for RuneTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = RuneTrie::new();
        trie.extend(iter);
        trie
    }
}

fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let printable = bytes_to_printable_string(bytes);
        warn!("Rejected invalid input: {}", printable);
        TrieErr::InvalidInput(format!("{} in \"{}\"", e, printable))
    })
}

// Depth first with an explicit stack. `buffer` starts as the path to `start`;
// each frame carries the buffer length to cut back to before its edge.
fn collect(start: &RuneNode, buffer: &mut String, words: &mut Vec<String>) {
    let mut stack: Vec<(&RuneNode, usize, Option<char>)> = vec![(start, buffer.len(), None)];
    while let Some((node, len, edge)) = stack.pop() {
        buffer.truncate(len);
        if let Some(c) = edge {
            buffer.push(c);
        }
        if node.is_terminal() {
            words.push(buffer.clone());
        }
        // reversed so the smallest character is popped first
        for (c, child) in node.children().rev() {
            stack.push((child, buffer.len(), Some(*c)));
        }
    }
}
