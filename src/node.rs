use std::collections::BTreeMap;

/// One vertex of the trie. Children are keyed by character and kept in
/// character order, so every walk over them is deterministic.
#[derive(Debug, Default)]
pub struct RuneNode {
    children: BTreeMap<char, RuneNode>,
    terminal: bool,
}

impl RuneNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&self, c: char) -> Option<&RuneNode> {
        self.children.get(&c)
    }

    /// Returns the child for `c`, creating an empty one when the edge is
    /// missing. The flag tells whether the edge was created.
    pub fn child_or_insert(&mut self, c: char) -> (&mut RuneNode, bool) {
        let mut created = false;
        let node = self.children.entry(c).or_insert_with(|| {
            created = true;
            RuneNode::new()
        });
        (node, created)
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = (&char, &RuneNode)> {
        self.children.iter()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Marks the node terminal and returns the previous flag.
    pub fn mark_terminal(&mut self) -> bool {
        std::mem::replace(&mut self.terminal, true)
    }

    /// Follows `path` one character at a time from this node.
    pub fn descend(&self, path: &str) -> Option<&RuneNode> {
        path.chars().try_fold(self, |node, c| node.child(c))
    }
}

// Drops the subtree with a work list; the derived glue would recurse once
// per character of the longest word.
impl Drop for RuneNode {
    fn drop(&mut self) {
        let mut stack: Vec<RuneNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
