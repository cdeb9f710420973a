//! The binary search tree engine.

use std::fmt::Write as _;

use tracing::debug;

use super::entry::Entry;
use super::iter::{InOrder, PreOrder};
use super::node::{Link, Node};

/// A catalog of media entries keyed by id, backed by an unbalanced
/// binary search tree.
///
/// Keys are unique: re-inserting an existing id merges vote statistics
/// into the resident entry instead of creating a node. There is no
/// rebalancing, so tree shape is purely a function of insertion order;
/// lookups are O(height), which is O(log n) for random insertion order
/// and O(n) for adversarial (sorted) order.
///
/// A catalog belongs to a single owner; concurrent mutation must be
/// serialized by the caller.
#[derive(Debug, Default)]
pub struct Catalog {
    root: Link,
    len: usize,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys present.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert an entry, or merge it into the entry already holding its id.
    ///
    /// Duplicate keys never create a second node: the incoming votes are
    /// folded into the resident entry exactly once per call (see
    /// [`Entry::merge_votes`]) and the count is unchanged.
    pub fn insert(&mut self, entry: Entry) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            if entry.id < node.entry.id {
                link = &mut node.left;
            } else if entry.id > node.entry.id {
                link = &mut node.right;
            } else {
                debug!(id = entry.id, "duplicate id, merging vote totals");
                node.entry.merge_votes(&entry);
                return;
            }
        }
        *link = Some(Box::new(Node::new(entry)));
        self.len += 1;
    }

    /// Point lookup by id. `None` is the normal not-found result.
    pub fn get(&self, id: u64) -> Option<&Entry> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if id < node.entry.id {
                current = node.left.as_deref();
            } else if id > node.entry.id {
                current = node.right.as_deref();
            } else {
                return Some(&node.entry);
            }
        }
        None
    }

    /// Remove the entry with the given id, returning it if present.
    ///
    /// A node with two children is emptied by value relocation: the
    /// in-order successor's entry is copied up and the successor's old
    /// position (which has at most one child) is detached, so no parent
    /// pointers are needed.
    pub fn remove(&mut self, id: u64) -> Option<Entry> {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => return None,
                Some(node) => id.cmp(&node.entry.id),
            };
            match ordering {
                std::cmp::Ordering::Equal => break,
                std::cmp::Ordering::Less => {
                    let taken = link;
                    link = &mut taken.as_mut().expect("checked above").left;
                }
                std::cmp::Ordering::Greater => {
                    let taken = link;
                    link = &mut taken.as_mut().expect("checked above").right;
                }
            }
        }
        let removed = Self::remove_link(link);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Detach the node the link points at, reattaching its subtrees.
    fn remove_link(link: &mut Link) -> Option<Entry> {
        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => Some(node.entry),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Some(node.entry)
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                let mut right_link = Some(right);
                let successor = match Self::pop_min(&mut right_link) {
                    Some(entry) => entry,
                    // The right subtree is non-empty here.
                    None => return None,
                };
                node.right = right_link;
                let removed = std::mem::replace(&mut node.entry, successor);
                *link = Some(node);
                Some(removed)
            }
        }
    }

    /// Detach and return the leftmost entry of the subtree at `link`.
    fn pop_min(link: &mut Link) -> Option<Entry> {
        let mut current = link;
        loop {
            let has_left = match current.as_deref() {
                None => return None,
                Some(node) => node.left.is_some(),
            };
            if !has_left {
                break;
            }
            let taken = current;
            current = &mut taken.as_mut().expect("checked above").left;
        }
        let mut node = current.take()?;
        *current = node.right.take();
        Some(node.entry)
    }

    /// Lazy in-order traversal: entries in ascending id order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Lazy pre-order traversal: each node before its children. This is
    /// the order persistence writes, so reloading rebuilds the same shape.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root.as_deref())
    }

    /// Drop every entry and reset the count.
    ///
    /// Teardown is iterative so a degenerate chain does not unwind
    /// node-by-node down the call stack.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
        self.len = 0;
    }

    /// Render the tree shape as indented text, one node per line.
    ///
    /// Nodes with exactly one child render an explicit `(empty)` line for
    /// the vacant side so the shape stays unambiguous.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let Some(root) = self.root.as_deref() else {
            out.push_str("(empty catalog)\n");
            return out;
        };

        let mut pending: Vec<(Option<&Node>, usize, &str)> = vec![(Some(root), 0, "Root: ")];
        while let Some((slot, depth, prefix)) = pending.pop() {
            let pad = "    ".repeat(depth);
            match slot {
                None => {
                    let _ = writeln!(out, "{pad}{prefix}(empty)");
                }
                Some(node) => {
                    let entry = &node.entry;
                    let _ = writeln!(
                        out,
                        "{pad}{prefix}[{}] {} | {:.2} | {}",
                        entry.id, entry.title, entry.rating, entry.category
                    );
                    if node.left.is_some() || node.right.is_some() {
                        // Right pushed first so the left side renders first.
                        pending.push((node.right.as_deref(), depth + 1, "R-- "));
                        pending.push((node.left.as_deref(), depth + 1, "L-- "));
                    }
                }
            }
        }
        out
    }
}

impl Drop for Catalog {
    fn drop(&mut self) {
        self.clear();
    }
}
