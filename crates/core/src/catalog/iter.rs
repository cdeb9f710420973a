//! Lazy tree traversals.
//!
//! Both iterators keep an explicit stack of pending nodes instead of
//! recursing, so traversal depth costs heap space rather than call stack
//! even on degenerate (sorted-insert) trees. They are finite, restartable
//! (call the accessor again for a fresh one) and produce entries on
//! demand without materializing the whole sequence.

use super::entry::Entry;
use super::node::Node;

/// In-order traversal: ascending id order.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    descent: Option<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            descent: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.descent {
            self.stack.push(node);
            self.descent = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.descent = node.right.as_deref();
        Some(&node.entry)
    }
}

/// Pre-order traversal: node before either child.
///
/// This is the persistence order: replaying it through insert rebuilds a
/// tree of identical shape, because every parent is inserted before its
/// children.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.entry)
    }
}
