use super::entry::Entry;

/// A child slot: either empty or the exclusive owner of a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A tree node: one entry plus two owned child slots.
///
/// Nodes never leave the engine. All linkage mutation happens inside
/// [`Catalog`](super::Catalog); there are no parent back-pointers.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) entry: Entry,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(entry: Entry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }
}
