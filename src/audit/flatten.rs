use crate::audit::{SnapshotNode, SnapshotTime};

/// Walks given snapshot trees, yielding every node exactly once.
///
/// Traversal is depth-first over an explicit work-list, so arbitrarily deep
/// snapshot chains don't grow the call stack; siblings listed later (and
/// their descendants) come out first.
pub fn flatten<N>(roots: Option<&[N]>) -> SnapshotTreeIter<'_, N>
where
    N: SnapshotNode,
{
    SnapshotTreeIter {
        pending: roots.unwrap_or_default().iter().collect(),
    }
}

pub struct SnapshotTreeIter<'a, N> {
    pending: Vec<&'a N>,
}

impl<'a, N> Iterator for SnapshotTreeIter<'a, N>
where
    N: SnapshotNode,
{
    type Item = (&'a str, &'a SnapshotTime);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;

        self.pending.extend(node.children());

        Some((node.name(), node.created_at()))
    }
}
