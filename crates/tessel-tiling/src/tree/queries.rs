//! Read-only recursive queries over the layout tree.

use tessel_common::WindowHandle;

use super::WmNode;

impl WmNode {
    /// A leaf is empty without an active window, a stack without windows,
    /// and a container when every child is empty (so a childless container
    /// is empty).
    pub fn is_empty(&self) -> bool {
        match self {
            WmNode::Leaf { active } => active.is_none(),
            WmNode::Stack { windows, .. } => windows.is_empty(),
            WmNode::Horizontal { children } | WmNode::Vertical { children } => {
                children.iter().all(WmNode::is_empty)
            }
        }
    }

    /// Whether `handle` occupies any slot. Stacks match on membership, not
    /// only on their active window.
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.some(|h| h == handle)
    }

    /// Whether any window in the tree satisfies `predicate`.
    ///
    /// An empty leaf never matches and never calls the predicate.
    pub fn some(&self, mut predicate: impl FnMut(WindowHandle) -> bool) -> bool {
        self.some_with(&mut predicate)
    }

    fn some_with<F: FnMut(WindowHandle) -> bool>(&self, predicate: &mut F) -> bool {
        match self {
            WmNode::Leaf { active } => match active {
                Some(handle) => predicate(*handle),
                None => false,
            },
            WmNode::Stack { windows, .. } => windows.iter().any(|h| predicate(*h)),
            WmNode::Horizontal { children } | WmNode::Vertical { children } => {
                children.iter().any(|child| child.some_with(predicate))
            }
        }
    }

    /// Every window in depth-first order; stacks contribute all members.
    pub fn handles(&self) -> Vec<WindowHandle> {
        let mut out = Vec::new();
        self.collect_handles_into(&mut out);
        out
    }

    fn collect_handles_into(&self, out: &mut Vec<WindowHandle>) {
        match self {
            WmNode::Leaf { active } => out.extend(active.iter().copied()),
            WmNode::Stack { windows, .. } => out.extend(windows.iter().copied()),
            WmNode::Horizontal { children } | WmNode::Vertical { children } => {
                for child in children {
                    child.collect_handles_into(out);
                }
            }
        }
    }

    /// Number of slots that will be positioned: occupied leaves plus stacks
    /// with an active window.
    pub fn occupied_slots(&self) -> usize {
        match self {
            WmNode::Leaf { active } => usize::from(active.is_some()),
            WmNode::Stack { windows, active } => usize::from(!windows.is_empty() && active.is_some()),
            WmNode::Horizontal { children } | WmNode::Vertical { children } => {
                children.iter().map(WmNode::occupied_slots).sum()
            }
        }
    }
}
