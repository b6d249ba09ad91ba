//! The sheet's inner navigation stack and the coordinator that drives it.
//!
//! The stack always holds its root entry. Only entries pushed above the root
//! can be popped; a back intent that arrives while the root is on top is
//! handed back to the caller so the enclosing overlay can close.

use super::entry::NavigationEntry;
use tracing::debug;

/// LIFO sequence of entries that can never be empty.
#[derive(Debug, Clone)]
pub struct InnerStack {
    root: NavigationEntry,
    above: Vec<NavigationEntry>,
}

impl InnerStack {
    pub fn new(root: NavigationEntry) -> Self {
        Self {
            root,
            above: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        1 + self.above.len()
    }

    pub fn top(&self) -> NavigationEntry {
        self.above.last().copied().unwrap_or(self.root)
    }

    /// Entries from root to top.
    pub fn iter(&self) -> impl Iterator<Item = NavigationEntry> + '_ {
        std::iter::once(self.root).chain(self.above.iter().copied())
    }

    fn push(&mut self, entry: NavigationEntry) {
        self.above.push(entry);
    }

    fn pop(&mut self) -> Option<NavigationEntry> {
        self.above.pop()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPhase {
    RootOnly,
    Nested,
}

/// What the coordinator did with a back intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackDisposition {
    /// Popped one entry; the intent is swallowed and the new top is shown.
    Consumed(NavigationEntry),
    /// At the root; the overlay must handle the intent.
    Forward,
}

#[derive(Debug)]
pub struct StackCoordinator {
    stack: InnerStack,
}

impl StackCoordinator {
    pub fn new(root: NavigationEntry) -> Self {
        Self {
            stack: InnerStack::new(root),
        }
    }

    pub fn stack(&self) -> &InnerStack {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn current(&self) -> NavigationEntry {
        self.stack.top()
    }

    pub fn phase(&self) -> StackPhase {
        if self.can_pop() {
            StackPhase::Nested
        } else {
            StackPhase::RootOnly
        }
    }

    pub fn can_pop(&self) -> bool {
        self.stack.depth() > 1
    }

    /// Push `entry` and return it as the entry to render.
    pub fn push(&mut self, entry: NavigationEntry) -> NavigationEntry {
        self.stack.push(entry);
        debug!(%entry, depth = self.depth(), "pushed");
        entry
    }

    /// Pop the top entry and return the new top. Does nothing at the root.
    pub fn pop(&mut self) -> Option<NavigationEntry> {
        if !self.can_pop() {
            return None;
        }
        let removed = self.stack.pop()?;
        let top = self.current();
        debug!(%removed, %top, depth = self.depth(), "popped");
        Some(top)
    }

    pub fn handle_back(&mut self) -> BackDisposition {
        match self.pop() {
            Some(top) => BackDisposition::Consumed(top),
            None => BackDisposition::Forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavigationEntry::*;

    #[test]
    fn test_new_coordinator_is_root_only() {
        let coord = StackCoordinator::new(Page1);
        assert_eq!(coord.depth(), 1);
        assert_eq!(coord.current(), Page1);
        assert_eq!(coord.phase(), StackPhase::RootOnly);
        assert!(!coord.can_pop());
    }

    #[test]
    fn test_depth_grows_with_each_push() {
        for n in 0..6 {
            let mut coord = StackCoordinator::new(Page1);
            for i in 0..n {
                coord.push([Page1, Page2, Page3][i % 3]);
            }
            assert_eq!(coord.depth(), 1 + n);
            assert_eq!(coord.can_pop(), coord.depth() > 1);
        }
    }

    #[test]
    fn test_duplicates_are_independent_entries() {
        let mut coord = StackCoordinator::new(Page1);
        coord.push(Page2);
        coord.push(Page2);
        assert_eq!(coord.depth(), 3);
        assert_eq!(coord.pop(), Some(Page2));
        assert_eq!(coord.pop(), Some(Page1));
    }

    #[test]
    fn test_pop_at_root_is_noop() {
        let mut coord = StackCoordinator::new(Page1);
        assert_eq!(coord.pop(), None);
        assert_eq!(coord.depth(), 1);
        assert_eq!(coord.current(), Page1);
    }

    #[test]
    fn test_phase_transitions() {
        let mut coord = StackCoordinator::new(Page1);
        coord.push(Page2);
        assert_eq!(coord.phase(), StackPhase::Nested);
        coord.push(Page3);
        assert_eq!(coord.phase(), StackPhase::Nested);
        coord.pop();
        assert_eq!(coord.phase(), StackPhase::Nested);
        coord.pop();
        assert_eq!(coord.phase(), StackPhase::RootOnly);
        coord.pop();
        assert_eq!(coord.phase(), StackPhase::RootOnly);
    }

    #[test]
    fn test_handle_back_consumes_until_root() {
        let mut coord = StackCoordinator::new(Page1);
        coord.push(Page2);
        coord.push(Page3);
        assert_eq!(coord.handle_back(), BackDisposition::Consumed(Page2));
        assert_eq!(coord.handle_back(), BackDisposition::Consumed(Page1));
        assert_eq!(coord.handle_back(), BackDisposition::Forward);
        assert_eq!(coord.handle_back(), BackDisposition::Forward);
        assert_eq!(coord.depth(), 1);
    }

    #[test]
    fn test_iter_lists_root_first() {
        let mut coord = StackCoordinator::new(Page2);
        coord.push(Page3);
        coord.push(Page1);
        let entries: Vec<_> = coord.stack().iter().collect();
        assert_eq!(entries, vec![Page2, Page3, Page1]);
    }
}
