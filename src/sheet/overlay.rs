//! Lifecycle of the bottom sheet.
//!
//! The controller owns the coordinator it creates on `show()` and drops it on
//! `dismiss()`, so a hidden sheet never carries a stale stack. Back intents
//! always go to the coordinator first; the sheet only closes once the
//! coordinator reports that it is at its root.

use super::entry::NavigationEntry;
use super::stack::{BackDisposition, StackCoordinator, StackPhase};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible,
}

/// Source of a request to leave the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackIntent {
    HardwareBack,
    EdgeSwipe,
    /// Platform-level dismiss, e.g. a tap on the scrim above the sheet.
    ScrimDismiss,
}

impl BackIntent {
    pub fn label(self) -> &'static str {
        match self {
            Self::HardwareBack => "back",
            Self::EdgeSwipe => "swipe",
            Self::ScrimDismiss => "scrim",
        }
    }
}

/// Result of an overlay operation, telling the surface what to draw next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetTransition {
    Shown(NavigationEntry),
    AlreadyVisible,
    Pushed(NavigationEntry),
    Popped(NavigationEntry),
    Dismissed,
    Ignored,
}

#[derive(Debug)]
pub struct OverlayController {
    root: NavigationEntry,
    coordinator: Option<StackCoordinator>,
}

impl OverlayController {
    pub fn new(root: NavigationEntry) -> Self {
        Self {
            root,
            coordinator: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        if self.coordinator.is_some() {
            OverlayState::Visible
        } else {
            OverlayState::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.coordinator.is_some()
    }

    pub fn coordinator(&self) -> Option<&StackCoordinator> {
        self.coordinator.as_ref()
    }

    /// Depth of the inner stack, 0 while hidden.
    pub fn depth(&self) -> usize {
        self.coordinator.as_ref().map_or(0, StackCoordinator::depth)
    }

    pub fn current(&self) -> Option<NavigationEntry> {
        self.coordinator.as_ref().map(StackCoordinator::current)
    }

    pub fn phase(&self) -> Option<StackPhase> {
        self.coordinator.as_ref().map(StackCoordinator::phase)
    }

    pub fn show(&mut self) -> SheetTransition {
        if self.coordinator.is_some() {
            debug!("show ignored, sheet already visible");
            return SheetTransition::AlreadyVisible;
        }
        self.coordinator = Some(StackCoordinator::new(self.root));
        info!(root = %self.root, "sheet shown");
        SheetTransition::Shown(self.root)
    }

    pub fn dismiss(&mut self) -> SheetTransition {
        match self.coordinator.take() {
            Some(coord) => {
                info!(depth = coord.depth(), "sheet dismissed");
                SheetTransition::Dismissed
            }
            None => SheetTransition::Ignored,
        }
    }

    /// Close request from the close affordance or a forwarded back intent.
    /// Pops instead of closing while the inner stack has depth to give up.
    pub fn request_dismiss(&mut self) -> SheetTransition {
        let Some(coord) = self.coordinator.as_mut() else {
            return SheetTransition::Ignored;
        };
        if coord.can_pop() {
            match coord.pop() {
                Some(top) => SheetTransition::Popped(top),
                None => SheetTransition::Ignored,
            }
        } else {
            self.dismiss()
        }
    }

    pub fn handle_back_intent(&mut self, intent: BackIntent) -> SheetTransition {
        let Some(coord) = self.coordinator.as_mut() else {
            return SheetTransition::Ignored;
        };
        match coord.handle_back() {
            BackDisposition::Consumed(top) => {
                debug!(intent = intent.label(), %top, "back intent consumed by inner stack");
                SheetTransition::Popped(top)
            }
            BackDisposition::Forward => {
                debug!(intent = intent.label(), "back intent forwarded to overlay");
                self.request_dismiss()
            }
        }
    }

    pub fn push(&mut self, entry: NavigationEntry) -> SheetTransition {
        match self.coordinator.as_mut() {
            Some(coord) => SheetTransition::Pushed(coord.push(entry)),
            None => SheetTransition::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavigationEntry::*;

    fn shown() -> OverlayController {
        let mut overlay = OverlayController::new(Page1);
        overlay.show();
        overlay
    }

    #[test]
    fn test_starts_hidden() {
        let overlay = OverlayController::new(Page1);
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert_eq!(overlay.depth(), 0);
        assert!(overlay.current().is_none());
    }

    #[test]
    fn test_show_seeds_root() {
        let mut overlay = OverlayController::new(Page1);
        assert_eq!(overlay.show(), SheetTransition::Shown(Page1));
        assert_eq!(overlay.state(), OverlayState::Visible);
        assert_eq!(overlay.depth(), 1);
        assert_eq!(overlay.current(), Some(Page1));
        assert_eq!(overlay.phase(), Some(StackPhase::RootOnly));
    }

    #[test]
    fn test_show_with_configured_root() {
        let mut overlay = OverlayController::new(Page3);
        assert_eq!(overlay.show(), SheetTransition::Shown(Page3));
        assert_eq!(overlay.current(), Some(Page3));
    }

    #[test]
    fn test_pushes_add_depth() {
        let mut overlay = shown();
        for n in 1..=5 {
            assert_eq!(overlay.push(Page2), SheetTransition::Pushed(Page2));
            assert_eq!(overlay.depth(), 1 + n);
        }
    }

    #[test]
    fn test_back_intent_pops_while_nested() {
        let mut overlay = shown();
        overlay.push(Page2);
        overlay.push(Page3);
        let transition = overlay.handle_back_intent(BackIntent::HardwareBack);
        assert_eq!(transition, SheetTransition::Popped(Page2));
        assert_eq!(overlay.depth(), 2);
        assert_eq!(overlay.state(), OverlayState::Visible);
    }

    #[test]
    fn test_back_intent_at_root_dismisses() {
        let mut overlay = shown();
        let transition = overlay.handle_back_intent(BackIntent::HardwareBack);
        assert_eq!(transition, SheetTransition::Dismissed);
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(overlay.coordinator().is_none());
    }

    #[test]
    fn test_every_intent_kind_is_routed_the_same() {
        for intent in [
            BackIntent::HardwareBack,
            BackIntent::EdgeSwipe,
            BackIntent::ScrimDismiss,
        ] {
            let mut overlay = shown();
            overlay.push(Page2);
            assert_eq!(overlay.handle_back_intent(intent), SheetTransition::Popped(Page1));
            assert_eq!(overlay.handle_back_intent(intent), SheetTransition::Dismissed);
        }
    }

    #[test]
    fn test_dismiss_then_show_starts_fresh() {
        let mut overlay = shown();
        overlay.push(Page2);
        overlay.push(Page3);
        assert_eq!(overlay.dismiss(), SheetTransition::Dismissed);
        assert_eq!(overlay.show(), SheetTransition::Shown(Page1));
        assert_eq!(overlay.depth(), 1);
        assert_eq!(overlay.current(), Some(Page1));
    }

    #[test]
    fn test_scenario_back_through_three_pages() {
        let mut overlay = shown();
        overlay.push(Page2);
        overlay.push(Page3);
        assert_eq!(overlay.depth(), 3);

        overlay.handle_back_intent(BackIntent::HardwareBack);
        assert_eq!(overlay.depth(), 2);
        assert_eq!(overlay.current(), Some(Page2));

        overlay.handle_back_intent(BackIntent::HardwareBack);
        assert_eq!(overlay.depth(), 1);
        assert_eq!(overlay.current(), Some(Page1));

        overlay.handle_back_intent(BackIntent::HardwareBack);
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_close_affordance_at_root_dismisses() {
        let mut overlay = shown();
        assert_eq!(overlay.request_dismiss(), SheetTransition::Dismissed);
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_close_affordance_pops_while_nested() {
        let mut overlay = shown();
        overlay.push(Page2);
        assert_eq!(overlay.request_dismiss(), SheetTransition::Popped(Page1));
        assert_eq!(overlay.state(), OverlayState::Visible);
    }

    #[test]
    fn test_show_while_visible_keeps_stack() {
        let mut overlay = shown();
        overlay.push(Page2);
        assert_eq!(overlay.show(), SheetTransition::AlreadyVisible);
        assert_eq!(overlay.depth(), 2);
        assert_eq!(overlay.current(), Some(Page2));
    }

    #[test]
    fn test_operations_on_hidden_sheet_are_ignored() {
        let mut overlay = OverlayController::new(Page1);
        assert_eq!(overlay.push(Page2), SheetTransition::Ignored);
        assert_eq!(overlay.dismiss(), SheetTransition::Ignored);
        assert_eq!(overlay.request_dismiss(), SheetTransition::Ignored);
        assert_eq!(
            overlay.handle_back_intent(BackIntent::EdgeSwipe),
            SheetTransition::Ignored
        );
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_can_pop_matches_depth_over_random_walk() {
        let mut overlay = shown();
        // push, push, back, push, back, back, back
        let script = [true, true, false, true, false, false, false];
        for push in script {
            if push {
                overlay.push(Page3);
            } else {
                overlay.handle_back_intent(BackIntent::HardwareBack);
            }
            if let Some(coord) = overlay.coordinator() {
                assert_eq!(coord.can_pop(), coord.depth() > 1);
            }
        }
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }
}
