//! The bottom sheet and its independent navigation stack.

pub mod entry;
pub mod overlay;
pub mod stack;

pub use entry::NavigationEntry;
pub use overlay::{BackIntent, OverlayController, OverlayState, SheetTransition};
pub use stack::StackPhase;
