/// Side effects the main loop performs after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ring the terminal bell.
    Bell,
    Quit,
}
