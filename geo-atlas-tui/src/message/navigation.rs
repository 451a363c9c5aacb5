/// Page list messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the highlighted page.
    Confirm,
}
