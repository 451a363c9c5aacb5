/// Messages for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== Rows ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter: open a landmark, edit any other row.
    Confirm,

    // ========== CRUD ==========
    Add,
    Edit,
    Delete,
    /// Open the filter dialog of a list page.
    Filter,

    // ========== Landmark detail ==========
    UploadImage,
    DeleteImage,

    // ========== Settings ==========
    TogglePrev,
    ToggleNext,
}
