/// Dialog messages.
///
/// Which ones a dialog reacts to depends on the dialog and the focused field:
/// option keys only act on select fields, text keys only on text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Close,
    NextField,
    PrevField,
    /// ← on a select field.
    PrevOption,
    /// → on a select field.
    NextOption,
    /// Space on a checkbox.
    Toggle,
    Confirm,
    /// Switch between Cancel and the destructive button.
    ToggleConfirmFocus,
    Input(char),
    Backspace,
    /// Reset the focused field to empty.
    ClearField,
}
