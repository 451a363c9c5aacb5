/// Highlighted row of a list whose rows live in a view model.
///
/// The row count can change under the cursor when a reload lands, so every read
/// clamps against the current length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
}

impl ListCursor {
    /// Index of the highlighted row, or `None` for an empty list.
    pub fn selected(self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn select_previous(&mut self, len: usize) {
        if let Some(current) = self.selected(len) {
            self.selected = current.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if let Some(current) = self.selected(len) {
            self.selected = (current + 1).min(len - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}
