/// Panel that receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Page list on the left.
    #[default]
    Navigation,
    /// Current page on the right.
    Content,
}

impl FocusPanel {
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}
