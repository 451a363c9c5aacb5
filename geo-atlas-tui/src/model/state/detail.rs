use geo_atlas_core::services::{DetailState, LandmarkDetailView};

/// The landmark detail page.
pub struct DetailPage {
    pub view: LandmarkDetailView,
    /// An image upload or removal is in flight.
    pub busy: bool,
}

impl DetailPage {
    pub fn new(view: LandmarkDetailView) -> Self {
        Self { view, busy: false }
    }

    /// Image actions need a loaded landmark and no request in flight.
    pub fn accepts_image_action(&self) -> bool {
        !self.busy && matches!(self.view.state(), DetailState::Loaded(_))
    }

    /// Whether the loaded landmark has an image to remove.
    pub fn has_image(&self) -> bool {
        match self.view.state() {
            DetailState::Loaded(details) => {
                details.uploaded_image_path.is_some() || details.image_url.is_some()
            }
            _ => false,
        }
    }
}
