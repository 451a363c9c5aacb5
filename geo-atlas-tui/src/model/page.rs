use geo_atlas_client::GeoId;

use super::NavItemId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Countries,
    Regions,
    Cities,
    Landmarks,
    /// One landmark with its image panel.
    LandmarkDetail {
        landmark_id: GeoId,
    },
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Countries => "Countries",
            Self::Regions => "Regions",
            Self::Cities => "Cities",
            Self::Landmarks => "Landmarks",
            Self::LandmarkDetail { .. } => "Landmark",
            Self::Settings => "Settings",
        }
    }

    /// Whether Esc returns to a list page.
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Self::LandmarkDetail { .. })
    }

    pub fn nav_id(&self) -> NavItemId {
        match self {
            Self::Countries => NavItemId::Countries,
            Self::Regions => NavItemId::Regions,
            Self::Cities => NavItemId::Cities,
            Self::Landmarks | Self::LandmarkDetail { .. } => NavItemId::Landmarks,
            Self::Settings => NavItemId::Settings,
        }
    }
}
