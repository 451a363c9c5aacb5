use super::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Countries,
    Regions,
    Cities,
    Landmarks,
    Settings,
}

impl NavItemId {
    /// Page opened by this entry.
    pub fn page(self) -> Page {
        match self {
            Self::Countries => Page::Countries,
            Self::Regions => Page::Regions,
            Self::Cities => Page::Cities,
            Self::Landmarks => Page::Landmarks,
            Self::Settings => Page::Settings,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Page list on the left.
#[derive(Debug)]
pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        let item = |id, label, icon| NavItem { id, label, icon };
        Self {
            items: vec![
                item(NavItemId::Countries, "Countries", "◎"),
                item(NavItemId::Regions, "Regions", "◇"),
                item(NavItemId::Cities, "Cities", "■"),
                item(NavItemId::Landmarks, "Landmarks", "▲"),
                item(NavItemId::Settings, "Settings", "≡"),
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }

    /// Highlights the entry that owns `page`; detail pages highlight their list.
    pub fn follow(&mut self, page: &Page) {
        let id = page.nav_id();
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
