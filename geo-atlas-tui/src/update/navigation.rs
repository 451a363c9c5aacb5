use crate::message::NavigationMessage;
use crate::model::state::DetailPage;
use crate::model::{App, FocusPanel, Page};

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                open_page(app, id.page());
                app.focus = FocusPanel::Content;
            }
        }
    }
}

/// Switches to `page` and starts its loads.
pub fn open_page(app: &mut App, page: Page) {
    log::debug!("Opening page {page:?}");
    if !page.is_detail_page() {
        app.detail = None;
    }
    app.current_page = page;
    app.navigation.follow(&app.current_page);
    mount_current_page(app);
}

/// Starts the loads of the current page.
///
/// A list page reloads its rows and its filter options, keeping the filter values
/// chosen earlier. The detail page gets a fresh view model.
pub fn mount_current_page(app: &mut App) {
    if let Page::LandmarkDetail { landmark_id } = app.current_page {
        let view = app.services.landmark_detail(landmark_id);
        app.runner.spawn(view.load());
        app.detail = Some(DetailPage::new(view));
        return;
    }

    let Some(page) = app.list_page() else {
        return;
    };
    app.runner.spawn(page.reload());
    let filter = page.filter();
    if let Some(cascade) = &filter.cascade {
        app.runner.spawn(cascade.initialize());
        if filter.selection.country_id.is_some() {
            app.runner.spawn(cascade.country_changed(&filter.selection));
        }
    }
}
