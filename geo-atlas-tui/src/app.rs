//! Main loop

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::BackendEvent;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the draw / poll / update loop until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    mut events: UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    update::update(app, AppMessage::Start);

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // Key presses, 100ms timeout so background results show up promptly.
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        while let Ok(outcome) = events.try_recv() {
            update::update(app, AppMessage::Backend(outcome));
        }

        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
