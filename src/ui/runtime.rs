use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Mount the board, run the event loop until quit, then unmount.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let poll_interval = Duration::from_millis(config.view.tick_rate_ms);
    let mut app = App::new(config.defaults.initial_state(), config.view.clone());
    let events = EventHandler::new(poll_interval)?;
    tracing::info!(?poll_interval, "board mounted");

    let mut drawn_revision = None;
    let mut needs_redraw = true;
    loop {
        if needs_redraw || drawn_revision != Some(app.revision()) {
            terminal.draw(|frame| draw(frame, &app))?;
            drawn_revision = Some(app.revision());
            needs_redraw = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(poll_interval) {
            Ok(AppEvent::Key(key)) => {
                let focus = app.focus();
                handle_key(&mut app, key);
                // Focus changes do not touch the board revision
                needs_redraw = app.focus() != focus;
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Resize(_, _)) => needs_redraw = true,
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(final_state = ?app.board(), "board unmounted");
    drop(guard);
    Ok(())
}
