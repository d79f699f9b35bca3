use crate::ui::app::App;
use crate::ui::compose::ComposeSession;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the compose form until the user quits.
///
/// Requests are spawned on `runtime`; their results come back through the
/// same channel as terminal input.
pub fn run(session: ComposeSession, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(session, runtime, events.sender());

    tracing::info!("Compose form started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::GenerationFinished(outcome)) => app.on_generation_finished(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app aborts any request still in flight.
    drop(app);
    drop(events);
    drop(guard);
    tracing::info!("Compose form closed");
    Ok(())
}
