//! Main TUI runner - terminal lifecycle and event loop

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use outing_app::message::Message;
use outing_app::process::process_message;
use outing_app::signals;
use outing_app::AppState;
use outing_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the interactive guide until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }
    info!(
        "TUI started: {} characters, {} choices",
        state.index.len(),
        state.choices.len()
    );
    for (category, count) in state.index.category_counts() {
        debug!("  {}: {}", category, count);
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();
    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Messages from background tasks (dataset reload, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // A selection waits for a frame drawn with it before scrolling
        if state.scroll_sync.is_awaiting_layout() {
            if let Some(metrics) = state.page.card_metrics {
                process_message(state, Message::LayoutSettled(metrics), msg_tx);
                continue;
            }
        }

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx);
        }
    }
    Ok(())
}
