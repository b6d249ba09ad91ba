mod app;
mod config;
mod logging;
mod sheet;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg = config::load_config()?;

    if std::env::args().skip(1).any(|arg| arg == "--write-config") {
        let path = config::save_config(&cfg)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let _log_guard = logging::init(&cfg.logging)?;
    tracing::info!(root = %cfg.sheet.root, "starting");

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });
    drop(event_tx);

    state.push_activity(
        ActivityKind::Info,
        "Press Enter or click \"Open sheet\" to present the sheet.".to_string(),
    );
    state.push_activity(
        ActivityKind::Info,
        "Inside the sheet, Esc goes back; at the first page it closes the sheet.".to_string(),
    );

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::Bell => {
                    let _ = io::stdout().write_all(b"\x07");
                    let _ = io::stdout().flush();
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            tracing::info!("quit requested");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
