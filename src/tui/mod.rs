//! Terminal dashboard: three scrollable panels, a footer, and modal dialogs.

pub mod app;
mod components;
mod menu;
mod modal;
mod ui;

use std::{
    io::{stdout, Stdout},
    sync::Arc,
    time::Duration,
};

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;

use crate::{
    backend::{is_admin, spawn_worker},
    config::Config,
    error::Result,
};

pub async fn run(config: Config) -> Result<()> {
    let mouse = config.mouse;
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    if mouse {
        stdout().execute(EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, Arc::new(config)).await;

    disable_raw_mode()?;
    if mouse {
        stdout().execute(DisableMouseCapture)?;
    }
    stdout().execute(LeaveAlternateScreen)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Arc<Config>,
) -> Result<()> {
    let tick = Duration::from_millis(config.tick_rate_ms);
    let mut worker = spawn_worker(config);
    let admin = is_admin();
    tracing::info!(admin, "dashboard started");
    let mut app = App::new(admin);
    let mut event_stream = EventStream::new();

    while !app.should_exit {
        for request in app.take_requests() {
            if worker.tx.send(request).await.is_err() {
                tracing::error!("worker stopped; request dropped");
            }
        }
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        tokio::select! {
            Some(msg) = worker.rx.recv() => {
                app.handle_message(msg);
            }
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(tick) => {}
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
