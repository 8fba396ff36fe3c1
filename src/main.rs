//! Roadline TUI - terminal storefront for Roadline road-freight logistics
//!
//! A Ratatui-based TUI with a hero banner, services showcase, about page
//! and a contact form that posts inquiries to a third-party form relay.

mod app;
mod config;
mod contact;
mod platform;
mod relay;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roadline_tui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (TuiConfig::default(), Some(err)),
    };
    let mut app = App::new(&config)?;
    if let Some(err) = config_error {
        app.report_config_error(&err);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Cancel the relay request and banner timer before the runtime goes away
    app.contact.teardown();

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        let area = Rect::new(0, 0, term_size.width, term_size.height);

        // Update hero animation if active
        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(ui::splash::truck_travel(area));
        }

        // Apply relay responses and expired banners
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling during animation or while a request is in flight (16ms = ~60fps)
        let poll_duration = if in_splash || app.contact.is_locked() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Give spawned relay/timer tasks a chance to run between polls
        if !event::poll(poll_duration)? {
            tokio::task::yield_now().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Global quit: Ctrl+C
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            app.handle_key(key)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
