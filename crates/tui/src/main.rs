//! Stonefire terminal GUI shell.
//!
//! A screen-based front end over the same domain services as the console
//! client.
//!
//! # Usage
//!
//! ```bash
//! stonefire-tui <dbname> <port> <user>
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod app;
mod events;
mod ui;

use std::io;

use clap::Parser;
use crossterm::{
    event::KeyEventKind,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use stonefire_store::config::StoreConfig;
use stonefire_store::db;

use app::App;
use events::{Event, EventHandler};

#[derive(Parser)]
#[command(name = "stonefire-tui")]
#[command(author, version, about = "Stonefire terminal ordering shell")]
struct Args {
    /// Database name
    dbname: String,
    /// PostgreSQL port on localhost
    port: u16,
    /// Database user
    user: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // The alternate screen owns stdout, so tracing goes to stderr and stays
    // quiet unless RUST_LOG says otherwise.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stonefire_tui=warn,stonefire_store=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig::new(args.dbname, args.port, args.user);

    let pool = match db::create_pool(&config.database_url()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error - unable to connect to database: {e}");
            eprintln!("Make sure PostgreSQL is running on this machine.");
            std::process::exit(1);
        }
    };
    tracing::info!(dbname = %config.dbname, "connected");

    let result = run(App::new(pool.clone())).await;

    pool.close().await;

    if let Err(e) = result {
        eprintln!("terminal error: {e}");
        std::process::exit(1);
    }
}

async fn run(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(250);

    let loop_result = event_loop(&mut terminal, &mut app, &events).await;

    // Restore the terminal even if the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    loop_result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match events.next() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                app.handle_key(key).await;
            }
            Ok(Event::Key(_) | Event::Tick | Event::Resize(_, _)) => {}
            Err(_) => break,
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
