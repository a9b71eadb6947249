use anyhow::{Context, Result};
use clap::Parser;
use command_buttons::{app::App, config::Config, utils::files::get_app_data_path};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::Stdout, path::PathBuf};

/// A terminal demo of the command pattern: every button runs a command.
#[derive(Parser)]
#[command(author, version)]
pub struct Args {
    /// Read key bindings from this file instead of the default config location
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing()?;

    tracing::info!(
        "Started {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Loading config")?;

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);

    let res = app.run(&mut terminal);

    restore_terminal(terminal)?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}

#[tracing::instrument(skip())]
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    tracing::debug!("Setting up terminal");

    let mut stdout = std::io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture,
    )?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

#[tracing::instrument(skip(terminal))]
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture,
    )?;
    terminal.show_cursor()?;

    tracing::debug!("Terminal restored");

    Ok(())
}

/// Initializes the `tracing` system for logging.
fn init_tracing() -> Result<()> {
    let log_env = format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    let log_filename = format!("{}.log", env!("CARGO_PKG_NAME"));

    let log_file_path = if let Ok(dir) = get_app_data_path() {
        dir.join(log_filename)
    } else {
        let dir = PathBuf::from(".").join(format!(".{}", env!("CARGO_PKG_NAME")));
        std::fs::create_dir_all(&dir)?;
        dir.join(log_filename)
    };

    let log_file = std::fs::File::create(log_file_path)?;

    let filter = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(log_env))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));

    let subscriber = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(log_file)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
