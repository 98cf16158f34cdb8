use std::fs::File;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::runtime::Runtime;

use typeahead::app::App;
use typeahead::cli::{Cli, Commands, HistoryAction, build_engine, history_store};
use typeahead::config::{Config, load_config, load_config_from_path};

/// How long the UI waits for input before checking for fetch results
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.command.is_none())?;

    let loaded = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let config = cli.apply_overrides(loaded.config);

    match &cli.command {
        Some(Commands::History { action }) => run_history(&config, action),
        Some(Commands::Query { text }) => run_query(&cli, &config, text),
        None => {
            let runtime = new_runtime()?;
            let engine = build_engine(&cli, &config, runtime.handle().clone())?;
            let app = App::new(engine).with_warning(loaded.warning);

            // Initialize terminal (handles raw mode, alternate screen, etc.)
            let terminal = ratatui::init();
            let _ = execute!(std::io::stdout(), EnableFocusChange);

            let result = run(terminal, app);

            let _ = execute!(std::io::stdout(), DisableFocusChange);
            ratatui::restore();
            drop(runtime);

            result
        }
    }
}

/// Logging is off unless RUST_LOG is set; the interactive UI only logs to a file
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let mut builder = env_logger::Builder::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if interactive => return Ok(()),
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }
    builder.init();
    Ok(())
}

fn new_runtime() -> Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    Ok(runtime)
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let mut dirty = true;

    loop {
        if app.tick() {
            dirty = true;
        }

        if dirty {
            terminal.draw(|frame| app.render(frame))?;
        }

        dirty = app.handle_events(EVENT_POLL_INTERVAL)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn run_query(cli: &Cli, config: &Config, text: &str) -> Result<()> {
    let runtime = new_runtime()?;
    let mut engine = build_engine(cli, config, runtime.handle().clone())?;

    engine.on_focus();
    engine.on_input_change(text);
    runtime.block_on(engine.settle());

    if let Some(message) = engine.error_message() {
        return Err(eyre!(message));
    }

    for item in engine.candidates() {
        match item.description() {
            Some(description) => println!("{}\t{}", item.label, description),
            None => println!("{}", item.label),
        }
    }
    Ok(())
}

fn run_history(config: &Config, action: &HistoryAction) -> Result<()> {
    let store = history_store(config);
    let key = &config.history.key;

    match action {
        HistoryAction::List => {
            for item in store.load(key) {
                println!("{}\t{}", item.id, item.label);
            }
        }
        HistoryAction::Remove { id } => {
            let found = store
                .load(key)
                .into_iter()
                .find(|item| item.id.to_string() == *id)
                .ok_or_else(|| eyre!("No history entry with id {}", id))?;
            store.remove(key, &found.id);
        }
        HistoryAction::Clear => store.clear(key),
    }
    Ok(())
}
