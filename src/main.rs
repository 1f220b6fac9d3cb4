use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use scrollquill::app::AppState;
use scrollquill::config::{Config, StorageMode};
use scrollquill::file::loader::{load_document, load_document_from_stdin};
use scrollquill::history::store::{FileStore, FrameStore, MemoryStore};
use scrollquill::history::{Debouncer, HistoryEngine, NavigationQueue, PositionStore};
use scrollquill::input::{InputHandler, KeyMap};
use scrollquill::theme::get_builtin_theme;
use scrollquill::ui::UI;

/// Origin used for documents read from stdin.
const STDIN_ORIGIN: &str = "<stdin>";

/// ScrollQuill - A terminal pager with undo/redo for your scroll position
#[derive(Parser)]
#[command(name = "scrollquill")]
#[command(version)]
#[command(about = "A terminal pager with undo/redo for your scroll position", long_about = None)]
struct Cli {
    /// File to view (omit to read from stdin)
    file: Option<PathBuf>,

    /// Number of history frames to keep
    #[arg(long)]
    capacity: Option<usize>,

    /// Minimum milliseconds between two recorded frames
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Persist history to the store file
    #[arg(long)]
    persist: bool,

    /// Store file for persisted history (implies --persist)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Hide the history bar
    #[arg(long)]
    no_bar: bool,

    /// Theme name
    #[arg(short, long)]
    theme: Option<String>,

    /// Write a log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    /// Applies command-line overrides on top of the config file.
    fn apply_to(&self, config: &mut Config) {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        if self.persist || self.store.is_some() {
            config.storage = StorageMode::File;
        }
        if let Some(store) = &self.store {
            config.storage_path = Some(store.clone());
        }
        if self.no_bar {
            config.show_bar = false;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Logs go to a file since the terminal is taken over by the UI.
fn init_logging(cli: &Cli) -> Result<()> {
    use simplelog::{Config as LogConfig, WriteLogger};

    let logfile = match &cli.log_file {
        Some(path) => path.clone(),
        None if cfg!(debug_assertions) => std::env::current_exe()
            .ok()
            .and_then(|x| x.parent().map(|x| x.to_path_buf()))
            .unwrap_or_default()
            .join("scrollquill.log"),
        None => return Ok(()),
    };

    let file = std::fs::File::create(&logfile)
        .with_context(|| format!("Failed to create log file {}", logfile.display()))?;
    WriteLogger::init(cli.log_level, LogConfig::default(), file)
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Set up a panic hook that restores the terminal before displaying panic information.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn frame_backend(config: &Config, origin: String) -> Result<Box<dyn FrameStore>> {
    match config.storage {
        StorageMode::Memory => Ok(Box::new(MemoryStore::new())),
        StorageMode::File => {
            let path = config
                .resolved_storage_path()
                .context("Could not determine the history store location")?;
            info!("persisting history for {} in {}", origin, path.display());
            Ok(Box::new(FileStore::new(path, origin)))
        }
    }
}

fn origin_for(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = Config::load();
    cli.apply_to(&mut config);
    let keymap = KeyMap::from_names(&config.backward_key, &config.forward_key)
        .context("Invalid history key binding in config")?;

    // Read the document before taking over the terminal; stdin may carry it.
    let (document, filename, origin, stdin_was_piped) = match &cli.file {
        Some(path) => (
            load_document(path)?,
            Some(path.display().to_string()),
            origin_for(path),
            false,
        ),
        None if !io::stdin().is_terminal() => (
            load_document_from_stdin()?,
            None,
            STDIN_ORIGIN.to_string(),
            true,
        ),
        None => anyhow::bail!("No file given and nothing piped on stdin"),
    };

    let mut store = PositionStore::new(config.capacity, frame_backend(&config, origin)?);
    let restored = store.restore();
    let engine = HistoryEngine::new(store, NavigationQueue::new());

    let mut state = AppState::new(document, engine, Debouncer::from_millis(config.debounce_ms));
    if let Some(name) = filename {
        state.set_filename(name);
    }
    state.set_show_bar(config.show_bar);
    state.set_enable_mouse(config.enable_mouse);
    state.set_scroll_step(config.scroll_step);
    state.report_restore(restored);

    let theme = get_builtin_theme(&config.theme).unwrap_or_else(|| {
        log::warn!("theme '{}' not found, using default-dark", config.theme);
        get_builtin_theme("default-dark").expect("default-dark is built in")
    });
    let ui = UI::new(theme);
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty(keymap)
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new(keymap)
    };

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Size the viewport before the first frame is taken.
    ui.render(&mut terminal, &mut state)?;
    state.record_initial_position();

    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state);

    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut AppState,
) -> Result<()> {
    loop {
        ui.render(terminal, state)?;

        match input_handler.poll_event(Duration::from_millis(100))? {
            Some(event) => {
                if input_handler.handle_event(event, state)? {
                    break;
                }
            }
            None => break,
        }
    }

    Ok(())
}
