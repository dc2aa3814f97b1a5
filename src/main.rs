use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing::{info, warn};

use viquill::config::Config;
use viquill::editor::state::EditorState;
use viquill::input::InputHandler;
use viquill::theme::get_builtin_theme;
use viquill::ui::UI;

/// viquill - A terminal-based modal text editor
#[derive(Parser)]
#[command(name = "viquill")]
#[command(version)]
#[command(about = "A terminal-based modal text editor with vi-style keybindings", long_about = None)]
struct Cli {
    /// Text file to open (omit to read from stdin if piped, or start with an empty buffer)
    file: Option<PathBuf>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Config file to use instead of ~/.config/viquill/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file to write to
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    // A bad config falls back to defaults; it is reported once logging is up.
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    let _log_guard = viquill::logging::init(&config.log_path(), &config.log_level)?;
    if let Some(err) = config_error {
        warn!("{:#}, using defaults", err);
    }

    // Load text BEFORE terminal setup, stdin may carry the document.
    let (text, filename, stdin_was_piped) = match &cli.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (text, Some(path.display().to_string()), false)
        }
        None if !io::stdin().is_terminal() => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            (text, None, true)
        }
        None => (String::new(), None, false),
    };

    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    let theme = get_builtin_theme(theme_name)
        .or_else(|| {
            warn!(theme = theme_name, "theme not found, using default-dark");
            get_builtin_theme("default-dark")
        })
        .context("Built-in default theme is missing")?;

    let mut state = EditorState::from_text(&text);
    if let Some(name) = filename {
        state.set_filename(name);
    }
    state.set_show_line_numbers(config.show_line_numbers);

    let mut ui = UI::new(theme);
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    info!(
        lines = state.buffer().line_count(),
        theme = ui.theme_name(),
        "editor started"
    );

    let result = run_event_loop(&mut terminal, &mut ui, &mut input_handler, &mut state);

    // Termion restores the terminal through Drop guards, but the cursor must be shown again.
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    info!("editor exited");
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
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
