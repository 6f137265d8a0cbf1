//! perfscope — profiler details pane in the terminal.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use perfscope_tui::{app::App, input, persistence, sample_data, ui};

#[derive(Parser, Debug)]
#[command(name = "perfscope", about = "Profiler details pane: waterfall, call tree, flame graph")]
struct Cli {
    /// View to open with (waterfall, calltree, flamegraph). Defaults
    /// to the view from the last run.
    #[arg(long)]
    view: Option<String>,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing
    // the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("perfscope")
        .join("state.json");

    let mut app = App::new(sample_data::sample_recording());
    persistence::apply(&mut app, persistence::load(&state_path));
    if let Some(view) = &cli.view {
        app.details.set_default_view(view);
    }

    // Bring the subviews up before touching the terminal, so an init
    // failure prints normally.
    app.details.initialize().await?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, Duration::from_millis(cli.tick_ms));

    // Save state before exit.
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let teardown = app.details.destroy().await;
    result.and(teardown)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
