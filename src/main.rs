//! # Marquee CLI Entry Point
//!
//! Marquee opens with a splash banner, then drops into a searchable menu:
//! type a query, press Enter, pick a result. The interesting machinery is
//! in the library (widget layer, focus and cursor handling, state
//! machine); this file owns the terminal session and the event loop.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: built-in catalog, "Marquee" banner, 2 second splash
//! marquee
//!
//! # Pick a palette and shorten the splash
//! marquee --theme mono --splash-ms 500
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` / `Esc` - quit (ignored while typing in the search box)
//! - `Enter` - submit the query / activate the selected result
//! - `Up` / `Down` - move between the search box and the result rows
//! - `n` - jump back to the search box
//! - Mouse: click the search box or a result row to focus it

use marquee::search::{CatalogProvider, SearchError, SearchProvider, SEARCH_TIMEOUT};
use marquee::ui;
use marquee::ui::app::{AppAction, AppEvent};
use marquee::ui::theme::Theme;
use marquee::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read input event")?))
        } else {
            Ok(None)
        }
    }
}

/// Marquee - splash screen, search box, results menu
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A splash-screen + searchable-menu terminal application", long_about = None)]
struct Args {
    /// Color theme name (see `ui::theme::Theme::all`)
    #[arg(short, long, value_name = "NAME", default_value = "Classic")]
    theme: String,

    /// Text rendered as the splash banner
    #[arg(long, value_name = "TEXT", default_value = "Marquee")]
    title: String,

    /// Splash screen duration in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    splash_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let theme = Theme::by_name(&args.theme)
        .with_context(|| {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            format!("Unknown theme '{}'. Available: {}", args.theme, names.join(", "))
        })?
        .clone();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args, theme).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args, theme: Theme) -> Result<()> {
    let provider: Arc<dyn SearchProvider> =
        Arc::new(CatalogProvider::builtin().context("Failed to load the built-in catalog")?);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme, args.title);
    let mut event_reader = CrosstermEventReader;

    let run_result = run_app(
        &mut terminal,
        &mut app,
        provider,
        &mut event_reader,
        Duration::from_millis(args.splash_ms),
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Run the cooperative event loop: drain due timers and finished lookups,
/// render, then poll input with a short timeout so the splash timer and
/// in-flight lookups keep the screen live even when no keys arrive.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    provider: Arc<dyn SearchProvider>,
    event_reader: &mut dyn EventReader,
    splash_delay: Duration,
) -> Result<()> {
    // The splash transition is scheduled once at startup; user input
    // cannot cancel it.
    let mut splash_deadline = Some(Instant::now() + splash_delay);

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    loop {
        if let Some(deadline) = splash_deadline {
            if Instant::now() >= deadline {
                splash_deadline = None;
                app.handle_event(AppEvent::SplashElapsed);
            }
        }

        // Completions reported back into the loop by search tasks.
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = event_reader.read_event(Duration::from_millis(100))?;

        if let Some(event) = event {
            let action = match event {
                Event::Key(key) => app.handle_event(AppEvent::Key(key)),
                Event::Mouse(mouse) => app.handle_event(AppEvent::Mouse(mouse)),
                _ => None,
            };
            if let Some(AppAction::BeginSearch { seq, query }) = action {
                start_search(Arc::clone(&provider), seq, query, tx.clone());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run one lookup off the loop thread and report its completion back as an
/// event. A lookup that outlives [`SEARCH_TIMEOUT`] is abandoned and
/// reported as a timeout; there is no retry.
fn start_search(
    provider: Arc<dyn SearchProvider>,
    seq: u64,
    query: String,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let lookup = tokio::task::spawn_blocking(move || provider.search(&query));
        let result = match tokio::time::timeout(SEARCH_TIMEOUT, lookup).await {
            Err(_) => Err(SearchError::Timeout(SEARCH_TIMEOUT)),
            Ok(Err(join_error)) => Err(SearchError::Fetch(join_error.to_string())),
            Ok(Ok(result)) => result,
        };
        // The receiver is gone only when the loop already exited.
        let _ = tx.send(AppEvent::SearchDone { seq, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn test_app() -> App {
        App::new(Theme::default_theme().clone(), "Test")
    }

    #[test]
    fn test_mock_event_reader() {
        let events = vec![key_event(KeyCode::Char('a')), key_event(KeyCode::Enter)];

        let mut reader = MockEventReader::new(events);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_run_app_quits_on_q_during_the_splash() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        let provider: Arc<dyn SearchProvider> = Arc::new(CatalogProvider::from_titles(["Alpha"]));
        let mut reader = MockEventReader::new(vec![key_event(KeyCode::Char('q'))]);

        // A long splash: 'q' arrives while the banner is still up.
        run_app(
            &mut terminal,
            &mut app,
            provider,
            &mut reader,
            Duration::from_secs(3600),
        )
        .await
        .unwrap();

        assert!(app.should_quit);
        assert_eq!(app.phase(), marquee::ui::app::Phase::Splash);
    }

    #[tokio::test]
    async fn test_run_app_fires_the_splash_timer_first() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        let provider: Arc<dyn SearchProvider> = Arc::new(CatalogProvider::from_titles(["Alpha"]));
        let mut reader = MockEventReader::new(vec![key_event(KeyCode::Esc)]);

        run_app(
            &mut terminal,
            &mut app,
            provider,
            &mut reader,
            Duration::ZERO,
        )
        .await
        .unwrap();

        // The zero-delay splash elapsed before Esc was read.
        assert_eq!(app.phase(), marquee::ui::app::Phase::Interactive);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["marquee"]);
        assert_eq!(args.theme, "Classic");
        assert_eq!(args.title, "Marquee");
        assert_eq!(args.splash_ms, 2000);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from(["marquee", "--theme", "mono", "--splash-ms", "250"]);
        assert_eq!(args.theme, "mono");
        assert_eq!(args.splash_ms, 250);
    }
}
