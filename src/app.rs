//! Main application logic and TUI event loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::{debug, info};

use crate::cli::AppConfig;
use crate::data::{BookmarkSet, LoadState, RacerClient, RacerSource, TopRacersQuery};
use crate::ui::{leaderboard::LeaderboardView, widgets::StatusBar, HelpOverlay, Theme};

/// How long to wait for terminal input before polling the fetch again
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    theme: Theme,
    endpoint: String,

    // Data
    query: TopRacersQuery,
    bookmarks: BookmarkSet,

    // UI State
    selected: usize,
    show_help: bool,

    // Exit flag
    should_quit: bool,
}

impl App {
    /// Create a new App and start fetching the leaderboard
    pub fn new(config: &AppConfig) -> Self {
        let client = RacerClient::new(config.base_url.clone(), config.timeout);
        let endpoint = client.endpoint();
        Self::with_source(client, endpoint)
    }

    /// Create an App fetching from an arbitrary source
    pub fn with_source<S: RacerSource>(source: S, endpoint: String) -> Self {
        App {
            theme: Theme::default(),
            endpoint,
            query: TopRacersQuery::activate(source),
            bookmarks: BookmarkSet::new(),
            selected: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// Pick up the fetch result if it arrived since the last tick
    fn tick(&mut self) {
        self.query.poll();
    }

    fn racer_count(&self) -> usize {
        self.query.state().data().map_or(0, |racers| racers.len())
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
                return;
            }
            _ => {}
        }

        // If help is shown, don't process other keys
        if self.show_help {
            return;
        }

        let count = self.racer_count();
        if count == 0 {
            return;
        }

        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('b') => {
                self.toggle_selected_bookmark();
            }
            _ => {}
        }
    }

    fn toggle_selected_bookmark(&mut self) {
        let Some(racer) = self
            .query
            .state()
            .data()
            .and_then(|racers| racers.get(self.selected))
        else {
            return;
        };
        let bookmarked = self.bookmarks.toggle(&racer.id);
        debug!(racer_id = %racer.id, bookmarked, "Toggled bookmark");
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Leaderboard
                Constraint::Length(2), // Status bar
            ])
            .split(size);

        let leaderboard = LeaderboardView::new(
            self.query.state(),
            &self.bookmarks,
            self.selected,
            &self.theme,
        );
        leaderboard.render(frame, chunks[0]);

        let status_bar = StatusBar::new(
            &self.endpoint,
            self.query.fetched_at(),
            self.bookmarks.len(),
            &self.theme,
        );
        status_bar.render(frame, chunks[1]);

        if self.show_help {
            let help = HelpOverlay::new(&self.theme);
            help.render(frame, size);
        }
    }

    #[allow(dead_code)] // Used in tests
    pub fn state(&self) -> &LoadState {
        self.query.state()
    }
}

/// Restore terminal to normal state
fn restore_terminal() {
    // Best effort cleanup - ignore errors since we may be in a panic
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<()> {
    info!(base_url = %config.base_url, "Opening leaderboard");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e).context("Failed to setup terminal");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to create terminal");
        }
    };

    let mut app = App::new(&config);

    let result = run_main_loop(&mut terminal, &mut app);

    // Always restore terminal, regardless of result
    restore_terminal();
    terminal.show_cursor().ok();

    info!(bookmarks = app.bookmarks.len(), "Closing leaderboard");
    result
}

/// Main application loop
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| app.render(f))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_input(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FetchError, Racer, BOOKMARK_LABEL, REMOVE_BOOKMARK_LABEL};
    use std::time::Instant;

    struct StubSource(Result<Vec<Racer>, FetchError>);

    impl RacerSource for StubSource {
        fn fetch(&self) -> Result<Vec<Racer>, FetchError> {
            self.0.clone()
        }
    }

    fn settled_app(result: Result<Vec<Racer>, FetchError>) -> App {
        let mut app = App::with_source(StubSource(result), "http://test/api/top-racers".into());
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.state().is_loading() {
            assert!(Instant::now() < deadline, "fetch never settled");
            std::thread::sleep(Duration::from_millis(5));
            app.tick();
        }
        app
    }

    fn podium() -> Vec<Racer> {
        vec![
            Racer::new("1", "Ana", "ES", 120),
            Racer::new("2", "Ben", "GB", 110),
            Racer::new("3", "Chloe", "FR", 90),
        ]
    }

    #[test]
    fn test_toggle_key_flips_label() {
        let mut app = settled_app(Ok(vec![Racer::new("1", "Ana", "ES", 120)]));
        assert_eq!(app.bookmarks.label_for("1"), BOOKMARK_LABEL);

        app.handle_input(KeyCode::Enter);
        assert_eq!(app.bookmarks.label_for("1"), REMOVE_BOOKMARK_LABEL);

        app.handle_input(KeyCode::Char(' '));
        assert_eq!(app.bookmarks.label_for("1"), BOOKMARK_LABEL);
    }

    #[test]
    fn test_navigation_wraps_and_targets_selected_racer() {
        let mut app = settled_app(Ok(podium()));

        app.handle_input(KeyCode::Up);
        assert_eq!(app.selected, 2);
        app.handle_input(KeyCode::Char('b'));
        assert!(app.bookmarks.contains("3"));
        assert!(!app.bookmarks.contains("1"));

        app.handle_input(KeyCode::Char('j'));
        assert_eq!(app.selected, 0);
        app.handle_input(KeyCode::Char('b'));
        assert!(app.bookmarks.contains("1"));
        assert!(app.bookmarks.contains("3"));
        assert!(!app.bookmarks.contains("2"));
    }

    #[test]
    fn test_input_ignored_while_loading() {
        struct NeverSource;
        impl RacerSource for NeverSource {
            fn fetch(&self) -> Result<Vec<Racer>, FetchError> {
                std::thread::sleep(Duration::from_secs(60));
                Ok(vec![])
            }
        }

        let mut app = App::with_source(NeverSource, "http://test/api/top-racers".into());
        app.handle_input(KeyCode::Down);
        app.handle_input(KeyCode::Enter);

        assert!(app.state().is_loading());
        assert_eq!(app.selected, 0);
        assert!(app.bookmarks.is_empty());
    }

    #[test]
    fn test_input_ignored_after_failure() {
        let mut app = settled_app(Err(FetchError::new("HTTP status 500")));
        app.handle_input(KeyCode::Enter);

        assert!(app.state().error().is_some());
        assert!(app.bookmarks.is_empty());
    }

    #[test]
    fn test_help_blocks_other_keys() {
        let mut app = settled_app(Ok(podium()));

        app.handle_input(KeyCode::Char('?'));
        assert!(app.show_help);
        app.handle_input(KeyCode::Enter);
        assert!(app.bookmarks.is_empty());

        app.handle_input(KeyCode::Esc);
        assert!(!app.show_help);
        app.handle_input(KeyCode::Enter);
        assert!(app.bookmarks.contains("1"));
    }

    #[test]
    fn test_quit() {
        let mut app = settled_app(Ok(vec![]));
        app.handle_input(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
