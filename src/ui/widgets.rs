//! Status bar shown below the leaderboard.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;

/// Status bar widget
pub struct StatusBar<'a> {
    endpoint: &'a str,
    fetched_at: Option<DateTime<Utc>>,
    bookmark_count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        endpoint: &'a str,
        fetched_at: Option<DateTime<Utc>>,
        bookmark_count: usize,
        theme: &'a Theme,
    ) -> Self {
        StatusBar {
            endpoint,
            fetched_at,
            bookmark_count,
            theme,
        }
    }

    /// Plain text of the status line
    pub fn text(&self) -> String {
        let fetched = match self.fetched_at {
            Some(at) => format!("updated {}", at.with_timezone(&Local).format("%H:%M:%S")),
            None => "fetching".to_string(),
        };
        format!(
            "{} | {} | {} bookmarked | [h] Help [q] Quit",
            self.endpoint, fetched, self.bookmark_count
        )
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(self.text(), self.theme.muted_style()));
        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
