//! Leaderboard panel: the "Top 5 Racers" list with bookmark toggles.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use crate::data::{BookmarkSet, LoadState, Racer};

pub const SECTION_TITLE: &str = "Top 5 Racers";
pub const LOADING_PLACEHOLDER: &str = "Loading...";
/// Name of the per-row toggle control, shown in help and hints
pub const BOOKMARK_CONTROL_NAME: &str = "Bookmark Racer";

/// What a single leaderboard row displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacerRow<'a> {
    pub racer: &'a Racer,
    pub bookmarked: bool,
    pub bookmark_label: &'static str,
}

/// Project racers into rows, keeping server order
pub fn leaderboard_rows<'a>(racers: &'a [Racer], bookmarks: &BookmarkSet) -> Vec<RacerRow<'a>> {
    racers
        .iter()
        .map(|racer| RacerRow {
            racer,
            bookmarked: bookmarks.contains(&racer.id),
            bookmark_label: bookmarks.label_for(&racer.id),
        })
        .collect()
}

/// Leaderboard panel widget
pub struct LeaderboardView<'a> {
    state: &'a LoadState,
    bookmarks: &'a BookmarkSet,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> LeaderboardView<'a> {
    pub fn new(
        state: &'a LoadState,
        bookmarks: &'a BookmarkSet,
        selected: usize,
        theme: &'a Theme,
    ) -> Self {
        LeaderboardView {
            state,
            bookmarks,
            selected,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" 🏁 {SECTION_TITLE} "))
            .title_alignment(Alignment::Left)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style())
            .style(self.theme.surface_style());

        match self.state {
            LoadState::Loading => {
                let placeholder = Paragraph::new(LOADING_PLACEHOLDER)
                    .style(self.theme.muted_style())
                    .block(block);
                frame.render_widget(placeholder, area);
            }
            LoadState::Failed(err) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Failed to load racers",
                        self.theme.error_style(),
                    )),
                    Line::from(err.to_string()),
                ];
                let paragraph = Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .block(block);
                frame.render_widget(paragraph, area);
            }
            LoadState::Loaded(racers) if racers.is_empty() => {
                let empty = Paragraph::new("No racers")
                    .style(self.theme.muted_style())
                    .block(block);
                frame.render_widget(empty, area);
            }
            LoadState::Loaded(racers) => self.render_list(frame, area, block, racers),
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, block: Block, racers: &[Racer]) {
        let items: Vec<ListItem> = leaderboard_rows(racers, self.bookmarks)
            .into_iter()
            .enumerate()
            .map(|(rank, row)| {
                let summary = Line::from(vec![
                    Span::raw(format!("{}. ", rank + 1)),
                    Span::styled(row.racer.name.clone(), self.theme.title_style()),
                    Span::raw(" / "),
                    Span::styled(row.racer.country.clone(), self.theme.muted_style()),
                    Span::raw(" / "),
                    Span::styled(format!("{} pts", row.racer.points), self.theme.points_style()),
                ]);
                let toggle = Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        format!("[{}]", row.bookmark_label),
                        self.theme.bookmark_style(row.bookmarked),
                    ),
                ]);
                ListItem::new(vec![summary, toggle])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.highlight_style())
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected.min(racers.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
