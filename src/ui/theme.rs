//! Theme configuration for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub border: Color,
    pub title: Color,
    pub points: Color,
    pub bookmarked: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::Gray,
            highlight_bg: Color::Rgb(60, 60, 80),
            highlight_fg: Color::White,
            border: Color::Rgb(100, 100, 120),
            title: Color::Cyan,
            points: Color::Yellow,
            bookmarked: Color::Green,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Base surface style used to paint widget backgrounds
    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Get style for highlighted/selected items
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get style for titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text such as the placeholder and key hints
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn points_style(&self) -> Style {
        Style::default()
            .fg(self.points)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the bookmark toggle, depending on membership
    pub fn bookmark_style(&self, bookmarked: bool) -> Style {
        if bookmarked {
            Style::default()
                .fg(self.bookmarked)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
                .fg(self.title)
                .add_modifier(Modifier::UNDERLINED)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }
}
