//! Terminal User Interface components for the leaderboard.

mod help;
pub mod leaderboard;
mod theme;
pub mod widgets;

pub use help::HelpOverlay;
pub use theme::Theme;
