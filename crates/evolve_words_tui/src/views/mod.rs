pub mod counts;
pub mod log;
pub mod status;
pub mod survival;
pub mod words;

pub use counts::{SizeCountsWidget, SizeFrequencyWidget};
pub use log::{LogEntry, LogWidget};
pub use status::StatusBarWidget;
pub use survival::SurvivalRateWidget;
pub use words::WordsWidget;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

/// Panel accent used by every bordered view.
pub const ACCENT: Color = Color::Rgb(100, 149, 237);

pub(crate) fn panel(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::TOP)
        .border_style(style)
        .title(format!(" {title} "))
        .title_alignment(ratatui::layout::Alignment::Center)
}
