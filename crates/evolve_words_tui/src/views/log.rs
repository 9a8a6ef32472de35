use super::panel;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Widget};
use std::collections::VecDeque;

/// One line of the run log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub color: Color,
}

/// Tail of the log; the newest entries are always visible.
pub struct LogWidget<'a> {
    pub entries: &'a VecDeque<LogEntry>,
}

impl<'a> Widget for LogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = area.height.saturating_sub(1) as usize;
        let skip = self.entries.len().saturating_sub(visible);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .skip(skip)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.message.clone(), Style::default().fg(entry.color)),
                ]))
            })
            .collect();
        List::new(items).block(panel("Log", false)).render(area, buf);
    }
}
