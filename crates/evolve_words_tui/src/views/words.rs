use super::panel;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Widget, Wrap};
use std::collections::BTreeSet;

/// The surviving words, sorted and space separated.
pub struct WordsWidget<'a> {
    pub words: Option<&'a BTreeSet<String>>,
    pub scroll: u16,
}

impl<'a> Widget for WordsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self
            .words
            .map(|words| words.iter().map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default();
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(panel("Resulting words", true))
            .render(area, buf);
    }
}
