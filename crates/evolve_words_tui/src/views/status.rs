use super::ACCENT;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use std::path::Path;

/// The top bar: vocabulary size, editable target, progenitor, generation.
pub struct StatusBarWidget<'a> {
    /// `None` while the vocabulary is still loading.
    pub vocabulary_size: Option<usize>,
    pub vocabulary_source: Option<&'a Path>,
    pub target_input: &'a str,
    pub progenitor: Option<&'a str>,
    pub generation: u64,
    pub running: bool,
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let button_style = if self.running {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        };
        let landscape = match (self.vocabulary_size, self.vocabulary_source) {
            (Some(n), Some(source)) => {
                format!("Fitness landscape size: {n} words ({})", source.display())
            }
            (Some(n), None) => format!("Fitness landscape size: {n} words"),
            (None, _) => "Loading...".to_string(),
        };
        let line = Line::from(vec![
            Span::styled(" Evolve! [Enter] ", button_style),
            sep.clone(),
            Span::raw(landscape),
            sep.clone(),
            Span::raw("Target population size: "),
            Span::styled(
                format!("{}▏", self.target_input),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
            sep.clone(),
            Span::raw(format!("Progenitor: {}", self.progenitor.unwrap_or("?"))),
            sep,
            Span::raw(format!("Generation: {}", self.generation)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(widget: StatusBarWidget<'_>) -> String {
        let area = Rect::new(0, 0, 160, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_shows_vocabulary_source() {
        let text = render(StatusBarWidget {
            vocabulary_size: Some(3),
            vocabulary_source: Some(Path::new("/tmp/words")),
            target_input: "3000",
            progenitor: Some("a"),
            generation: 7,
            running: false,
        });
        assert!(text.contains("Fitness landscape size: 3 words (/tmp/words)"));
        assert!(text.contains("Progenitor: a"));
    }

    #[test]
    fn test_status_before_loading() {
        let text = render(StatusBarWidget {
            vocabulary_size: None,
            vocabulary_source: None,
            target_input: "",
            progenitor: None,
            generation: 0,
            running: false,
        });
        assert!(text.contains("Loading..."));
    }
}
