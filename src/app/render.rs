use crate::app::state::App;
use evolve_words_tui::views::{
    LogWidget, SizeCountsWidget, SizeFrequencyWidget, StatusBarWidget, SurvivalRateWidget,
    WordsWidget,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Status
                Constraint::Min(4),     // Words
                Constraint::Length(12), // Counts
                Constraint::Length(9),  // Log
                Constraint::Length(1),  // Footer
            ])
            .split(f.area());

        f.render_widget(
            StatusBarWidget {
                vocabulary_size: self.oracle.as_ref().map(|o| o.len()),
                vocabulary_source: self.vocabulary_source.as_deref(),
                target_input: &self.target_input,
                progenitor: self.progenitor.as_ref().map(|w| w.as_str()),
                generation: self.generation,
                running: self.is_running(),
            },
            rows[0],
        );

        f.render_widget(
            WordsWidget {
                words: self.latest.as_ref().map(|e| &e.unique_words),
                scroll: self.words_scroll,
            },
            rows[1],
        );

        let counts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(22),
                Constraint::Percentage(40),
                Constraint::Min(0),
            ])
            .split(rows[2]);
        f.render_widget(
            SizeCountsWidget {
                counts: &self.size_counts,
            },
            counts[0],
        );
        f.render_widget(
            SizeFrequencyWidget {
                counts: &self.size_counts,
            },
            counts[1],
        );
        let history: &[f64] = self
            .latest
            .as_ref()
            .map(|e| e.survival_history.as_slice())
            .unwrap_or_default();
        f.render_widget(SurvivalRateWidget { history }, counts[2]);

        f.render_widget(
            LogWidget {
                entries: &self.event_log,
            },
            rows[3],
        );

        f.render_widget(
            Paragraph::new(" Enter/e Evolve  0-9 Target  ↑↓ Scroll  q Quit")
                .style(Style::default().fg(Color::DarkGray)),
            rows[4],
        );
    }
}
