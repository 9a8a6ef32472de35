use super::{panel, ACCENT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Widget};

/// Survival percentage per generation, fixed to a 0-100% axis.
pub struct SurvivalRateWidget<'a> {
    pub history: &'a [f64],
}

impl<'a> Widget for SurvivalRateWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let points: Vec<(f64, f64)> = self
            .history
            .iter()
            .enumerate()
            .map(|(generation, rate)| (generation as f64, *rate))
            .collect();
        let last_generation = self.history.len().saturating_sub(1).max(1) as f64;

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT))
            .data(&points);

        Chart::new(vec![dataset])
            .block(panel("Survival Rate", false))
            .x_axis(
                Axis::default()
                    .title("Generation")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, last_generation])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format!("{}", last_generation as u64)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("%age")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 100.0])
                    .labels(vec![
                        Span::raw("0%"),
                        Span::raw("25%"),
                        Span::raw("50%"),
                        Span::raw("75%"),
                        Span::raw("100%"),
                    ]),
            )
            .render(area, buf);
    }
}
