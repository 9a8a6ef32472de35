use super::{panel, ACCENT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{BarChart, Row, Table, Widget};

/// Formats a count with thousands separators.
#[must_use]
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Table of unique word counts per word length.
pub struct SizeCountsWidget<'a> {
    pub counts: &'a [(usize, usize)],
}

impl<'a> Widget for SizeCountsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.counts.iter().map(|(size, count)| {
            Row::new(vec![size.to_string(), group_thousands(*count)])
        });
        Table::new(rows, [Constraint::Length(10), Constraint::Min(6)])
            .header(
                Row::new(vec!["Word Size", "Count"])
                    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            )
            .block(panel("Counts", false))
            .render(area, buf);
    }
}

/// Bar chart of the same counts.
pub struct SizeFrequencyWidget<'a> {
    pub counts: &'a [(usize, usize)],
}

impl<'a> Widget for SizeFrequencyWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<String> = self.counts.iter().map(|(size, _)| size.to_string()).collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .zip(self.counts)
            .map(|(label, (_, count))| (label.as_str(), *count as u64))
            .collect();
        BarChart::default()
            .block(panel("Word Size Frequency", false))
            .data(data.as_slice())
            .bar_width(3)
            .bar_gap(1)
            .bar_style(Style::default().fg(ACCENT))
            .value_style(Style::default().fg(Color::Black).bg(ACCENT))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(3000), "3,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_size_counts_render_rows() {
        let counts = [(1, 2), (2, 1500)];
        let area = Rect::new(0, 0, 24, 5);
        let mut buf = Buffer::empty(area);
        SizeCountsWidget { counts: &counts }.render(area, &mut buf);
        let rendered: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(rendered.contains("Word Size"));
        assert!(rendered.contains("1,500"));
    }
}
