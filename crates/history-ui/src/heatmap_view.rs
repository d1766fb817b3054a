//! Weekday × hour heatmap view.
//!
//! Renders the 7×24 pivot as a grid of coloured two-column cells with an
//! hour axis on top and weekday labels on the left. Cell colour follows the
//! theme's intensity ramp relative to the busiest cell.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use history_data::aggregates::WeekdayHourMatrix;

use crate::themes::Theme;

/// Display width of one hour cell in terminal columns.
const CELL_WIDTH: usize = 3;
/// Width of the weekday label column.
const LABEL_WIDTH: usize = 10;

/// Render the heatmap into `area`.
pub fn render_heatmap(frame: &mut Frame, area: Rect, matrix: &WeekdayHourMatrix, theme: &Theme) {
    let max = matrix.max_cell();

    let mut lines: Vec<Line> = Vec::with_capacity(10);

    // Hour axis.
    let mut axis = String::with_capacity(LABEL_WIDTH + 24 * CELL_WIDTH);
    axis.push_str(&" ".repeat(LABEL_WIDTH));
    for hour in 0..24 {
        axis.push_str(&format!("{hour:>2} "));
    }
    lines.push(Line::from(Span::styled(axis, theme.label)));

    // One row per weekday, Monday first.
    for (weekday, row) in matrix.rows() {
        let mut spans: Vec<Span> = Vec::with_capacity(25);
        spans.push(Span::styled(
            format!("{:<width$}", weekday, width = LABEL_WIDTH),
            theme.label,
        ));
        for count in row.iter() {
            let cell = if *count == 0 { " · " } else { "▇▇ " };
            spans.push(Span::styled(cell, theme.heat_style(*count, max)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(legend_line(theme, max));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Watch Heatmap (weekday × hour, UTC) "),
        ),
        area,
    );
}

/// Legend mapping the intensity ramp back to approximate counts.
fn legend_line(theme: &Theme, max: u64) -> Line<'static> {
    if max == 0 {
        return Line::from(Span::styled("no activity", theme.dim));
    }

    let mut spans = vec![Span::styled("  less ", theme.dim)];
    for ratio in [0.1, 0.3, 0.6, 1.0] {
        let count = (max as f64 * ratio).max(1.0) as u64;
        spans.push(Span::styled("▇▇ ", theme.heat_style(count, max)));
    }
    spans.push(Span::styled(
        format!("more (peak {max})"),
        theme.dim,
    ));
    Line::from(spans)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use history_core::models::WatchRecord;
    use history_data::aggregates::weekday_hour_matrix;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn matrix_with_one_record() -> WeekdayHourMatrix {
        let ts = Utc.with_ymd_and_hms(2023, 5, 1, 5, 0, 0).unwrap(); // Monday 05:00
        let record = WatchRecord::new("t".into(), None, "c".into(), ts);
        weekday_hour_matrix(&[record])
    }

    #[test]
    fn test_render_heatmap_does_not_panic() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let matrix = matrix_with_one_record();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_heatmap(frame, area, &matrix, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_heatmap_empty_matrix_does_not_panic() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let matrix = weekday_hour_matrix(&[]);

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_heatmap(frame, area, &matrix, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_legend_empty_matrix() {
        let theme = Theme::dark();
        let line = legend_line(&theme, 0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("no activity"));
    }

    #[test]
    fn test_legend_names_peak() {
        let theme = Theme::dark();
        let line = legend_line(&theme, 42);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("peak 42"));
    }
}
