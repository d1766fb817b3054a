//! Ranked count tables (top channels / most-repeated titles).
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per ranked
//! key plus a highlighted totals row at the bottom.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use history_core::formatting::{format_count, format_share};

use crate::themes::Theme;

/// One row of a ranking table.
#[derive(Debug, Clone)]
pub struct RankingRow {
    /// Ranked key (channel name or video title).
    pub label: String,
    /// Occurrences of this key.
    pub count: u64,
}

/// Render a ranking table into `area`.
///
/// `key_header` names the ranked column (`"Channel"` or `"Title"`), and
/// `total_records` is the whole-history record count used for the share
/// column and the TOTAL row.
pub fn render_ranking_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    key_header: &str,
    rows: &[RankingRow],
    total_records: u64,
    theme: &Theme,
) {
    let header_cells = ["#", key_header, "Count", "Share"]
        .into_iter()
        .map(|h| Cell::from(h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let ranked_total: u64 = rows.iter().map(|r| r.count).sum();

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(row.label.clone()),
                Cell::from(format_count(row.count)),
                Cell::from(format_share(row.count, total_records)),
            ])
            .style(style)
        })
        .collect();

    // Totals row for the ranked subset, styled separately to stand out.
    let total_row = Row::new(vec![
        Cell::from("TOTAL").style(theme.table_total),
        Cell::from(format!("{} ranked", rows.len())),
        Cell::from(format_count(ranked_total)),
        Cell::from(format_share(ranked_total, total_records)),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(5),
        Constraint::Min(30),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when the history is empty.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No watch history found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Point --data-path at a Takeout watch-history.json export.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" watchlens "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
