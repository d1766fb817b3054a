use crate::themes::Theme;
use history_core::formatting::format_count;
use history_data::aggregates::HistorySummary;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the dashboard title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Headline figures in `[ N videos | M channels | first → last ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Summary figures, `None` when the history is empty.
    pub summary: Option<&'a HistorySummary>,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(summary: Option<&'a HistorySummary>, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        let info_line = match self.summary {
            Some(summary) => Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(format_count(summary.total_records as u64), self.theme.value),
                Span::styled(" videos | ", self.theme.label),
                Span::styled(
                    format_count(summary.distinct_channels as u64),
                    self.theme.value,
                ),
                Span::styled(" channels | ", self.theme.label),
                Span::styled(
                    format!("{} → {}", summary.first_date, summary.last_date),
                    self.theme.value,
                ),
                Span::styled(" ]", self.theme.label),
            ]),
            None => Line::from(Span::styled("[ no watch history ]", self.theme.dim)),
        };

        vec![
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" WATCH HISTORY DASHBOARD ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            info_line,
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
