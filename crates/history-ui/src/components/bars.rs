use crate::themes::Theme;
use history_core::formatting::format_count;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration controlling visual appearance of a count bar.
pub struct CountBarConfig {
    /// Width in terminal columns of the label column.
    pub label_width: usize,
    /// Total width in terminal columns of the bar portion.
    pub bar_width: u16,
    /// Character used to fill the occupied portion of the bar.
    pub filled_char: char,
    /// Character used to fill the remainder of the bar.
    pub empty_char: char,
}

impl Default for CountBarConfig {
    fn default() -> Self {
        Self {
            label_width: 24,
            bar_width: 40,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

/// Horizontal bar that shows one key's count relative to the largest count
/// in the same ranking.
///
/// Renders as a fixed-width label, a coloured fill + empty portion, and the
/// formatted count.
pub struct CountBar<'a> {
    /// Ranked key (channel or title).
    pub label: &'a str,
    /// Occurrences of this key.
    pub count: u64,
    /// Largest count in the ranking; scales the fill.
    pub max_count: u64,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Visual configuration.
    pub config: CountBarConfig,
}

impl<'a> CountBar<'a> {
    /// Construct a bar with the default configuration.
    pub fn new(label: &'a str, count: u64, max_count: u64, theme: &'a Theme) -> Self {
        Self {
            label,
            count,
            max_count,
            theme,
            config: CountBarConfig::default(),
        }
    }

    /// Render the bar as a [`Line`] suitable for embedding in any ratatui
    /// widget that accepts `Line` values.
    pub fn to_line(&self) -> Line<'a> {
        let filled = if self.max_count > 0 {
            ((self.count as f64 / self.max_count as f64) * self.config.bar_width as f64).round()
                as u16
        } else {
            0
        };
        let empty = self.config.bar_width.saturating_sub(filled);

        let filled_str: String = std::iter::repeat_n(self.config.filled_char, filled as usize)
            .collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        Line::from(vec![
            Span::styled(
                pad_label(self.label, self.config.label_width),
                self.theme.label,
            ),
            Span::raw(" "),
            Span::styled(filled_str, self.theme.bar_fill),
            Span::styled(empty_str, self.theme.bar_empty),
            Span::styled(format!(" {}", format_count(self.count)), self.theme.bar_label),
        ])
    }
}

/// Pad or truncate `label` to exactly `width` display columns.
///
/// Truncation is width-aware (double-width characters count as two columns)
/// and appends an ellipsis.
fn pad_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        let padding = width - label.width();
        return format!("{}{}", label, " ".repeat(padding));
    }

    let mut truncated = String::new();
    let mut used = 0usize;
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    let padding = width.saturating_sub(used + 1);
    format!("{}{}", truncated, " ".repeat(padding))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
