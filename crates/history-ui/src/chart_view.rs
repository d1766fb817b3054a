//! Chart views: the top-channels bar list and the monthly bar chart.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use history_data::aggregates::{ChannelCount, MonthlyCount};

use crate::components::bars::{CountBar, CountBarConfig};
use crate::themes::Theme;

/// Render the ranked channels as horizontal count bars inside a bordered
/// block. Bars are scaled to the largest count in the ranking.
pub fn render_channel_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    channels: &[ChannelCount],
    theme: &Theme,
) {
    let max_count = channels.iter().map(|c| c.count).max().unwrap_or(0);

    // Shrink the bar to whatever width the area leaves after the label and
    // count columns; keep at least a stub so narrow terminals still render.
    let defaults = CountBarConfig::default();
    let label_width = defaults.label_width;
    let reserved = label_width as u16 + 12; // label + separator + count column
    let bar_width = area.width.saturating_sub(reserved + 2).min(defaults.bar_width);

    let lines: Vec<Line> = channels
        .iter()
        .map(|row| {
            let mut bar = CountBar::new(&row.channel, row.count, max_count, theme);
            bar.config.bar_width = bar_width;
            bar.to_line()
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        ),
        area,
    );
}

/// Render the monthly watch counts as a vertical bar chart.
///
/// Bars are 7 columns wide so the `"YYYY-MM"` label fits underneath; when
/// the area cannot hold every month, the most recent months win.
pub fn render_monthly_chart(
    frame: &mut Frame,
    area: Rect,
    months: &[MonthlyCount],
    theme: &Theme,
) {
    const BAR_WIDTH: u16 = 7;
    const BAR_GAP: u16 = 1;

    let inner_width = area.width.saturating_sub(2); // block borders
    let capacity = (inner_width / (BAR_WIDTH + BAR_GAP)).max(1) as usize;
    let visible = if months.len() > capacity {
        &months[months.len() - capacity..]
    } else {
        months
    };

    let bars: Vec<Bar> = visible
        .iter()
        .map(|m| {
            Bar::default()
                .value(m.count)
                .label(Line::from(m.month.clone()))
        })
        .collect();

    let title = if visible.len() < months.len() {
        format!(" Monthly Watch Count (last {} months) ", visible.len())
    } else {
        " Monthly Watch Count ".to_string()
    };

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(theme.bar_fill)
        .value_style(theme.value)
        .label_style(theme.label);

    frame.render_widget(chart, area);
}

// ── Tests ──────────────────────────────────────────────────────────────────────
