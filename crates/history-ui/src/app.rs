//! Main application state and TUI event loop for the watch-history dashboard.
//!
//! [`App`] owns the theme, the active tab, and the precomputed
//! [`DashboardData`]. The data is a one-shot batch transform; the event loop
//! only switches tabs and waits for quit.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use history_core::models::WatchRecord;
use history_data::aggregates::{
    self, ChannelCount, HistorySummary, MonthlyCount, TitleCount, WeekdayHourMatrix,
};

use crate::chart_view;
use crate::components::header::Header;
use crate::heatmap_view;
use crate::table_view::{self, RankingRow};
use crate::themes::Theme;

// ── ViewTab ───────────────────────────────────────────────────────────────────

/// Which tab the dashboard is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    /// Combined overview: monthly chart plus the top of both rankings.
    Overview,
    /// Full top-channels bar list.
    Channels,
    /// Monthly watch-count bar chart.
    Monthly,
    /// Weekday × hour heatmap.
    Heatmap,
    /// Most-repeated titles table.
    Titles,
}

impl ViewTab {
    /// All tabs in display order.
    pub const ALL: [ViewTab; 5] = [
        ViewTab::Overview,
        ViewTab::Channels,
        ViewTab::Monthly,
        ViewTab::Heatmap,
        ViewTab::Titles,
    ];

    /// Tab label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            ViewTab::Overview => "Overview",
            ViewTab::Channels => "Channels",
            ViewTab::Monthly => "Monthly",
            ViewTab::Heatmap => "Heatmap",
            ViewTab::Titles => "Titles",
        }
    }

    /// Map a `--view` setting string to its tab. `"dashboard"` and unknown
    /// names open the overview.
    pub fn from_name(name: &str) -> Self {
        match name {
            "channels" => ViewTab::Channels,
            "monthly" => ViewTab::Monthly,
            "heatmap" => ViewTab::Heatmap,
            "titles" => ViewTab::Titles,
            _ => ViewTab::Overview,
        }
    }

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ── DashboardData ─────────────────────────────────────────────────────────────

/// All derived aggregates, computed once up front.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Headline figures; `None` when the history is empty.
    pub summary: Option<HistorySummary>,
    /// Top channels ranking.
    pub top_channels: Vec<ChannelCount>,
    /// Monthly watch counts, ascending by month.
    pub monthly: Vec<MonthlyCount>,
    /// Weekday × hour pivot.
    pub matrix: WeekdayHourMatrix,
    /// Most-repeated titles ranking.
    pub top_titles: Vec<TitleCount>,
    /// Total record count (zero for an empty history).
    pub total_records: u64,
}

impl DashboardData {
    /// Run every aggregation pass over `records`.
    pub fn from_records(records: &[WatchRecord], channel_limit: usize, title_limit: usize) -> Self {
        Self {
            summary: aggregates::summary(records).ok(),
            top_channels: aggregates::top_channels(records, channel_limit),
            monthly: aggregates::monthly_counts(records),
            matrix: aggregates::weekday_hour_matrix(records),
            top_titles: aggregates::most_repeated_titles(records, title_limit),
            total_records: records.len() as u64,
        }
    }

    fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the watchlens TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Currently selected tab.
    pub tab: ViewTab,
    /// Precomputed aggregates.
    pub data: DashboardData,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, initial_view: &str, data: DashboardData) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            tab: ViewTab::from_name(initial_view),
            data,
        }
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the dashboard event loop until `q` / `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the terminal event loop stays on the current thread. `Tab`/arrow keys
    /// and `1`–`5` switch tabs.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        KeyCode::Tab | KeyCode::Right => self.tab = self.tab.next(),
                        KeyCode::BackTab | KeyCode::Left => self.tab = self.tab.prev(),
                        KeyCode::Char(c @ '1'..='5') => {
                            let idx = (c as u8 - b'1') as usize;
                            self.tab = ViewTab::ALL[idx];
                        }
                        _ => {}
                    }
                }
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.data.is_empty() {
            table_view::render_no_data(frame, area, &self.theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // header
                Constraint::Length(1), // tab bar
                Constraint::Min(5),    // body
            ])
            .split(area);

        let header = Header::new(self.data.summary.as_ref(), &self.theme);
        frame.render_widget(Paragraph::new(header.to_lines()), chunks[0]);

        frame.render_widget(Paragraph::new(self.tab_bar()), chunks[1]);

        self.render_body(frame, chunks[2]);
    }

    /// Tab bar line: `[1] Overview  [2] Channels  …` with the active tab
    /// highlighted.
    fn tab_bar(&self) -> Line {
        let mut spans: Vec<Span> = Vec::with_capacity(ViewTab::ALL.len() * 2);
        for (i, tab) in ViewTab::ALL.iter().enumerate() {
            let style = if *tab == self.tab {
                self.theme.tab_active
            } else {
                self.theme.tab_inactive
            };
            spans.push(Span::styled(
                format!("[{}] {}", i + 1, tab.title()),
                style,
            ));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        match self.tab {
            ViewTab::Overview => self.render_overview(frame, area),
            ViewTab::Channels => chart_view::render_channel_bars(
                frame,
                area,
                "Top Channels",
                &self.data.top_channels,
                &self.theme,
            ),
            ViewTab::Monthly => {
                chart_view::render_monthly_chart(frame, area, &self.data.monthly, &self.theme)
            }
            ViewTab::Heatmap => {
                heatmap_view::render_heatmap(frame, area, &self.data.matrix, &self.theme)
            }
            ViewTab::Titles => table_view::render_ranking_table(
                frame,
                area,
                "Most Repeated Titles",
                "Title",
                &self.title_rows(),
                self.data.total_records,
                &self.theme,
            ),
        }
    }

    /// Overview: monthly chart on top, channels and titles side by side below.
    fn render_overview(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        chart_view::render_monthly_chart(frame, rows[0], &self.data.monthly, &self.theme);

        let top_five: Vec<ChannelCount> =
            self.data.top_channels.iter().take(5).cloned().collect();
        chart_view::render_channel_bars(frame, bottom[0], "Top Channels", &top_five, &self.theme);

        let title_rows: Vec<RankingRow> = self
            .title_rows()
            .into_iter()
            .take(5)
            .collect();
        table_view::render_ranking_table(
            frame,
            bottom[1],
            "Most Repeated Titles",
            "Title",
            &title_rows,
            self.data.total_records,
            &self.theme,
        );
    }

    fn title_rows(&self) -> Vec<RankingRow> {
        self.data
            .top_titles
            .iter()
            .map(|t| RankingRow {
                label: t.title.clone(),
                count: t.count,
            })
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
