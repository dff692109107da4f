//! Stat cards row: read count, platform, fetch status.

use crate::app::{App, FetchStatus};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the three stat cards side by side.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 12 || area.height < 4 {
        return;
    }

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(1)
        .split(area);

    let status_style = match app.fetch_status {
        FetchStatus::Idle => app.style("status_ready"),
        FetchStatus::Loading => app.style("status_loading"),
        FetchStatus::Failed { .. } => app.style("status_failed"),
    };

    render_card(
        f,
        app,
        cards[0],
        "Dibaca",
        &app.read_count().to_string(),
        app.style("stat_count"),
    );
    render_card(
        f,
        app,
        cards[1],
        "Platform",
        &app.platform,
        app.style("stat_platform"),
    );
    render_card(f, app, cards[2], "Status", app.status_label(), status_style);
}

fn render_card(f: &mut Frame, app: &App, area: Rect, label: &str, value: &str, accent: Style) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let value = truncate_to_width(value, inner_width);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(value, accent)),
        Line::from(Span::styled(label, app.style("stat_label"))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("stat_border")),
    );
    f.render_widget(paragraph, area);
}
