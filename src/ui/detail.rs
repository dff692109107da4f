use crate::app::{App, FetchStatus};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the detail report card, or the failure card after a failed fetch.
///
/// Nothing is drawn while there is no report to show.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 3 {
        return;
    }

    let (heading, body, body_style) = match &app.fetch_status {
        FetchStatus::Failed { error } => (
            "GAGAL MEMUAT DETAIL",
            error.as_str(),
            app.style("detail_error"),
        ),
        _ if !app.detail_text.is_empty() => (
            "LAPORAN DETAIL",
            app.detail_text.as_str(),
            app.style("detail_body"),
        ),
        _ => return,
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("▍", app.style("detail_heading")),
            Span::styled(heading, app.style("detail_heading")),
        ]),
        Line::from(Span::styled(body, body_style)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("detail_border")),
    );
    f.render_widget(paragraph, area);
}
