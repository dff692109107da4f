use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Badge text next to the bell, hidden until the first read.
pub(super) fn badge_text(count: u64) -> Option<String> {
    (count > 0).then(|| format!(" {} ", count))
}

/// Render the title, subtitle and notification badge.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 2 {
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("NEWSFLOW", app.style("app_title"))),
        Line::from(Span::styled(app.subtitle.as_str(), app.style("subtitle"))),
    ]);
    f.render_widget(title, cols[0]);

    let mut spans = vec![Span::raw("🔔")];
    if let Some(badge) = badge_text(app.read_count()) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(badge, app.style("badge")));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        cols[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_at_zero() {
        assert_eq!(badge_text(0), None);
    }

    #[test]
    fn badge_shows_count() {
        assert_eq!(badge_text(1).as_deref(), Some(" 1 "));
        assert_eq!(badge_text(42).as_deref(), Some(" 42 "));
    }
}
