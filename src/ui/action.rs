use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Braille spinner shown while the detail fetch is in flight.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the read / fetch-detail button.
///
/// Dimmed and labelled with a spinner while a fetch is pending.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 3 {
        return;
    }

    let (label, style) = if app.fetch_status.is_loading() {
        let frame = SPINNER[app.pulse_frame % SPINNER.len()];
        (
            format!("{}  Mengambil detail…", frame),
            app.style("button_disabled"),
        )
    } else if app.focus == Focus::Button {
        ("▶  Baca & Ambil Detail".to_string(), app.style("button_focused"))
    } else {
        ("▶  Baca & Ambil Detail".to_string(), app.style("button"))
    };

    let paragraph = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(paragraph, area);
}
