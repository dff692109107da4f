use crate::app::{App, Focus};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Borrow the transient message when present; hints are static
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.focus {
            Focus::Categories => {
                Cow::Borrowed("[←/→]pilih [Enter]filter [1-7]kategori [Tab]tombol [t]tema [q]uit")
            }
            Focus::Button => {
                Cow::Borrowed("[Enter/r]baca [1-7]kategori [Tab]filter [t]tema [q]uit")
            }
        }
    };

    f.render_widget(Paragraph::new(text).style(app.style("status_bar")), area);
}
