//! Render functions for the TUI.
//!
//! Lays out the single screen top to bottom and hands each region to its widget.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{action, categories, detail, header, stats, status, ticker};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 48;
pub(super) const MIN_HEIGHT: u16 = 26;

/// Main render function.
///
/// Handles terminal size validation before rendering.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    f.render_widget(Block::default().style(app.style("background")), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Category chips
            Constraint::Length(6), // Ticker card
            Constraint::Length(4), // Stats row
            Constraint::Length(3), // Action button
            Constraint::Min(0),    // Detail card
            Constraint::Length(1), // Status bar
        ])
        .split(pad_horizontal(area, 1));

    header::render(f, app, chunks[0]);
    categories::render(f, app, chunks[1]);
    ticker::render(f, app, chunks[2]);
    stats::render(f, app, chunks[3]);
    action::render(f, app, chunks[4]);
    detail::render(f, app, chunks[5]);
    status::render(f, app, chunks[6]);
}

/// Shrink `area` by `pad` columns on each side.
fn pad_horizontal(area: Rect, pad: u16) -> Rect {
    let pad = pad.min(area.width / 2);
    Rect::new(
        area.x + pad,
        area.y,
        area.width.saturating_sub(pad * 2),
        area.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FetchStatus;
    use crate::config::Config;
    use crate::news::{catalog, Headline};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_all_sections() {
        let app = App::new(&Config::default());
        let text = screen_text(&app, 80, 32);
        assert!(text.contains("NEWSFLOW"));
        assert!(text.contains("FILTER KATEGORI"));
        assert!(text.contains("SIARAN LANGSUNG"));
        assert!(text.contains("Dibaca"));
        assert!(text.contains("Platform"));
        assert!(text.contains("Siap"));
        assert!(text.contains("Baca & Ambil Detail"));
        for cat in crate::news::Category::ALL {
            assert!(text.contains(cat.label()), "missing chip {}", cat);
        }
    }

    #[test]
    fn renders_live_headline() {
        let mut app = App::new(&Config::default());
        app.headline = Headline::Live(catalog()[4].decorated());
        let text = screen_text(&app, 100, 32);
        assert!(text.contains("[Tech] Teknologi AI Terus Berkembang Pesat di Indonesia"));
        assert!(text.contains("TECH"));
    }

    #[test]
    fn loading_state_shows_spinner_label() {
        let mut app = App::new(&Config::default());
        app.fetch_status = FetchStatus::Loading;
        let text = screen_text(&app, 80, 32);
        assert!(text.contains("Mengambil detail"));
        assert!(!text.contains("Baca & Ambil Detail"));
    }

    #[test]
    fn detail_card_only_when_text_present() {
        let mut app = App::new(&Config::default());
        let text = screen_text(&app, 80, 32);
        assert!(!text.contains("LAPORAN DETAIL"));

        app.detail_text = "Laporan mendalam: contoh.".to_string();
        let text = screen_text(&app, 80, 32);
        assert!(text.contains("LAPORAN DETAIL"));
        assert!(text.contains("Laporan mendalam: contoh."));
    }

    #[test]
    fn too_small_terminal_shows_notice() {
        let app = App::new(&Config::default());
        let text = screen_text(&app, 40, 12);
        assert!(text.contains("Terminal too small"));
    }
}
