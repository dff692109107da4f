use crate::app::App;
use crate::theme::category_role;
use crate::news::Headline;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Footer text describing the refresh cadence.
pub(super) fn refresh_caption(interval: Duration) -> String {
    let ms = interval.as_millis();
    let secs = if ms % 1000 == 0 {
        format!("{}", ms / 1000)
    } else {
        format!("{:.1}", interval.as_secs_f64())
    };
    format!("Diperbarui otomatis setiap {} detik", secs)
}

/// Render the live ticker card.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 3 {
        return;
    }

    let dot = if app.pulse_bright() {
        app.style("live_dot_bright")
    } else {
        app.style("live_dot_dim")
    };

    let category = match &app.headline {
        Headline::Live(item) => Some(item.category),
        Headline::Pending { .. } => None,
    };
    let chip = format!(" {} ", app.headline.chip_label().to_uppercase());

    let lines = vec![
        Line::from(vec![
            Span::styled("● ", dot),
            Span::styled("SIARAN LANGSUNG", app.style("live_label")),
            Span::raw("  "),
            Span::styled(chip, app.style(category_role(category))),
        ]),
        Line::from(vec![
            Span::raw(app.headline.tag()),
            Span::raw("  "),
            Span::styled(app.headline.title(), app.style("ticker_headline")),
        ]),
        Line::from(Span::styled(
            refresh_caption(app.tick_interval),
            app.style("ticker_footer"),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("ticker_border")),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_whole_seconds() {
        assert_eq!(
            refresh_caption(Duration::from_secs(2)),
            "Diperbarui otomatis setiap 2 detik"
        );
    }

    #[test]
    fn caption_fractional_seconds() {
        assert_eq!(
            refresh_caption(Duration::from_millis(1500)),
            "Diperbarui otomatis setiap 1.5 detik"
        );
    }
}
