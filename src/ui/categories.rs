use crate::app::{App, Focus};
use crate::news::Category;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Chips on the first row; the rest go on the second.
const FIRST_ROW: usize = 4;

/// Render the category chip selector.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 7 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("FILTER KATEGORI", app.style("section_label"))),
        rows[0],
    );

    let (first, second) = Category::ALL.split_at(FIRST_ROW);
    render_row(f, app, first, rows[1]);
    render_row(f, app, second, rows[2]);
}

fn render_row(f: &mut Frame, app: &App, chips: &[Category], area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            chips
                .iter()
                .map(|c| Constraint::Length(c.label().len() as u16 + 4))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .spacing(1)
        .split(area);

    for (chip, cell) in chips.iter().zip(cells.iter()) {
        render_chip(f, app, *chip, *cell);
    }
}

fn render_chip(f: &mut Frame, app: &App, chip: Category, area: Rect) {
    if area.width < 3 {
        return;
    }

    let selected = chip == app.category;
    let under_cursor = app.focus == Focus::Categories && chip == app.chip_cursor;

    let text_style = if selected {
        app.style("chip_selected")
    } else {
        app.style("chip_normal")
    };
    let text_style = if under_cursor {
        text_style.add_modifier(Modifier::UNDERLINED)
    } else {
        text_style
    };
    let border_style = if selected || under_cursor {
        app.style("chip_border_focused")
    } else {
        app.style("chip_border")
    };

    let paragraph = Paragraph::new(Span::styled(chip.label(), text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}
