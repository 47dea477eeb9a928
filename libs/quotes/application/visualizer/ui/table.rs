//! Quote table widget - one row per symbol, cells tinted by the animator

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::{ACCENT, ROW_BACKGROUND};
use crate::application::highlight::HighlightAnimator;
use crate::domain::{QuoteField, QuoteRecord};

const NAME_WIDTH: u16 = 12;

/// Draw the quote table
pub fn draw(
    frame: &mut Frame,
    quotes: &[QuoteRecord],
    animator: &HighlightAnimator,
    now: Instant,
    area: Rect,
) {
    let header_style = Style::default()
        .fg(Color::White)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(
        std::iter::once("Name")
            .chain(QuoteField::ALL.iter().map(|field| field.label()))
            .map(Cell::from),
    )
    .style(header_style);

    let rows = quotes.iter().map(|quote| quote_row(quote, animator, now));

    let widths = std::iter::once(Constraint::Length(NAME_WIDTH))
        .chain(QuoteField::ALL.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(format!(" {} symbols ", quotes.len())),
        );

    frame.render_widget(table, area);
}

fn quote_row<'a>(quote: &'a QuoteRecord, animator: &HighlightAnimator, now: Instant) -> Row<'a> {
    let name = Cell::from(quote.display_symbol()).style(Style::default().fg(Color::Black));

    let cells = QuoteField::ALL.iter().map(move |&field| {
        let color = animator.color(&quote.symbol, field, now);
        Cell::from(quote.field(field)).style(Style::default().fg(color.into()))
    });

    Row::new(std::iter::once(name).chain(cells)).style(Style::default().bg(ROW_BACKGROUND))
}
