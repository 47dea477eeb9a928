//! UI widgets for the visualizer

pub mod table;

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::App;
use crate::application::store::StoreView;
use crate::domain::QuoteField;

/// Accent used for borders and the table header
pub const ACCENT: Color = Color::Rgb(3, 136, 252);
/// Background of table rows
pub const ROW_BACKGROUND: Color = Color::Rgb(193, 222, 247);

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Legend
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_main(frame, app, now, chunks[1]);
    draw_legend(frame, chunks[2]);
    draw_footer(frame, app, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.status_label();
    let status_color = match status {
        "Polling" => Color::Green,
        "Paused" => Color::Yellow,
        _ => Color::Gray,
    };

    let metrics = app.session().metrics();
    let header_text = format!(
        " Status: {} | Fetches: {} ok / {} failed | Discarded: {} | In flight: {}",
        status,
        metrics.successes,
        metrics.failures,
        metrics.discarded,
        app.session().in_flight()
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Quotes "),
        );

    frame.render_widget(header, area);
}

fn draw_main(frame: &mut Frame, app: &App, now: Instant, area: Rect) {
    let board = app.board().lock();

    match board.store().view() {
        StoreView::Failed(message) => {
            let lines: Vec<Line> = message.lines().map(Line::from).collect();
            let error = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title(" Error "));
            frame.render_widget(error, area);
        }
        StoreView::Ready(quotes) => {
            table::draw(frame, quotes, board.animator(), now, area);
        }
        StoreView::Loading => {
            let spinner = Paragraph::new(format!(" {} Loading quotes...", spinner_frame()))
                .style(Style::default().fg(ACCENT))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(spinner, area);
        }
    }
}

/// Every column header with its long name, the symbol column first
fn legend_text() -> String {
    std::iter::once("Name - Symbol".to_string())
        .chain(
            QuoteField::ALL
                .iter()
                .map(|field| format!("{} - {}", field.label(), field.description())),
        )
        .collect::<Vec<_>>()
        .join(" | ")
}

fn draw_legend(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(format!(" {}", legend_text()))
        .block(Block::default().borders(Borders::ALL).title(" Legend "));

    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = " q=quit p=pause/resume";
    let footer_text = match app.status_message.as_deref() {
        Some(status) => format!("{} | {}", keys, status),
        None => keys.to_string(),
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn spinner_frame() -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    let tick = chrono::Utc::now().timestamp_millis().unsigned_abs() / 120;
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}
