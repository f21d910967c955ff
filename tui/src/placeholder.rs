//! The three placeholder views shared by every page: preloader,
//! network error, and no content. Each page renders exactly one of
//! these or its content view, never more.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::theme::{Glyphs, Palette};

fn centered_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::vertical(1))
}

/// Loading placeholder with a spinner.
pub fn preloader(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs, tick: usize) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Loading...", glyphs.spinner_frame(tick)),
            Style::default().fg(palette.accent),
        )),
        Line::from(Span::styled(
            "Fetching the latest data.",
            palette.label(),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(centered_block(palette));
    frame.render_widget(widget, area);
}

/// Network-error placeholder.
pub fn network_error(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Network error", glyphs.warning),
            Style::default().fg(palette.error),
        )),
        Line::from(Span::styled(
            "Something went wrong talking to the server. Press r to retry.",
            palette.label(),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(centered_block(palette));
    frame.render_widget(widget, area);
}

/// No-content placeholder with a page-supplied message.
pub fn no_content(frame: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let lines = vec![
        Line::from(Span::styled("Nothing here", palette.heading())),
        Line::from(Span::styled(message.to_string(), palette.label())),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(centered_block(palette));
    frame.render_widget(widget, area);
}
