//! The profile page.

use jobdeck_types::Profile;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use crate::theme::Palette;

fn field<'a>(palette: &Palette, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), palette.label()),
        Span::styled(value.to_string(), palette.value()),
    ])
}

pub fn draw(frame: &mut Frame, area: Rect, palette: &Palette, profile: &Profile) {
    let mut lines = vec![
        Line::from(Span::styled(profile.name.clone(), palette.heading())),
        Line::default(),
        field(palette, "Email:", &profile.email),
        field(palette, "Phone:", profile.phone.as_deref().unwrap_or("-")),
        field(palette, "Address:", profile.address.as_deref().unwrap_or("-")),
    ];
    if let Some(about) = &profile.about {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("About", palette.heading())));
        for row in about.lines() {
            lines.push(Line::from(Span::styled(row.to_string(), palette.value())));
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Profile")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}
