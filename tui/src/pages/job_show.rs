//! The job detail page: the same job card as the application page,
//! without the application overview.

use jobdeck_core::format::{dateparse, salary_with_period};
use jobdeck_types::Job;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use crate::theme::{Glyphs, Palette};

pub fn draw(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs, job: &Job) {
    let mut lines = vec![
        Line::from(Span::styled(job.title.clone(), palette.heading())),
        Line::from(vec![
            Span::styled(job.company_name.clone(), palette.value()),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", glyphs.location_marker, job.location),
                palette.label(),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                salary_with_period(job.start_salary, job.end_salary, &job.salary_type),
                palette.value(),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", glyphs.bullet, job.job_type),
                palette.label(),
            ),
            Span::raw("  "),
            Span::styled(
                format!("deadline {}", dateparse(&job.expired_at)),
                palette.label(),
            ),
        ]),
        Line::default(),
    ];
    for row in job.description.lines() {
        lines.push(Line::from(Span::styled(row.to_string(), palette.value())));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press c for comments, Esc to go back.",
        palette.label(),
    )));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(job.company_name.clone())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}
