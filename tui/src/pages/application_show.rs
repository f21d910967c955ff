//! The application detail page: job card and description on the left,
//! job overview and company information on the right.

use jobdeck_core::format::{dateparse, salary_range, salary_with_period};
use jobdeck_types::Application;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use crate::theme::{Glyphs, Palette};

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    application: &Application,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(46)])
        .split(area);

    draw_job_card(frame, columns[0], palette, glyphs, application);
    draw_sidebar(frame, columns[1], palette, application);
}

fn draw_job_card(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    application: &Application,
) {
    let job = &application.job;
    let mut lines = vec![
        Line::from(Span::styled(job.title.clone(), palette.heading())),
        Line::from(vec![
            Span::styled(job.company_name.clone(), palette.value()),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", glyphs.location_marker, job.location),
                palette.label(),
            ),
            Span::raw("  "),
            Span::styled(
                salary_range(job.start_salary, job.end_salary),
                palette.label(),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled("Job Description", palette.heading())),
        Line::default(),
    ];
    for row in job.description.lines() {
        lines.push(Line::from(Span::styled(row.to_string(), palette.value())));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, palette: &Palette, application: &Application) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(6)])
        .split(area);

    draw_overview(frame, rows[0], palette, application);
    draw_company(frame, rows[1], palette, application);
}

fn overview_row<'a>(palette: &Palette, label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<19}"), palette.label()),
        Span::styled(value, palette.value()),
    ])
}

fn draw_overview(frame: &mut Frame, area: Rect, palette: &Palette, application: &Application) {
    let job = &application.job;
    let status_style = Style::default().fg(palette.status_color(&application.status));
    let lines = vec![
        overview_row(palette, "Posted date:", dateparse(&application.created_at)),
        overview_row(palette, "Location:", job.location.clone()),
        overview_row(palette, "Vacancy:", job.vacancy.to_string()),
        overview_row(palette, "Job nature:", job.job_type.clone()),
        overview_row(
            palette,
            "Salary:",
            salary_with_period(job.start_salary, job.end_salary, &job.salary_type),
        ),
        overview_row(palette, "Application date:", dateparse(&job.expired_at)),
        Line::from(vec![
            Span::styled(format!("{:<19}", "Application status:"), palette.label()),
            Span::styled(application.status.to_string(), status_style),
        ]),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title("Job Overview")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn draw_company(frame: &mut Frame, area: Rect, palette: &Palette, application: &Application) {
    let job = &application.job;
    let mut lines = vec![
        Line::from(Span::styled(job.company_name.clone(), palette.heading())),
        Line::default(),
    ];
    for row in job.company_short_description.lines() {
        lines.push(Line::from(Span::styled(row.to_string(), palette.value())));
    }
    lines.push(Line::default());
    lines.push(overview_row(palette, "Name:", job.company_name.clone()));
    lines.push(overview_row(
        palette,
        "Web:",
        job.company_website.to_lowercase(),
    ));
    lines.push(overview_row(
        palette,
        "Email:",
        job.company_email_address.clone(),
    ));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Company Information")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
