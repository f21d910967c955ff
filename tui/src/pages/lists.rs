//! The list pages: jobs, applications, comments, uploads.

use jobdeck_core::format::{dateparse, salary_range};
use jobdeck_types::{Application, Comment, Job, Upload};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

use crate::theme::{Glyphs, Palette};

fn list_block(palette: &Palette, title: &str, count: usize) -> Block<'static> {
    Block::default()
        .title(format!("{title} ({count})"))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    block: Block<'static>,
    items: Vec<ListItem<'static>>,
    selected: usize,
) {
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn jobs(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    jobs: &[Job],
    selected: usize,
) {
    let items = jobs
        .iter()
        .map(|job| {
            ListItem::new(vec![
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
            ])
        })
        .collect();
    render_list(
        frame,
        area,
        palette,
        list_block(palette, "Jobs", jobs.len()),
        items,
        selected,
    );
}

pub fn applications(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    applications: &[Application],
    selected: usize,
) {
    let items = applications
        .iter()
        .map(|application| {
            let status_style = Style::default().fg(palette.status_color(&application.status));
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(application.job.title.clone(), palette.heading()),
                    Span::raw("  "),
                    Span::styled(application.status.to_string(), status_style),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{}  applied {}",
                        application.job.company_name,
                        dateparse(&application.created_at)
                    ),
                    palette.label(),
                )),
            ])
        })
        .collect();
    render_list(
        frame,
        area,
        palette,
        list_block(palette, "Applications", applications.len()),
        items,
        selected,
    );
}

pub fn comments(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    comments: &[Comment],
    selected: usize,
) {
    let items = comments
        .iter()
        .map(|comment| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", glyphs.bullet, comment.author),
                        palette.heading(),
                    ),
                    Span::raw("  "),
                    Span::styled(dateparse(&comment.created_at), palette.label()),
                ]),
                Line::from(Span::styled(comment.body.clone(), palette.value())),
            ])
        })
        .collect();
    render_list(
        frame,
        area,
        palette,
        list_block(palette, "Comments", comments.len()),
        items,
        selected,
    );
}

pub fn uploads(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    uploads: &[Upload],
    selected: usize,
) {
    let items = uploads
        .iter()
        .map(|upload| {
            ListItem::new(vec![
                Line::from(Span::styled(upload.file_name.clone(), palette.heading())),
                Line::from(Span::styled(
                    format!(
                        "{}  {}  {}",
                        upload.mime_type,
                        human_size(upload.size_bytes),
                        dateparse(&upload.created_at)
                    ),
                    palette.label(),
                )),
            ])
        })
        .collect();
    render_list(
        frame,
        area,
        palette,
        list_block(palette, "Uploads", uploads.len()),
        items,
        selected,
    );
}

fn human_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
