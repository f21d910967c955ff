//! TUI rendering for jobdeck using ratatui.
//!
//! The drawing side is deliberately dumb: [`draw`] looks at the app's
//! route and page state and renders exactly one of the four views
//! (loading / network error / no content / content) plus the chrome
//! around it. All state changes happen in `jobdeck-core`.

mod input;
mod pages;
pub mod placeholder;
mod theme;

pub use input::{Action, map_key};
pub use theme::{Glyphs, Palette};

use jobdeck_core::{App, Route};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// UI configuration derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, options: UiOptions, tick: usize) {
    let palette = Palette::standard();
    let glyphs = Glyphs::new(options.ascii_only);

    let bg = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_heading(frame, chunks[0], &palette, app.route());
    draw_page(frame, chunks[1], &palette, &glyphs, app, tick);
    draw_status_bar(frame, chunks[2], &palette, app);
}

fn draw_heading(frame: &mut Frame, area: Rect, palette: &Palette, route: Route) {
    let subtitle = match route {
        Route::ApplicationShow(_) => "All details of application.",
        Route::Jobs => "Open positions from the public board.",
        Route::JobShow(_) => "All details of the posting.",
        Route::Applications => "Everything you have applied to.",
        Route::Profile => "Your account details.",
        Route::Comments(_) => "Discussion on this posting.",
        Route::Uploads => "Files attached to your account.",
    };
    let lines = vec![
        Line::from(Span::styled(route.title(), palette.heading())),
        Line::from(Span::styled(subtitle, palette.label())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_page(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    app: &App,
    tick: usize,
) {
    match app.page() {
        jobdeck_core::PageState::Loading => {
            placeholder::preloader(frame, area, palette, glyphs, tick);
        }
        jobdeck_core::PageState::Failed => {
            placeholder::network_error(frame, area, palette, glyphs);
        }
        jobdeck_core::PageState::Empty => {
            placeholder::no_content(frame, area, palette, app.route().empty_message());
        }
        jobdeck_core::PageState::Ready(data) => {
            pages::draw_content(
                frame,
                area,
                palette,
                glyphs,
                app.route(),
                data,
                app.selected(),
            );
        }
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, palette: &Palette, app: &App) {
    let line = if let Some(toast) = app.notifier().toast() {
        Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(palette.error),
        ))
    } else {
        Line::from(Span::styled(
            "1 Jobs  2 Applications  3 Profile  4 Uploads  Enter open  Esc back  r refresh  q quit",
            palette.label(),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use jobdeck_core::{App, FetchOutcome, PageEvent, Route};
    use jobdeck_types::Envelope;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::UiOptions;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn draw_app(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| super::draw(frame, app, UiOptions { ascii_only: true }, 0))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn loading_page_shows_only_the_preloader() {
        let (app, _ticket) = App::new(Route::ApplicationShow(5));
        let text = draw_app(&app);
        assert!(text.contains("Application information"));
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Network error"));
        assert!(!text.contains("Nothing here"));
    }

    #[test]
    fn failed_page_shows_error_view_and_toast() {
        let (mut app, ticket) = App::new(Route::Jobs);
        app.apply(PageEvent {
            ticket,
            outcome: FetchOutcome::NetworkError("connection refused".to_string()),
        });
        let text = draw_app(&app);
        assert!(text.contains("Network error"));
        assert!(text.contains("connection refused"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn empty_page_shows_the_route_message() {
        let (mut app, ticket) = App::new(Route::ApplicationShow(5));
        app.apply(PageEvent {
            ticket,
            outcome: FetchOutcome::Envelope(Envelope::empty()),
        });
        let text = draw_app(&app);
        assert!(text.contains("Job not found."));
        assert!(!text.contains("Network error"));
        assert!(!text.contains("Loading..."));
    }
}
