//! Content views, one per page. Each draws only the `Ready` payload;
//! the placeholders for the other three states live in
//! [`crate::placeholder`].

mod application_show;
mod job_show;
mod lists;
mod profile;

use jobdeck_core::{PageData, Route};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::theme::{Glyphs, Palette};

/// Render the content view for a route.
///
/// A payload that does not match the route can only come from a driver
/// bug; it renders as the page's empty state rather than panicking the
/// UI thread.
pub fn draw_content(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    route: Route,
    data: &PageData,
    selected: usize,
) {
    match (route, data) {
        (Route::Jobs, PageData::Jobs(jobs)) => {
            lists::jobs(frame, area, palette, glyphs, jobs, selected);
        }
        (Route::JobShow(_), PageData::Job(job)) => {
            job_show::draw(frame, area, palette, glyphs, job);
        }
        (Route::Applications, PageData::Applications(apps)) => {
            lists::applications(frame, area, palette, apps, selected);
        }
        (Route::ApplicationShow(_), PageData::Application(application)) => {
            application_show::draw(frame, area, palette, glyphs, application);
        }
        (Route::Profile, PageData::Profile(data)) => {
            profile::draw(frame, area, palette, data);
        }
        (Route::Comments(_), PageData::Comments(comments)) => {
            lists::comments(frame, area, palette, glyphs, comments, selected);
        }
        (Route::Uploads, PageData::Uploads(uploads)) => {
            lists::uploads(frame, area, palette, uploads, selected);
        }
        (route, data) => {
            tracing::warn!(?route, payload = ?std::mem::discriminant(data), "Payload does not match route");
            crate::placeholder::no_content(frame, area, palette, route.empty_message());
        }
    }
}
