//! The `App` state machine: one active page, one fetch in flight.

use jobdeck_types::{Application, Comment, Envelope, Job, PageState, Profile, Upload};

use crate::notify::Notifier;
use crate::route::Route;

/// The payload of a resolved page fetch, one variant per page shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    Jobs(Vec<Job>),
    Job(Job),
    Applications(Vec<Application>),
    Application(Application),
    Profile(Profile),
    Comments(Vec<Comment>),
    Uploads(Vec<Upload>),
}

impl PageData {
    /// Number of rows when the payload is a list, 0 otherwise.
    #[must_use]
    pub fn list_len(&self) -> usize {
        match self {
            Self::Jobs(jobs) => jobs.len(),
            Self::Applications(apps) => apps.len(),
            Self::Comments(comments) => comments.len(),
            Self::Uploads(uploads) => uploads.len(),
            Self::Job(_) | Self::Application(_) | Self::Profile(_) => 0,
        }
    }
}

/// Identifies one fetch. The generation makes late resolutions for
/// abandoned page views recognizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub route: Route,
    pub generation: u64,
}

/// How a fetch resolved, as posted back by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The backend answered; status and optional payload.
    Envelope(Envelope<PageData>),
    /// The request itself failed (connect, timeout, ...).
    NetworkError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageEvent {
    pub ticket: FetchTicket,
    pub outcome: FetchOutcome,
}

/// Component-local view state for the active page, plus the pieces shared
/// across pages (notifier, list cursor).
#[derive(Debug)]
pub struct App {
    route: Route,
    page: PageState<PageData>,
    generation: u64,
    selected: usize,
    notifier: Notifier,
    quit: bool,
}

impl App {
    /// Start on a route; the returned ticket is the mount fetch.
    #[must_use]
    pub fn new(initial: Route) -> (Self, FetchTicket) {
        let mut app = Self {
            route: initial,
            page: PageState::Loading,
            generation: 0,
            selected: 0,
            notifier: Notifier::new(),
            quit: false,
        };
        let ticket = app.navigate(initial);
        (app, ticket)
    }

    /// Mount a page: discard the previous page's data, show the loading
    /// placeholder, and hand the driver a ticket for the single fetch.
    pub fn navigate(&mut self, route: Route) -> FetchTicket {
        self.route = route;
        self.page = PageState::Loading;
        self.selected = 0;
        self.generation = self.generation.wrapping_add(1);
        FetchTicket {
            route,
            generation: self.generation,
        }
    }

    /// Remount the current route.
    pub fn refresh(&mut self) -> FetchTicket {
        self.navigate(self.route)
    }

    /// Apply a resolved fetch.
    ///
    /// Resolutions whose generation is not the current one belong to a
    /// page view that no longer exists and are dropped. A failed fetch
    /// reaches the notifier exactly once, here.
    pub fn apply(&mut self, event: PageEvent) {
        if event.ticket.generation != self.generation {
            tracing::debug!(
                stale = event.ticket.generation,
                current = self.generation,
                "Dropping resolution for an unmounted page"
            );
            return;
        }

        match event.outcome {
            FetchOutcome::NetworkError(detail) => {
                self.page = PageState::Failed;
                self.notifier.network_error(&detail);
            }
            FetchOutcome::Envelope(envelope) if !envelope.is_success() => {
                let detail = format!("server responded with status {}", envelope.status);
                self.page = PageState::Failed;
                self.notifier.network_error(&detail);
            }
            FetchOutcome::Envelope(envelope) => {
                self.page = match envelope.data {
                    Some(data) => PageState::Ready(data),
                    None => PageState::Empty,
                };
            }
        }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub fn page(&self) -> &PageState<PageData> {
        &self.page
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn list_len(&self) -> usize {
        self.page.data().map_or(0, PageData::list_len)
    }

    /// Move the list cursor down, clamped to the last row.
    pub fn select_next(&mut self) {
        let len = self.list_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the list cursor up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the selected row's show page, when the active list has one.
    pub fn open_selected(&mut self) -> Option<FetchTicket> {
        let target = match (self.route, self.page.data()?) {
            (Route::Jobs, PageData::Jobs(jobs)) => Route::JobShow(jobs.get(self.selected)?.id),
            (Route::Applications, PageData::Applications(apps)) => {
                Route::ApplicationShow(apps.get(self.selected)?.id)
            }
            _ => return None,
        };
        Some(self.navigate(target))
    }

    /// Back out of a show page to its list.
    pub fn back(&mut self) -> Option<FetchTicket> {
        let target = match self.route {
            Route::JobShow(_) => Route::Jobs,
            Route::ApplicationShow(_) => Route::Applications,
            Route::Comments(job_id) => Route::JobShow(job_id),
            _ => return None,
        };
        Some(self.navigate(target))
    }
}
