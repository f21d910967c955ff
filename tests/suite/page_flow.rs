//! End-to-end page lifecycle: wrapper call -> App::apply -> rendered view.
//!
//! These cover the view-state contract for a page under test: loading
//! until resolution, then exactly one of content / empty / network-error,
//! with the shared notifier hearing about failures exactly once.

use jobdeck_api::ApiContext;
use jobdeck_core::{App, FetchOutcome, FetchTicket, PageData, PageEvent, Route};
use jobdeck_tui::UiOptions;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::common;

/// What the binary's fetch dispatch does for the application-show route.
async fn fetch_application_show(ctx: &ApiContext, id: u64) -> FetchOutcome {
    match jobdeck_api::applications::show(ctx, id).await {
        Ok(envelope) => FetchOutcome::Envelope(envelope.map(PageData::Application)),
        Err(e) => FetchOutcome::NetworkError(e.to_string()),
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 26)).unwrap();
    terminal
        .draw(|frame| jobdeck_tui::draw(frame, app, UiOptions { ascii_only: true }, 0))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn assert_exactly_one_view(text: &str, expected: &str) {
    let views = [
        ("Loading...", text.contains("Loading...")),
        ("Network error", text.contains("Network error")),
        ("Nothing here", text.contains("Nothing here")),
    ];
    for (name, present) in views {
        assert_eq!(
            present,
            name == expected,
            "view {name} presence wrong; expected only {expected}"
        );
    }
}

#[test]
fn page_shows_loading_before_resolution() {
    let (app, _ticket) = App::new(Route::ApplicationShow(5));
    let text = render(&app);
    assert_exactly_one_view(&text, "Loading...");
}

#[tokio::test]
async fn successful_fetch_renders_the_content_view() {
    let server = common::start_backend().await;
    common::mount_application_show(&server, 5, "shortlisted").await;

    let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
    let (mut app, ticket) = App::new(Route::ApplicationShow(5));

    let outcome = fetch_application_show(&ctx, 5).await;
    app.apply(PageEvent { ticket, outcome });

    let text = render(&app);
    assert_exactly_one_view(&text, "none of the placeholders");
    assert!(text.contains("Backend Engineer"));
    assert!(text.contains("Job Overview"));
    assert_eq!(app.notifier().reported(), 0);
}

#[tokio::test]
async fn empty_fetch_renders_the_no_content_view() {
    let server = common::start_backend().await;
    common::mount_empty(&server, "/api/private/applications/9").await;

    let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
    let (mut app, ticket) = App::new(Route::ApplicationShow(9));

    let outcome = fetch_application_show(&ctx, 9).await;
    app.apply(PageEvent { ticket, outcome });

    let text = render(&app);
    assert_exactly_one_view(&text, "Nothing here");
    assert!(text.contains("Job not found."));
    // Empty is terminal but not an error.
    assert_eq!(app.notifier().reported(), 0);
}

#[tokio::test]
async fn server_error_renders_the_error_view_and_notifies_once() {
    let server = common::start_backend().await;
    common::mount_server_error(&server, "/api/private/applications/5", 502).await;

    let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
    let (mut app, ticket) = App::new(Route::ApplicationShow(5));

    let outcome = fetch_application_show(&ctx, 5).await;
    app.apply(PageEvent { ticket, outcome });

    let text = render(&app);
    assert_exactly_one_view(&text, "Network error");
    assert_eq!(app.notifier().reported(), 1);
}

#[tokio::test]
async fn unreachable_backend_renders_the_error_view() {
    let ctx = ApiContext::new("http://127.0.0.1:1").unwrap();
    let (mut app, ticket) = App::new(Route::ApplicationShow(5));

    let outcome = fetch_application_show(&ctx, 5).await;
    assert!(matches!(outcome, FetchOutcome::NetworkError(_)));
    app.apply(PageEvent { ticket, outcome });

    let text = render(&app);
    assert_exactly_one_view(&text, "Network error");
    assert_eq!(app.notifier().reported(), 1);
}

#[tokio::test]
async fn resolution_after_navigation_is_ignored() {
    let server = common::start_backend().await;
    common::mount_application_show(&server, 5, "pending").await;

    let ctx = ApiContext::new(&server.uri()).unwrap().with_token("tok");
    let (mut app, stale_ticket) = App::new(Route::ApplicationShow(5));

    // The user navigates away while the fetch is still in flight.
    let _fresh = app.navigate(Route::Profile);

    let outcome = fetch_application_show(&ctx, 5).await;
    app.apply(PageEvent {
        ticket: stale_ticket,
        outcome,
    });

    assert_eq!(app.route(), Route::Profile);
    let text = render(&app);
    assert_exactly_one_view(&text, "Loading...");
}

#[tokio::test]
async fn list_selection_drives_the_show_route() {
    let server = common::start_backend().await;
    common::mount_jobs_index(
        &server,
        vec![common::job_json(1, "Backend"), common::job_json(2, "Frontend")],
    )
    .await;

    let ctx = ApiContext::new(&server.uri()).unwrap();
    let (mut app, ticket) = App::new(Route::Jobs);

    let outcome = match jobdeck_api::public_jobs::index(&ctx).await {
        Ok(envelope) => FetchOutcome::Envelope(envelope.map(PageData::Jobs)),
        Err(e) => FetchOutcome::NetworkError(e.to_string()),
    };
    app.apply(PageEvent { ticket, outcome });

    app.select_next();
    let ticket: FetchTicket = app.open_selected().expect("show ticket");
    assert_eq!(ticket.route, Route::JobShow(2));
    assert!(app.page().is_loading());
}
