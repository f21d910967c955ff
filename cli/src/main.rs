//! jobdeck binary - terminal session management and the event loop.
//!
//! # Architecture
//!
//! The binary bridges `jobdeck-core` (application state) and
//! `jobdeck-tui` (rendering), and owns all IO:
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//!                                         |
//!                                         v
//!                              spawn_fetch() per FetchTicket
//! ```
//!
//! # Event loop
//!
//! A fixed frame cadence drives the loop:
//!
//! 1. Wait for the frame tick
//! 2. Drain terminal input (non-blocking poll)
//! 3. Drain resolved fetches from the mpsc channel into `App::apply`
//! 4. Render the frame
//!
//! Each navigation hands a `FetchTicket` to [`spawn_fetch`], which runs
//! exactly one resource wrapper and posts the outcome back. Late
//! resolutions for abandoned pages are dropped inside `App::apply` via
//! the ticket generation.

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use std::{env, panic};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jobdeck_api::ApiContext;
use jobdeck_core::{App, FetchOutcome, FetchTicket, JobdeckConfig, PageData, PageEvent, Route};
use jobdeck_tui::{Action, UiOptions, draw, map_key};
use jobdeck_types::Credentials;

const FRAME_INTERVAL_MS: u64 = 50;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, prefer "no logs" over corrupting the TUI by
    // writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!("Failed to create log dir {}: {e}", parent.display()));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(config_path) = JobdeckConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("jobdeck.log"));
    }

    // Fallback for constrained environments without a home directory.
    candidates.push(PathBuf::from(".jobdeck").join("logs").join("jobdeck.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

/// Restore the terminal before the default panic report prints.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match JobdeckConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(path = %e.path().display(), "Ignoring unusable config: {e}");
            JobdeckConfig::default()
        }
    };

    let mut ctx = ApiContext::new(&config.base_url())?;
    if let Some(token) = config.token() {
        ctx.set_token(token);
    } else {
        try_login(&mut ctx).await;
    }

    let options = UiOptions {
        ascii_only: config.ascii_only(),
    };

    install_panic_hook();
    let session = TerminalSession::new()?;
    run_app(session, ctx, options).await
}

/// Log in with `JOBDECK_EMAIL` / `JOBDECK_PASSWORD` when no token is
/// configured. Failure is not fatal: public pages still work.
async fn try_login(ctx: &mut ApiContext) {
    let (Ok(email), Ok(password)) = (env::var("JOBDECK_EMAIL"), env::var("JOBDECK_PASSWORD"))
    else {
        tracing::info!("No token and no credentials; private pages will show as errors");
        return;
    };

    let credentials = Credentials { email, password };
    match jobdeck_api::auth::login(ctx, &credentials).await {
        Ok(envelope) => match envelope.data {
            Some(session) => {
                tracing::info!(user = session.user.name, "Logged in");
                ctx.set_token(session.token);
            }
            None => tracing::warn!(status = envelope.status, "Login rejected"),
        },
        Err(e) => tracing::warn!("Login request failed: {e}"),
    }
}

async fn run_app(mut session: TerminalSession, ctx: ApiContext, options: UiOptions) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let (mut app, ticket) = App::new(Route::Jobs);
    spawn_fetch(ctx.clone(), ticket, tx.clone());

    let mut interval = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
    let mut tick = 0usize;

    loop {
        interval.tick().await;

        while crossterm::event::poll(Duration::ZERO)? {
            if let Event::Key(key) = crossterm::event::read()? {
                handle_key(&mut app, &ctx, &tx, key);
            }
        }

        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        session
            .terminal
            .draw(|frame| draw(frame, &app, options, tick))?;
        tick = tick.wrapping_add(1);

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn handle_key(
    app: &mut App,
    ctx: &ApiContext,
    tx: &mpsc::UnboundedSender<PageEvent>,
    key: KeyEvent,
) {
    let Some(action) = map_key(key) else { return };

    let ticket = match action {
        Action::Quit => {
            app.quit();
            None
        }
        Action::Refresh => Some(app.refresh()),
        Action::Up => {
            app.select_prev();
            None
        }
        Action::Down => {
            app.select_next();
            None
        }
        Action::Open => app.open_selected(),
        Action::Back => {
            if app.notifier().toast().is_some() {
                app.notifier_mut().dismiss();
                None
            } else {
                app.back()
            }
        }
        Action::GoJobs => Some(app.navigate(Route::Jobs)),
        Action::GoApplications => Some(app.navigate(Route::Applications)),
        Action::GoProfile => Some(app.navigate(Route::Profile)),
        Action::GoUploads => Some(app.navigate(Route::Uploads)),
        Action::GoComments => match app.route() {
            Route::JobShow(job_id) => Some(app.navigate(Route::Comments(job_id))),
            _ => None,
        },
    };

    if let Some(ticket) = ticket {
        spawn_fetch(ctx.clone(), ticket, tx.clone());
    }
}

/// Run the resource wrapper matching a ticket's route and post the
/// resolution. One fetch per ticket, no retry.
fn spawn_fetch(ctx: ApiContext, ticket: FetchTicket, tx: mpsc::UnboundedSender<PageEvent>) {
    tokio::spawn(async move {
        let outcome = fetch(&ctx, ticket.route).await;
        // The receiver only closes on shutdown; a dropped event is fine.
        let _ = tx.send(PageEvent { ticket, outcome });
    });
}

async fn fetch(ctx: &ApiContext, route: Route) -> FetchOutcome {
    let result = match route {
        Route::Jobs => jobdeck_api::public_jobs::index(ctx)
            .await
            .map(|env| env.map(PageData::Jobs)),
        Route::JobShow(id) => jobdeck_api::public_jobs::show(ctx, id)
            .await
            .map(|env| env.map(PageData::Job)),
        Route::Applications => jobdeck_api::applications::index(ctx)
            .await
            .map(|env| env.map(PageData::Applications)),
        Route::ApplicationShow(id) => jobdeck_api::applications::show(ctx, id)
            .await
            .map(|env| env.map(PageData::Application)),
        Route::Profile => jobdeck_api::profile::show(ctx)
            .await
            .map(|env| env.map(PageData::Profile)),
        Route::Comments(job_id) => jobdeck_api::comments::index(ctx, job_id)
            .await
            .map(|env| env.map(PageData::Comments)),
        Route::Uploads => jobdeck_api::uploads::index(ctx)
            .await
            .map(|env| env.map(PageData::Uploads)),
    };

    match result {
        Ok(envelope) => FetchOutcome::Envelope(envelope),
        Err(e) => FetchOutcome::NetworkError(e.to_string()),
    }
}
