//! Application state for jobdeck.
//!
//! This crate holds the `App` state machine without any TUI or HTTP
//! dependencies: routes, the page mount/resolve lifecycle with its
//! generation counter, the shared error notifier, config loading, and the
//! formatting helpers used at the rendering edge.
//!
//! The driver (the binary) owns the actual IO: `App::navigate` hands it a
//! [`FetchTicket`], the driver runs the matching resource wrapper, and
//! posts the result back through [`App::apply`]. A page view therefore has
//! at most one fetch outstanding, and a resolution that arrives after the
//! user navigated away carries a stale generation and is dropped.

mod app;
mod config;
pub mod format;
mod notify;
mod route;

pub use app::{App, FetchOutcome, FetchTicket, PageData, PageEvent};
pub use config::{ApiSection, ConfigError, JobdeckConfig, UiSection};
pub use notify::{Notifier, Toast};
pub use route::Route;

pub use jobdeck_types::PageState;
