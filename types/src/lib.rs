//! Core domain types for jobdeck.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application: the records mirrored from the backend JSON, the response
//! envelope returned by every resource wrapper, and the per-page view
//! state machine.

mod envelope;
mod records;
mod view;

pub use envelope::Envelope;
pub use records::{
    Application, ApplicationStatus, Comment, Credentials, Job, NewComment, Profile, Session,
    Upload, UserSummary,
};
pub use view::PageState;
