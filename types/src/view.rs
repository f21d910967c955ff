//! Per-page view state.
//!
//! Every page holds exactly one `PageState` and renders exactly one of the
//! four variants. The precedence over the (loading, error, data-present)
//! triple is fixed and mirrors the render guards used across the dashboard:
//!
//! 1. loading, no error, no data  -> loading placeholder
//! 2. not loading, no data, error -> network-error placeholder
//! 3. not loading, no data, no error -> empty placeholder
//! 4. not loading, no error, data -> content

use crate::Envelope;

/// The view state of one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState<T> {
    /// Fetch in flight; nothing to show yet.
    #[default]
    Loading,
    /// The request threw or came back with a non-success status.
    Failed,
    /// The request succeeded but returned no data. A terminal state,
    /// distinct from `Failed`.
    Empty,
    /// The request succeeded with a payload.
    Ready(T),
}

impl<T> PageState<T> {
    /// Resolve the fixed precedence over the raw flag triple.
    ///
    /// Flag combinations outside the four render guards (a stale loading
    /// flag next to data, an error flag raised while data is present) are
    /// not reachable through [`PageState::resolve`], but the precedence
    /// still picks a single state for them: loading wins, then error,
    /// then data.
    #[must_use]
    pub fn from_flags(loading: bool, error: bool, data: Option<T>) -> Self {
        if loading {
            return Self::Loading;
        }
        if error {
            return Self::Failed;
        }
        match data {
            Some(value) => Self::Ready(value),
            None => Self::Empty,
        }
    }

    /// The state after a wrapper call resolves.
    ///
    /// A transport error or non-success status becomes `Failed`; a success
    /// status without a payload becomes `Empty`; a success status with a
    /// payload becomes `Ready`.
    #[must_use]
    pub fn resolve<E>(outcome: Result<Envelope<T>, E>) -> Self {
        match outcome {
            Ok(envelope) if envelope.is_success() => match envelope.data {
                Some(data) => Self::Ready(data),
                None => Self::Empty,
            },
            Ok(_) | Err(_) => Self::Failed,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            Self::Loading => PageState::Loading,
            Self::Failed => PageState::Failed,
            Self::Empty => PageState::Empty,
            Self::Ready(data) => PageState::Ready(f(data)),
        }
    }
}
