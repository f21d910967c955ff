//! The response envelope returned by every resource wrapper.

use serde::{Deserialize, Serialize};

/// An HTTP status code paired with an optional decoded payload.
///
/// Consumers branch only on two questions: did the request succeed
/// (`status == 200`) and is a payload present. Anything beyond that is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn new(status: u16, data: Option<T>) -> Self {
        Self { status, data }
    }

    /// A 200 envelope carrying a payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            data: Some(data),
        }
    }

    /// A 200 envelope with no payload (the backend's "nothing here").
    #[must_use]
    pub fn empty() -> Self {
        Self {
            status: 200,
            data: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            data: self.data.map(f),
        }
    }
}
