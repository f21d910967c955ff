//! The shared error notifier.
//!
//! Every page forwards its network failure here, exactly once per failed
//! fetch. The notifier keeps the latest failure as a toast for the status
//! bar and emits one warning to the log. The empty condition (success
//! with no payload) never reaches it.

use chrono::{DateTime, Local};

/// The latest network failure, as shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub raised_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct Notifier {
    toast: Option<Toast>,
    reported: u64,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report one network/server error.
    pub fn network_error(&mut self, detail: &str) {
        tracing::warn!(%detail, "Network request failed");
        self.reported = self.reported.saturating_add(1);
        self.toast = Some(Toast {
            message: format!("Network error: {detail}"),
            raised_at: Local::now(),
        });
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.toast = None;
    }

    /// Total failures reported since startup.
    #[must_use]
    pub fn reported(&self) -> u64 {
        self.reported
    }
}
