//! Records mirrored from the backend JSON.
//!
//! These are plain, inert mirrors of the REST responses: optional until a
//! page fetch succeeds, replaced wholesale on refetch, discarded on
//! navigation away. Timestamps stay as the raw backend strings; formatting
//! happens at the rendering edge.

use serde::{Deserialize, Serialize};

/// A job posting, with the company details the backend flattens onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub vacancy: u32,
    /// Full-time / part-time / contract, as the backend spells it.
    pub job_type: String,
    pub start_salary: i64,
    pub end_salary: i64,
    /// "monthly", "yearly", ... rendered capitalized next to the range.
    pub salary_type: String,
    pub description: String,
    /// Application deadline, raw backend timestamp.
    pub expired_at: String,
    pub company_name: String,
    pub company_logo: String,
    pub company_website: String,
    pub company_email_address: String,
    pub company_short_description: String,
}

/// One application a user filed against a [`Job`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    pub status: ApplicationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub job: Job,
}

/// Application status classified from the backend's free-form string.
///
/// The backend contract is external, so unrecognized values are preserved
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Hired,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Shortlisted => "shortlisted",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "shortlisted" => Self::Shortlisted,
            "hired" | "accepted" => Self::Hired,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

/// A comment left on a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub job_id: u64,
    pub author: String,
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Request body for posting a new comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub job_id: u64,
    pub body: String,
}

/// An uploaded file (resume, cover letter, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: u64,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// What the backend knows about the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Successful login response: bearer token plus a user summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserSummary,
}
