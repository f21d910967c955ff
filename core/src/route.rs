//! Routes: one per page, carrying the route parameter where the page
//! needs one.

/// The pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public job listing.
    Jobs,
    /// One job, by id.
    JobShow(u64),
    /// The user's applications.
    Applications,
    /// One application, by id.
    ApplicationShow(u64),
    /// The user's profile.
    Profile,
    /// Comments on one job, by job id.
    Comments(u64),
    /// The user's file uploads.
    Uploads,
}

impl Route {
    /// Page heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Jobs | Self::JobShow(_) => "Jobs",
            Self::Applications => "Applications",
            Self::ApplicationShow(_) => "Application information",
            Self::Profile => "Profile",
            Self::Comments(_) => "Comments",
            Self::Uploads => "Uploads",
        }
    }

    /// Message for the no-content placeholder, matching the page.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Jobs => "No jobs posted yet.",
            Self::JobShow(_) | Self::ApplicationShow(_) => "Job not found.",
            Self::Applications => "You have not applied to any jobs.",
            Self::Profile => "Profile not found.",
            Self::Comments(_) => "No comments yet.",
            Self::Uploads => "No files uploaded.",
        }
    }

    /// Whether the page renders a selectable list.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::Jobs | Self::Applications | Self::Comments(_) | Self::Uploads
        )
    }
}
