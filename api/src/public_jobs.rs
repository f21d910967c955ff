//! Public job listing resource. No token required.

use jobdeck_types::{Envelope, Job};

use crate::{ApiContext, ApiError, read_envelope};

pub async fn index(ctx: &ApiContext) -> Result<Envelope<Vec<Job>>, ApiError> {
    read_envelope(ctx.get("/api/jobs")?).await
}

pub async fn show(ctx: &ApiContext, id: u64) -> Result<Envelope<Job>, ApiError> {
    read_envelope(ctx.get(&format!("/api/jobs/{id}"))?).await
}
