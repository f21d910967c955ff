//! Private applications resource. Requires a bearer token.

use jobdeck_types::{Application, Envelope};

use crate::{ApiContext, ApiError, read_envelope};

pub async fn index(ctx: &ApiContext) -> Result<Envelope<Vec<Application>>, ApiError> {
    read_envelope(ctx.get("/api/private/applications")?).await
}

pub async fn show(ctx: &ApiContext, id: u64) -> Result<Envelope<Application>, ApiError> {
    read_envelope(ctx.get(&format!("/api/private/applications/{id}"))?).await
}
