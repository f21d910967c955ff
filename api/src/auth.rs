//! Authentication resource.

use jobdeck_types::{Credentials, Envelope, Session};

use crate::{ApiContext, ApiError, read_envelope};

/// Exchange credentials for a session token.
pub async fn login(
    ctx: &ApiContext,
    credentials: &Credentials,
) -> Result<Envelope<Session>, ApiError> {
    read_envelope(ctx.post("/api/login")?.json(credentials)).await
}

/// Invalidate the current session token on the backend.
pub async fn logout(ctx: &ApiContext) -> Result<Envelope<()>, ApiError> {
    read_envelope(ctx.post("/api/logout")?).await
}
