//! Private comments resource. Requires a bearer token.

use jobdeck_types::{Comment, Envelope, NewComment};

use crate::{ApiContext, ApiError, read_envelope};

/// Comments for one job, newest first as the backend orders them.
pub async fn index(ctx: &ApiContext, job_id: u64) -> Result<Envelope<Vec<Comment>>, ApiError> {
    let mut url = ctx.endpoint("/api/private/comments")?;
    url.query_pairs_mut().append_pair("job", &job_id.to_string());
    read_envelope(ctx.authorize(crate::http_client().get(url))).await
}

pub async fn store(ctx: &ApiContext, comment: &NewComment) -> Result<Envelope<Comment>, ApiError> {
    read_envelope(ctx.post("/api/private/comments")?.json(comment)).await
}
