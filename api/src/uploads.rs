//! Private file-upload resource. Requires a bearer token.

use jobdeck_types::{Envelope, Upload};
use reqwest::multipart;

use crate::{ApiContext, ApiError, read_envelope};

pub async fn index(ctx: &ApiContext) -> Result<Envelope<Vec<Upload>>, ApiError> {
    read_envelope(ctx.get("/api/private/uploads")?).await
}

/// Upload one file as a multipart form (field name `file`).
pub async fn store(
    ctx: &ApiContext,
    file_name: &str,
    mime_type: &str,
    bytes: Vec<u8>,
) -> Result<Envelope<Upload>, ApiError> {
    let part = multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime_type)
        .map_err(ApiError::Transport)?;
    let form = multipart::Form::new().part("file", part);
    read_envelope(ctx.post("/api/private/uploads")?.multipart(form)).await
}
