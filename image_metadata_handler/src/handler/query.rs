use anyhow::Context;
use lambda_runtime::tracing::{self};
use serde_json::Value;

use crate::{
    model::{lookup::LookupRequest, response::Response},
    service,
};

pub const IMAGE_NOT_FOUND: &str = "Image not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Looks up the record for the requested image name.
/// Never fails, unexpected errors are logged and answered with a 500.
#[tracing::instrument(skip_all)]
pub async fn handle_lookup(table: &service::dynamodb::Table, envelope: Value) -> Response {
    match lookup(table, envelope).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error=?e, "failed to process lookup request");
            Response::error(500, INTERNAL_SERVER_ERROR)
        }
    }
}

async fn lookup(table: &service::dynamodb::Table, envelope: Value) -> anyhow::Result<Response> {
    let request: LookupRequest =
        serde_json::from_value(envelope).context("failed to deserialize lookup request")?;
    let image_name = request.image_name()?;

    let Some(record) = table.get_image_record(image_name).await? else {
        tracing::info!(image_name=%image_name, "image not found");
        return Ok(Response::error(404, IMAGE_NOT_FOUND));
    };

    Response::json(200, &record).context("failed to serialize image record")
}
