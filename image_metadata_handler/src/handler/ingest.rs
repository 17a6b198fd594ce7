use anyhow::Context;
use lambda_runtime::tracing::{self};
use serde_json::Value;

use crate::{
    model::{
        image_record::ImageRecord,
        notification::{NotificationRecord, StorageNotification},
        response::Response,
    },
    service,
};

/// Stores the metadata of every object in the notification.
/// The first failure aborts the invocation, the platform retries the whole batch.
#[tracing::instrument(skip_all)]
pub async fn handle_notification(
    s3_client: &service::s3::S3,
    table: &service::dynamodb::Table,
    envelope: Value,
) -> anyhow::Result<Response> {
    let notification: StorageNotification =
        serde_json::from_value(envelope).context("failed to deserialize storage notification")?;

    if notification.records.is_empty() {
        anyhow::bail!("storage notification contains no records");
    }

    for record in &notification.records {
        ingest_record(s3_client, table, record).await?;
    }

    Ok(Response::ok())
}

#[tracing::instrument(skip(s3_client, table))]
async fn ingest_record(
    s3_client: &service::s3::S3,
    table: &service::dynamodb::Table,
    record: &NotificationRecord,
) -> anyhow::Result<()> {
    let bucket = record.bucket();
    let image_name = record.object_key();
    if image_name.is_empty() {
        anyhow::bail!("object key is empty");
    }

    let metadata = s3_client
        .head_object(bucket, &image_name)
        .await
        .with_context(|| format!("failed to fetch metadata for {bucket}/{image_name}"))?;

    let image_record = ImageRecord::from_metadata(image_name, &metadata);
    tracing::trace!(image_record=?image_record, "storing image record");

    let image_name = image_record.image_name.clone();
    table
        .put_image_record(image_record)
        .await
        .with_context(|| format!("failed to store image record for {image_name}"))?;

    tracing::info!(image_name=%image_name, "successfully processed");
    Ok(())
}
