use anyhow::Context;
use aws_sdk_s3 as s3;
use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use chrono::{DateTime, Utc};

use crate::model::object_metadata::ObjectMetadata;

pub(super) async fn head_object(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<ObjectMetadata> {
    let resp = client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context("failed to perform head object operation")?;

    object_metadata(&resp)
}

/// Pulls the fields we store out of a head object response
fn object_metadata(resp: &HeadObjectOutput) -> anyhow::Result<ObjectMetadata> {
    let content_length = resp
        .content_length()
        .context("head object response is missing content length")?;
    let content_length =
        u64::try_from(content_length).context("content length should not be negative")?;

    let content_type = resp
        .content_type()
        .context("head object response is missing content type")?
        .to_string();

    let last_modified = resp
        .last_modified()
        .context("head object response is missing last modified")?;
    let last_modified =
        DateTime::<Utc>::from_timestamp(last_modified.secs(), last_modified.subsec_nanos())
            .context("last modified is out of range")?;

    Ok(ObjectMetadata {
        content_length,
        content_type,
        last_modified,
    })
}
