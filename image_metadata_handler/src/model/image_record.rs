use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};

use super::{number::normalize_integer, object_metadata::ObjectMetadata};

/// Partition key of the image table
pub const IMAGE_NAME_KEY: &str = "imageName";

/// Metadata stored for every uploaded image, keyed by the decoded object key
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub image_name: String,
    /// size in bytes
    pub size: u64,
    pub content_type: String,
    /// ISO-8601 timestamp, e.g. `2024-01-01T00:00:00+00:00`
    pub last_modified: String,
}

impl ImageRecord {
    pub fn from_metadata(image_name: String, metadata: &ObjectMetadata) -> Self {
        Self {
            image_name,
            size: metadata.content_length,
            content_type: metadata.content_type.clone(),
            last_modified: iso_8601(&metadata.last_modified),
        }
    }
}

/// Whole seconds when there is no fractional part, microseconds otherwise
fn iso_8601(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_nanos() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    timestamp.to_rfc3339_opts(format, false)
}

impl TryFrom<HashMap<String, AttributeValue>> for ImageRecord {
    type Error = anyhow::Error;

    /// Reads a record back out of a table item.
    /// `size` is stored as a decimal number and is normalized to an integer here.
    fn try_from(item: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let size = number_attribute(&item, "size")?;
        let size = normalize_integer(size).context("size attribute is not a valid byte count")?;

        Ok(Self {
            image_name: string_attribute(&item, IMAGE_NAME_KEY)?.to_string(),
            size,
            content_type: string_attribute(&item, "contentType")?.to_string(),
            last_modified: string_attribute(&item, "lastModified")?.to_string(),
        })
    }
}

fn string_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> anyhow::Result<&'a str> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value),
        Some(other) => Err(anyhow::anyhow!(
            "expected {name} to be a string, got {other:?}"
        )),
        None => Err(anyhow::anyhow!("missing {name} attribute")),
    }
}

fn number_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> anyhow::Result<&'a str> {
    match item.get(name) {
        Some(AttributeValue::N(value)) => Ok(value),
        Some(other) => Err(anyhow::anyhow!(
            "expected {name} to be a number, got {other:?}"
        )),
        None => Err(anyhow::anyhow!("missing {name} attribute")),
    }
}
