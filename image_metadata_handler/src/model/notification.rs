use serde::Deserialize;

use super::key::decode_object_key;

/// Object created notification sent by the object store.
/// Only the fields needed to locate the object are read.
#[derive(Debug, Deserialize)]
pub struct StorageNotification {
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    /// url encoded object key
    pub key: String,
}

impl NotificationRecord {
    pub fn bucket(&self) -> &str {
        &self.s3.bucket.name
    }

    /// The decoded object key, which is also the image name
    pub fn object_key(&self) -> String {
        decode_object_key(&self.s3.object.key)
    }
}
