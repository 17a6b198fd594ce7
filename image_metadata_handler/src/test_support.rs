//! In-memory stand-ins for the object store and the image table, built on the mocked clients.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use crate::{
    model::{image_record::ImageRecord, object_metadata::ObjectMetadata},
    service::{dynamodb::Table, s3::S3},
};

type ObjectKey = (String, String);

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    objects: Arc<Mutex<HashMap<ObjectKey, ObjectMetadata>>>,
    records: Arc<Mutex<HashMap<String, ImageRecord>>>,
}

impl InMemoryStorage {
    /// Stores (or replaces) an object's metadata under its decoded key
    pub fn upload(
        &self,
        bucket: &str,
        key: &str,
        content_length: u64,
        content_type: &str,
        (year, month, day): (i32, u32, u32),
    ) {
        let metadata = ObjectMetadata {
            content_length,
            content_type: content_type.to_string(),
            last_modified: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        };
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), metadata);
    }

    pub fn s3(&self) -> S3 {
        let objects = self.objects.clone();
        let mut s3_client = S3::default();
        s3_client
            .expect_head_object()
            .returning(move |bucket, key| {
                objects
                    .lock()
                    .unwrap()
                    .get(&(bucket.to_string(), key.to_string()))
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("NotFound: {bucket}/{key}"))
            });
        s3_client
    }

    pub fn table(&self) -> Table {
        let mut table = Table::default();

        let records = self.records.clone();
        table.expect_put_image_record().returning(move |record| {
            records
                .lock()
                .unwrap()
                .insert(record.image_name.clone(), record);
            Ok(())
        });

        let records = self.records.clone();
        table
            .expect_get_image_record()
            .returning(move |image_name| Ok(records.lock().unwrap().get(image_name).cloned()));

        table
    }

    pub fn record(&self, image_name: &str) -> Option<ImageRecord> {
        self.records.lock().unwrap().get(image_name).cloned()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

pub fn notification_event(bucket: &str, key: &str) -> Value {
    notification_batch(bucket, &[key])
}

pub fn notification_batch(bucket: &str, keys: &[&str]) -> Value {
    let records: Vec<Value> = keys
        .iter()
        .map(|key| {
            json!({
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-01-01T00:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": bucket, "arn": format!("arn:aws:s3:::{bucket}") },
                    "object": { "key": key, "size": 1024, "eTag": "0123456789abcdef" }
                }
            })
        })
        .collect();

    json!({ "Records": records })
}

pub fn lookup_event(image_name: &str) -> Value {
    json!({
        "resource": "/images/{imageName}",
        "path": format!("/images/{image_name}"),
        "httpMethod": "GET",
        "headers": { "Accept": "application/json" },
        "queryStringParameters": null,
        "pathParameters": { "imageName": image_name },
        "body": null,
        "isBase64Encoded": false
    })
}
