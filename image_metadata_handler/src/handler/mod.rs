pub mod ingest;
pub mod query;

use std::sync::Arc;

use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use serde_json::Value;

use crate::{model::response::Response, service};

/// Top level field of a storage notification
pub const RECORDS_FIELD: &str = "Records";
/// Top level field of an api gateway request
pub const HTTP_METHOD_FIELD: &str = "httpMethod";

pub const UNKNOWN_EVENT_SOURCE: &str = "Unknown event source";

/// The kind of trigger an envelope came from, decided purely by its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    StorageNotification,
    LookupRequest,
    Unknown,
}

impl EventSource {
    pub fn classify(envelope: &Value) -> Self {
        if envelope.get(RECORDS_FIELD).is_some_and(Value::is_array) {
            EventSource::StorageNotification
        } else if envelope.get(HTTP_METHOD_FIELD).is_some() {
            EventSource::LookupRequest
        } else {
            EventSource::Unknown
        }
    }
}

/// Routes the invocation to ingestion or lookup.
///
/// Ingestion failures are returned as errors so the invocation fails and the platform can retry
/// or dead letter it. Lookups always produce a response.
#[tracing::instrument(skip_all)]
pub async fn handler(
    s3_client: Arc<service::s3::S3>,
    table: Arc<service::dynamodb::Table>,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    let envelope = event.payload;
    tracing::info!(event=%envelope, "event received");

    match EventSource::classify(&envelope) {
        EventSource::StorageNotification => {
            ingest::handle_notification(&s3_client, &table, envelope)
                .await
                .map_err(|e| {
                    tracing::error!(error=?e, "failed to process storage notification");
                    Error::from(e)
                })
        }
        EventSource::LookupRequest => Ok(query::handle_lookup(&table, envelope).await),
        EventSource::Unknown => {
            tracing::warn!("unknown event source");
            Ok(Response::error(400, UNKNOWN_EVENT_SOURCE))
        }
    }
}
