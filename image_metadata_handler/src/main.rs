#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context;
use image_metadata_handler::{config::Config, handler::handler, service};
use lambda_entrypoint::Entrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = Entrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = Config::from_env().context("missing environment variables")?;

    tracing::trace!("initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let s3_client = Arc::new(service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config)));

    tracing::trace!("initialized s3 client");

    let table = Arc::new(service::dynamodb::Table::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    ));

    tracing::trace!("initialized dynamodb client");

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let s3_client = s3_client.clone();
        let table = table.clone();

        async move { handler(s3_client, table, event).await }
    });

    run(func).await
}
