use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::model::image_record::IMAGE_NAME_KEY;

pub(super) async fn get_item(
    client: &Client,
    table: &str,
    image_name: &str,
) -> anyhow::Result<Option<HashMap<String, AttributeValue>>> {
    Ok(client
        .get_item()
        .table_name(table)
        .key(IMAGE_NAME_KEY, AttributeValue::S(image_name.to_owned()))
        .send()
        .await
        .context("failed to get item from image table")?
        .item)
}
