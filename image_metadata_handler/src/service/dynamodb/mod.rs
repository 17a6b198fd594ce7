mod get_item;
mod put_item;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;
use serde_dynamo::{Item, to_item};

#[cfg(test)]
pub use MockDynamodbClient as Table;
#[cfg(not(test))]
pub use DynamodbClient as Table;

use crate::model::image_record::ImageRecord;

/// Client for the table holding one [ImageRecord] per image name
#[derive(Debug, Clone)]
pub struct DynamodbClient {
    table: String,
    client: Client,
}

#[cfg_attr(test, automock)]
impl DynamodbClient {
    pub fn new(client: Client, table: String) -> Self {
        DynamodbClient { client, table }
    }

    /// Writes the record, replacing whatever was stored under the same image name
    #[tracing::instrument(skip(self))]
    pub async fn put_image_record(&self, record: ImageRecord) -> anyhow::Result<()> {
        let item: Item = to_item(record).context("failed to convert image record")?;
        put_item::put_item(&self.client, &self.table, item).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_image_record(&self, image_name: &str) -> anyhow::Result<Option<ImageRecord>> {
        get_item::get_item(&self.client, &self.table, image_name)
            .await?
            .map(ImageRecord::try_from)
            .transpose()
            .context("failed to read image record")
    }
}
