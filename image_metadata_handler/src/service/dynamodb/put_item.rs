use anyhow::Context;
use serde_dynamo::Item;

pub(super) async fn put_item(
    client: &aws_sdk_dynamodb::Client,
    table: &str,
    item: Item,
) -> anyhow::Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put item, dynamodb")?;

    Ok(())
}
