mod head_object;

use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

use crate::model::object_metadata::ObjectMetadata;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Fetches the metadata of an object without downloading its body
    #[tracing::instrument(skip(self))]
    pub async fn head_object(&self, bucket: &str, key: &str) -> anyhow::Result<ObjectMetadata> {
        head_object::head_object(&self.inner, bucket, key).await
    }
}
