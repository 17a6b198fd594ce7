pub mod dynamodb;
pub mod s3;
