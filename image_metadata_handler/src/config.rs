use anyhow::Context;

/// Variable holding the name of the image table
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

#[derive(Debug, Clone)]
pub struct Config {
    /// the table image records are written to and read from
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let table_name =
            std::env::var(TABLE_NAME_VAR).context("TABLE_NAME must be provided")?;

        Self::new(table_name)
    }

    pub fn new(table_name: String) -> anyhow::Result<Self> {
        if table_name.trim().is_empty() {
            anyhow::bail!("{TABLE_NAME_VAR} must not be empty");
        }

        Ok(Config { table_name })
    }
}
