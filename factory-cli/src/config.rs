use std::path::PathBuf;

use factory_core::STORAGE_KEY;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub log_filter: String,
}

impl CliConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = std::env::var("FACTORY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let storage_key =
            std::env::var("FACTORY_STORAGE_KEY").unwrap_or_else(|_| STORAGE_KEY.into());
        if storage_key.trim().is_empty() || storage_key.contains(['/', '\\']) {
            anyhow::bail!("invalid FACTORY_STORAGE_KEY: {:?}", storage_key);
        }
        let log_filter = std::env::var("FACTORY_LOG").unwrap_or_else(|_| "warn".into());

        Ok(Self {
            data_dir,
            storage_key,
            log_filter,
        })
    }
}
