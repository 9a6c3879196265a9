use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Location of the single JSON document holding the whole dataset.
    pub data_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let data_path = std::env::var("FRIDGELOG_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/fridgelog.json"));
        Ok(Self {
            host,
            port,
            data_path,
        })
    }
}
