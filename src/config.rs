use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub ocr_endpoint: String,
    pub access_key_id: String,
    pub access_key_secret: String,
    pub sync_enabled: bool,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/receipts.db".to_string());

        let ocr_endpoint = env::var("OCR_ENDPOINT")
            .unwrap_or_else(|_| "https://ocr.ap-southeast-1.aliyuncs.com".to_string());

        let access_key_id = env::var("ACCESS_KEY_ID")
            .map_err(|_| "ACCESS_KEY_ID must be set for the OCR upstream")?;

        let access_key_secret = env::var("ACCESS_KEY_SECRET")
            .map_err(|_| "ACCESS_KEY_SECRET must be set for the OCR upstream")?;

        let sync_enabled = env::var("SYNC_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid SYNC_ENABLED")?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_path,
            ocr_endpoint,
            access_key_id,
            access_key_secret,
            sync_enabled,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
