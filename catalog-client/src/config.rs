use std::env;

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
