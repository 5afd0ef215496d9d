/// Application configuration, loaded once at startup and passed by reference.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the row-store REST endpoint (e.g. `https://xyz.supabase.co`).
    pub api_url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
    pub log_level: String,
    pub http_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}
