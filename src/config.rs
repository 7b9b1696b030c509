use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// AniList GraphQL endpoint
    #[serde(default = "default_anilist_api_url")]
    pub anilist_api_url: String,

    /// Entries requested per page when paginating a media list
    #[serde(default = "default_anilist_per_page")]
    pub anilist_per_page: u32,

    /// Seconds a fetched media list stays in the cache
    #[serde(default = "default_media_list_cache_ttl")]
    pub media_list_cache_ttl: u64,

    /// Seconds before the in-memory genre vocabulary is considered stale
    #[serde(default = "default_genre_refresh_secs")]
    pub genre_refresh_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_anilist_api_url() -> String {
    "https://graphql.anilist.co".to_string()
}

fn default_anilist_per_page() -> u32 {
    50
}

fn default_media_list_cache_ttl() -> u64 {
    900 // 15 minutes
}

fn default_genre_refresh_secs() -> u64 {
    86400
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
