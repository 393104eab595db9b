use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;
const DEFAULT_MAX_PACKAGES: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cache_ttl: Duration,
    /// Upper bound on packages accepted in a single report request.
    pub max_packages: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            max_packages: DEFAULT_MAX_PACKAGES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let port = env_or("PORT", DEFAULT_PORT);
        let cache_ttl_seconds = env_or("CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS);
        let max_packages = env_or("MAX_PACKAGES", DEFAULT_MAX_PACKAGES);

        Self {
            port,
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
            max_packages,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
