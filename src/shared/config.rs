use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cache: CacheConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds a settled feed load stays fresh before a repeat request
    /// goes back to the store.
    pub stale_after_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_community_id: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig {
                stale_after_secs: 300, // 5 minutes
            },
            display: DisplayConfig {
                default_community_id: 1,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("COMMUNA_STALE_AFTER_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.cache.stale_after_secs = value;
            }
        }
        if let Ok(v) = std::env::var("COMMUNA_DEFAULT_COMMUNITY_ID") {
            if let Some(value) = parse_i64(&v) {
                cfg.display.default_community_id = value;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cache.stale_after_secs == 0 {
            return Err("Cache stale_after_secs must be greater than 0".to_string());
        }
        if self.display.default_community_id <= 0 {
            return Err("Display default_community_id must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
