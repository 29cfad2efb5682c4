use std::{env, str::FromStr};

use crate::error::ConfigError;

pub const DEFAULT_FEED_CAPACITY: usize = 50;
pub const DEFAULT_SEED_COUNT: usize = 6;
pub const DEFAULT_MIN_DELAY_MS: u64 = 4_000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 7_000;

/// Probability that a generated alert is a pump. The dashboard leans
/// slightly bullish on purpose.
pub const DEFAULT_PUMP_BIAS: f64 = 0.55;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub feed_capacity: usize,
    pub feed_seed_count: usize,
    pub feed_min_delay_ms: u64,
    pub feed_max_delay_ms: u64,
    pub feed_pump_bias: f64,
    pub feed_start_live: bool,

    pub filter_cookie_name: String,
    pub templates_dir: String,
    pub static_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            feed_capacity: DEFAULT_FEED_CAPACITY,
            feed_seed_count: DEFAULT_SEED_COUNT,
            feed_min_delay_ms: DEFAULT_MIN_DELAY_MS,
            feed_max_delay_ms: DEFAULT_MAX_DELAY_MS,
            feed_pump_bias: DEFAULT_PUMP_BIAS,
            feed_start_live: true,
            filter_cookie_name: "megapump_filter".to_string(),
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed_capacity == 0 {
            return Err(ConfigError::Invalid("FEED_CAPACITY must be at least 1".into()));
        }
        if self.feed_seed_count > self.feed_capacity {
            return Err(ConfigError::Invalid(format!(
                "FEED_SEED_COUNT ({}) exceeds FEED_CAPACITY ({})",
                self.feed_seed_count, self.feed_capacity
            )));
        }
        if self.feed_min_delay_ms == 0 || self.feed_min_delay_ms >= self.feed_max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "feed delay range [{}, {}) ms is empty",
                self.feed_min_delay_ms, self.feed_max_delay_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.feed_pump_bias) {
            return Err(ConfigError::Invalid(format!(
                "FEED_PUMP_BIAS must be within [0, 1], got {}",
                self.feed_pump_bias
            )));
        }
        if self.filter_cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid("FILTER_COOKIE_NAME is empty".into()));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let defaults = Settings::default();

    Settings {
        host: env::var("HOST").unwrap_or(defaults.host),
        port: env_or("PORT", defaults.port),
        feed_capacity: env_or("FEED_CAPACITY", defaults.feed_capacity),
        feed_seed_count: env_or("FEED_SEED_COUNT", defaults.feed_seed_count),
        feed_min_delay_ms: env_or("FEED_MIN_DELAY_MS", defaults.feed_min_delay_ms),
        feed_max_delay_ms: env_or("FEED_MAX_DELAY_MS", defaults.feed_max_delay_ms),
        feed_pump_bias: env_or("FEED_PUMP_BIAS", defaults.feed_pump_bias),
        feed_start_live: env_or("FEED_START_LIVE", defaults.feed_start_live),
        filter_cookie_name: env::var("FILTER_COOKIE_NAME").unwrap_or(defaults.filter_cookie_name),
        templates_dir: env::var("TEMPLATES_DIR").unwrap_or(defaults.templates_dir),
        static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
    }
}
