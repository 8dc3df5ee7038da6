use crate::shared::infrastructure::event_bus::in_memory::DEFAULT_CAPACITY;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub graphql_path: String,
    pub subscriptions_path: String,
    pub event_bus_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            graphql_path: "/graphql".to_string(),
            subscriptions_path: "/subscriptions".to_string(),
            event_bus_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to the defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port)?,
            graphql_path: path_or("GRAPHQL_PATH", lookup("GRAPHQL_PATH"), defaults.graphql_path)?,
            subscriptions_path: path_or(
                "SUBSCRIPTIONS_PATH",
                lookup("SUBSCRIPTIONS_PATH"),
                defaults.subscriptions_path,
            )?,
            event_bus_capacity: parse_or(
                "EVENT_BUS_CAPACITY",
                lookup("EVENT_BUS_CAPACITY"),
                defaults.event_bus_capacity,
            )?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn path_or(
    key: &'static str,
    value: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) if value.starts_with('/') => Ok(value),
        Some(value) => Err(ConfigError::Invalid { key, value }),
    }
}
