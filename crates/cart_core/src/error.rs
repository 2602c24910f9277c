use thiserror::Error;

pub const INVALID_QUANTITY_MESSAGE: &str = "Quantity must be a valid number greater than 0";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to reach cart feed {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },
    #[error("cart feed {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("cart feed {url} returned a malformed body: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
    #[error("cart loader unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity {raw:?} is not a number")]
    NotANumber { raw: String },
    #[error("quantity {value} is below the minimum of 1")]
    BelowMinimum { value: i64 },
    #[error("quantity {raw:?} is out of range")]
    OutOfRange { raw: String },
}

impl QuantityError {
    /// Text for the blocking warning shown to the user.
    pub fn user_message(&self) -> &'static str {
        INVALID_QUANTITY_MESSAGE
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid feed url {value:?}: {reason}")]
    FeedUrl { value: String, reason: String },
}
