use std::{fs, io, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_FEED_URL: &str =
    "https://cdn.shopify.com/s/files/1/0883/2188/4479/files/apiCartData.json?v=1728384889";
pub const DEFAULT_PRICE_PREFIX: &str = "Rs. ";
pub const DEFAULT_CONFIG_FILE: &str = "cart.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    pub feed_url: String,
    pub price_prefix: String,
    pub window_title: String,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.into(),
            price_prefix: DEFAULT_PRICE_PREFIX.into(),
            window_title: "Cart".into(),
        }
    }
}

/// Defaults, then the config file, then environment overrides. The result is
/// unvalidated until [`finalize_settings`] applies the command-line layer.
///
/// An explicitly requested file must exist; the default `cart.toml` is
/// optional.
pub fn load_layered_settings(config_path: Option<&Path>) -> Result<CartSettings, ConfigError> {
    let mut settings = match config_path {
        Some(path) => read_settings_file(path)?,
        None => match read_settings_file(Path::new(DEFAULT_CONFIG_FILE)) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                CartSettings::default()
            }
            other => other?,
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

/// Applies the command-line feed URL on top of `settings` and validates the
/// result.
pub fn finalize_settings(
    mut settings: CartSettings,
    feed_url_flag: Option<&str>,
) -> Result<CartSettings, ConfigError> {
    if let Some(feed_url) = feed_url_flag {
        settings.feed_url = feed_url.to_string();
    }
    validate_feed_url(&settings.feed_url)?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<CartSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

pub fn apply_env_overrides(settings: &mut CartSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CART_FEED_URL") {
        settings.feed_url = v;
    }
    if let Some(v) = lookup("APP__FEED_URL") {
        settings.feed_url = v;
    }
    if let Some(v) = lookup("CART_PRICE_PREFIX") {
        settings.price_prefix = v;
    }
}

pub fn validate_feed_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::FeedUrl {
        value: raw.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::FeedUrl {
            value: raw.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
