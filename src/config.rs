use std::{env, path::PathBuf};

use reqwest::Url;
use tracing::Level;

use crate::error::StorefrontError;

pub const DEFAULT_CART_SERVICE_URL: &str = "http://localhost:5001";
pub const DEFAULT_CHECKOUT_SERVICE_URL: &str = "http://localhost:5002";

#[derive(Debug, Clone)]
pub struct Settings {
    pub cart_service_url: Url,
    pub checkout_service_url: Url,
    pub auth_token: Option<String>,
    pub log_level: Level,
    pub log_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source. Unset and blank variables take their defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, StorefrontError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let cart_service_url = parse_url(
            "CART_SERVICE_URL",
            &var("CART_SERVICE_URL").unwrap_or_else(|| String::from(DEFAULT_CART_SERVICE_URL)),
        )?;
        let checkout_service_url = parse_url(
            "CHECKOUT_SERVICE_URL",
            &var("CHECKOUT_SERVICE_URL").unwrap_or_else(|| String::from(DEFAULT_CHECKOUT_SERVICE_URL)),
        )?;

        let log_level = match var("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| StorefrontError::Config(format!("LOG_LEVEL {:?}: {}", level, e)))?,
            None => Level::INFO,
        };

        Ok(Settings {
            cart_service_url,
            checkout_service_url,
            auth_token: var("AUTH_TOKEN"),
            log_level,
            log_path: var("LOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse_url(key: &str, value: &str) -> Result<Url, StorefrontError> {
    Url::parse(value).map_err(|e| StorefrontError::Config(format!("{} {:?}: {}", key, value, e)))
}
