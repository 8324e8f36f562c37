use bnm_model::ResponseFormat;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::env;

use crate::catalog::{ACCEPT_HEADER, BASE_URL};
use crate::error::Error;

pub const ENV_BASE_URL: &str = "BNM_API_BASE_URL";
pub const ENV_FORMAT: &str = "BNM_API_FORMAT";

/// Where requests go, what they carry and how answers come back by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    headers: BTreeMap<String, String>,
    default_format: ResponseFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: BASE_URL.to_string(),
            headers: BTreeMap::from([("Accept".to_string(), ACCEPT_HEADER.to_string())]),
            default_format: ResponseFormat::Json,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, default_format: ResponseFormat) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            default_format,
            ..ClientConfig::default()
        }
    }

    /// Reads `.env` if present, then `BNM_API_BASE_URL` and `BNM_API_FORMAT`.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        ClientConfig::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().to_string();
            }
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            if !format.trim().is_empty() {
                config.default_format = format
                    .trim()
                    .parse()
                    .map_err(|e| Error::Config(format!("{}: {}", ENV_FORMAT, e)))?;
            }
        }

        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn default_format(&self) -> ResponseFormat {
        self.default_format
    }

    pub(crate) fn header_map(&self) -> Result<HeaderMap, Error> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Config(format!("header '{}': {}", name.as_str(), e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}
