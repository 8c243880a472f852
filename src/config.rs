//! Configuration types for etsi-deliverables

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Search filter sent to the catalog endpoint
///
/// Only the keyword, technical body and start date vary; the remaining query
/// parameters are fixed by [`crate::fetcher`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Free-text search keyword (default: "TTCN-3")
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Technical body filter, sent as `TB` (default: 97, Methods for Testing & Specification)
    #[serde(default = "default_technical_body")]
    pub technical_body: u32,

    /// Earliest publication date to include (default: 1988-01-15)
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            technical_body: default_technical_body(),
            start_date: default_start_date(),
        }
    }
}

/// Main configuration for the deliverables pipeline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Catalog search endpoint (default: "https://www.etsi.org/")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Base URL that record pathnames and filenames are appended to
    /// (default: "http://www.etsi.org/deliver/")
    #[serde(default = "default_deliver_base_url")]
    pub deliver_base_url: String,

    /// Search filter
    #[serde(default)]
    pub search: SearchConfig,

    /// Per-request timeout in seconds (default: 30, `null` = wait indefinitely)
    #[serde(default = "default_timeout", with = "optional_duration_serde")]
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on the number of pages fetched (None = follow the server's total)
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            deliver_base_url: default_deliver_base_url(),
            search: SearchConfig::default(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            max_pages: None,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config {
            message: format!("invalid config JSON: {}", e),
            key: None,
        })
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every field that can be invalid
    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;
        self.deliver_base()?;
        if self.max_pages == Some(0) {
            return Err(Error::config("max_pages", "must be at least 1"));
        }
        if self.search.keyword.trim().is_empty() {
            return Err(Error::config("search.keyword", "must not be empty"));
        }
        Ok(())
    }

    /// The search endpoint as a parsed URL
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|e| {
            Error::config("endpoint", format!("invalid URL '{}': {}", self.endpoint, e))
        })
    }

    /// The deliver base URL, parsed and checked to accept path segments
    pub fn deliver_base(&self) -> Result<Url> {
        let url = Url::parse(&self.deliver_base_url).map_err(|e| {
            Error::config(
                "deliver_base_url",
                format!("invalid URL '{}': {}", self.deliver_base_url, e),
            )
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::config(
                "deliver_base_url",
                format!("'{}' cannot be used as a base URL", self.deliver_base_url),
            ));
        }
        Ok(url)
    }
}

fn default_keyword() -> String {
    "TTCN-3".to_string()
}

fn default_technical_body() -> u32 {
    97
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1988, 1, 15).unwrap_or(NaiveDate::MIN)
}

fn default_endpoint() -> String {
    "https://www.etsi.org/".to_string()
}

fn default_deliver_base_url() -> String {
    "http://www.etsi.org/deliver/".to_string()
}

fn default_timeout() -> Option<Duration> {
    Some(Duration::from_secs(30))
}

fn default_user_agent() -> String {
    format!("etsi-deliverables/{}", env!("CARGO_PKG_VERSION"))
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
