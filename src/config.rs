use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::domain::entities::person::PersonId;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub const BASE_URL_VAR: &str = "PEOPLE_BASE_URL";
pub const SEARCH_DEBOUNCE_VAR: &str = "PEOPLE_SEARCH_DEBOUNCE_MS";
pub const DISCARD_STALE_VAR: &str = "PEOPLE_DISCARD_STALE";
pub const WEBVIEW_DIR_VAR: &str = "PEOPLE_WEBVIEW_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub search_debounce: Duration,
    pub discard_stale_responses: bool,
    /// Desktop webview profile location; `None` means the per-user default.
    #[cfg_attr(feature = "web", allow(dead_code))]
    pub webview_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            discard_stale_responses: false,
            webview_dir: None,
        }
    }
}

impl ClientConfig {
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[cfg_attr(feature = "web", allow(dead_code))]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            reqwest::Url::parse(base_url.trim())
                .with_context(|| format!("{BASE_URL_VAR} is not a valid url: {base_url}"))?;
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(SEARCH_DEBOUNCE_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{SEARCH_DEBOUNCE_VAR} must be milliseconds: {raw}"))?;
            config.search_debounce = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(DISCARD_STALE_VAR) {
            config.discard_stale_responses = parse_flag(&raw)
                .with_context(|| format!("{DISCARD_STALE_VAR} must be a boolean"))?;
        }

        config.webview_dir = lookup(WEBVIEW_DIR_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Where the edit action for a person navigates to.
    pub fn edit_url(&self, id: PersonId) -> String {
        format!("{}/home/edit/{id}", self.base_url.trim_end_matches('/'))
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognized flag value: {other}"),
    }
}
