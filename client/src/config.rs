//! Client configuration: where tasks live.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders `ClientConfig` as JSON into a `<meta>` tag of the page
//! shell and also provides it as context during SSR. After hydration the
//! browser reads the same tag back, so both sides agree on the backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// `name` attribute of the shell's config `<meta>` tag.
pub const CONFIG_META_NAME: &str = "tasklist-config";

/// Collection URL used when none is configured.
pub const DEFAULT_API_BASE: &str = "/api/tasks/";

/// Persistence backend for task data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Browser `localStorage` under the `"tasks"` key.
    #[default]
    Local,
    /// The REST collaborator at `ClientConfig::api_base`.
    Remote,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown backend '{other}' (expected 'local' or 'remote')")),
        }
    }
}

/// Runtime settings shared by host and browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend: Backend,
    /// Collection URL of the REST collaborator, e.g. `/api/tasks/`.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { backend: Backend::Local, api_base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ClientConfig {
    /// JSON for the shell's `<meta content=...>` attribute.
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a `<meta>` payload; anything unreadable yields the defaults.
    pub fn from_meta_content(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Resolve the configuration for the current environment.
    ///
    /// In the browser this reads the shell's `<meta>` tag; elsewhere it
    /// returns the defaults.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .map(|raw| Self::from_meta_content(&raw))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
