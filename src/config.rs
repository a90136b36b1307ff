//! Host configuration parsed from environment variables.

use client::config::{Backend, ClientConfig, DEFAULT_API_BASE};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `TASKLIST_BACKEND` names an unknown backend.
    #[error("invalid TASKLIST_BACKEND: {0}")]
    InvalidBackend(String),

    /// `TASKLIST_API_BASE` is set but blank.
    #[error("TASKLIST_API_BASE must not be empty")]
    EmptyApiBase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Settings handed to the browser through the page shell.
    pub client: ClientConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TASKLIST_BACKEND`: `local` (default) or `remote`
    /// - `TASKLIST_API_BASE`: default `/api/tasks/`; a trailing slash is ensured
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let backend = parse_backend(lookup("TASKLIST_BACKEND").as_deref())?;
        let api_base = parse_api_base(lookup("TASKLIST_API_BASE").as_deref())?;
        Ok(Self { port, client: ClientConfig { backend, api_base } })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_backend(raw: Option<&str>) -> Result<Backend, ConfigError> {
    raw.map_or(Ok(Backend::default()), |v| v.parse::<Backend>().map_err(ConfigError::InvalidBackend))
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let base = raw.map_or(DEFAULT_API_BASE, str::trim);
    if base.is_empty() {
        return Err(ConfigError::EmptyApiBase);
    }
    Ok(format!("{}/", base.trim_end_matches('/')))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
