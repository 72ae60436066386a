// hbase-ops: HBase REST gateway client and table operations
// Copyright 2026 hbase-ops developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client configuration
//!
//! The gateway endpoint is an explicit value handed to [`HBaseClient`](crate::hbase::HBaseClient)
//! rather than process-wide state, so several independently configured clients
//! can coexist.

use crate::hbase::error::ValidationErr;
use std::time::Duration;

pub const ENV_HOST: &str = "HBASE_REST_HOST";
pub const ENV_PORT: &str = "HBASE_REST_PORT";
pub const ENV_HTTPS: &str = "HBASE_REST_HTTPS";
pub const ENV_USER: &str = "HBASE_REST_USER";
pub const ENV_PASSWORD: &str = "HBASE_REST_PASSWORD";
pub const ENV_TOKEN: &str = "HBASE_REST_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "HBASE_REST_TIMEOUT_SECS";

pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port of the HBase REST gateway.
pub const DEFAULT_PORT: u16 = 8080;

/// Connection settings for one REST gateway
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub https: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Bearer token; takes precedence over `user`.
    pub token: Option<String>,
    /// Whole-request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("https", &self.https)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            https: false,
            user: None,
            password: None,
            token: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Reads the configuration from `HBASE_REST_*` environment variables,
    /// falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ValidationErr> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.is_empty()) {
            config.host = host;
        }
        log::debug!("{ENV_HOST}={}", config.host);

        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            config.port = port.parse().map_err(|e| {
                ValidationErr::InvalidConfig(format!("{ENV_PORT}='{port}' is not a port: {e}"))
            })?;
        }
        log::debug!("{ENV_PORT}={}", config.port);

        if let Some(https) = lookup(ENV_HTTPS).filter(|v| !v.is_empty()) {
            config.https = parse_bool(&https).ok_or_else(|| {
                ValidationErr::InvalidConfig(format!("{ENV_HTTPS}='{https}' is not a boolean"))
            })?;
        }
        log::debug!("{ENV_HTTPS}={}", config.https);

        config.user = lookup(ENV_USER).filter(|v| !v.is_empty());
        config.password = lookup(ENV_PASSWORD);
        if config.user.is_some() {
            log::debug!("{ENV_USER}={:?} {ENV_PASSWORD}=*****", config.user);
        }
        config.token = lookup(ENV_TOKEN).filter(|v| !v.is_empty());
        if config.token.is_some() {
            log::debug!("{ENV_TOKEN}=*****");
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs: u64 = secs.parse().map_err(|e| {
                ValidationErr::InvalidConfig(format!(
                    "{ENV_TIMEOUT_SECS}='{secs}' is not a number of seconds: {e}"
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Base URL of the gateway, e.g. `http://127.0.0.1:8080`.
    pub fn endpoint(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        if self.host.contains(':') && !self.host.starts_with('[') {
            // bare IPv6 address
            format!("{scheme}://[{}]:{}", self.host, self.port)
        } else {
            format!("{scheme}://{}:{}", self.host, self.port)
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
