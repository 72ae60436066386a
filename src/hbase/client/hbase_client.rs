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

//! REST gateway client with pluggable authentication

use crate::hbase::auth::{BasicAuth, BearerAuth, BoxedHBaseAuth, HBaseAuth, NoAuth};
use crate::hbase::config::ClientConfig;
use crate::hbase::error::{Error, NetworkError, ServerError, ValidationErr};
use crate::hbase::header_constants::*;
use crate::hbase::multimap_ext::{Multimap, MultimapExt};
use http::Method;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Duration;

/// Client for the HBase REST gateway
///
/// `HBaseClient` is cheap to clone: the underlying `reqwest::Client` shares
/// its connection pool between clones.
///
/// # Example
///
/// ```no_run
/// use hbase_ops::hbase::HBaseClient;
/// use hbase_ops::hbase::auth::BasicAuth;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HBaseClient::builder()
///     .endpoint("http://192.168.88.110:8080")
///     .auth(BasicAuth::new("hbase", "hbase"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HBaseClient {
    http_client: ReqwestClient,
    base_url: String,
    auth: BoxedHBaseAuth,
}

impl HBaseClient {
    /// Create a new builder for HBaseClient
    pub fn builder() -> HBaseClientBuilder {
        HBaseClientBuilder::new()
    }

    /// Create a client from connection settings
    ///
    /// A configured token selects bearer authentication, otherwise basic
    /// authentication is used when a user is configured.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = HBaseClient::builder().endpoint(config.endpoint());
        if let Some(token) = &config.token {
            builder = builder.auth(BearerAuth::new(token.as_str()));
        } else if let Some(user) = &config.user {
            builder = builder.auth(BasicAuth::new(
                user.as_str(),
                config.password.as_deref().unwrap_or_default(),
            ));
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authentication provider name
    pub fn auth_name(&self) -> &'static str {
        self.auth.name()
    }

    /// Execute a gateway request
    ///
    /// This is the low-level method used by all API operations.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Percent encoded path below the gateway root (e.g., `/student01/schema`)
    /// * `headers` - Request headers (will be modified with auth headers)
    /// * `query_params` - Query parameters
    /// * `body` - Optional request body (JSON)
    pub(crate) async fn execute_hbase(
        &self,
        method: Method,
        path: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, Error> {
        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.to_query_string());
        }

        headers.add_if_absent(ACCEPT, APPLICATION_JSON);
        if let Some(ref body_data) = body {
            headers.add_if_absent(CONTENT_TYPE, APPLICATION_JSON);
            headers.add(CONTENT_LENGTH, body_data.len().to_string());
        }

        self.auth.authenticate(&method, path, headers)?;

        log::debug!("{method} {url}");

        let mut req = self.http_client.request(method.clone(), &url);
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if let Some(body_data) = body {
            req = req.body(body_data);
        }

        let response = req.send().await.map_err(NetworkError::ReqwestError)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.map_err(NetworkError::ReqwestError)?;
            log::debug!("{method} {url} -> {status}");
            return Err(ServerError::HttpError {
                status: status.as_u16(),
                body: body_text,
            }
            .into());
        }

        log::debug!("{method} {url} -> {status}");
        Ok(response)
    }
}

/// Builder for [`HBaseClient`]
#[derive(Default)]
pub struct HBaseClientBuilder {
    endpoint: Option<String>,
    auth: Option<BoxedHBaseAuth>,
    timeout: Option<Duration>,
    http_client: Option<ReqwestClient>,
}

impl HBaseClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway URL
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Base URL (e.g., `http://localhost:8080`)
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the authentication provider; defaults to [`NoAuth`]
    pub fn auth(mut self, auth: impl HBaseAuth + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Set a whole-request timeout
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client
    ///
    /// Use this to configure TLS settings or proxies.
    pub fn http_client(mut self, client: ReqwestClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the HBaseClient
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not set or is not an http(s) URL, or
    /// if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HBaseClient, Error> {
        let base_url = self.endpoint.ok_or_else(|| {
            ValidationErr::InvalidBaseUrl("endpoint is required for HBaseClient".to_string())
        })?;

        let parsed = url::Url::parse(&base_url).map_err(|source| NetworkError::UrlError {
            url: base_url.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ValidationErr::InvalidBaseUrl(format!(
                "'{base_url}' is not an http(s) URL with a host"
            ))
            .into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = ReqwestClient::builder()
                    .tcp_nodelay(true)
                    .pool_idle_timeout(Duration::from_secs(90));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(ValidationErr::HttpClientError)?
            }
        };

        Ok(HBaseClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: self.auth.unwrap_or_else(|| Arc::new(NoAuth::new())),
        })
    }
}
