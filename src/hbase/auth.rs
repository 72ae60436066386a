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

//! Authentication providers for the REST gateway
//!
//! An unsecured gateway accepts anonymous requests. Gateways published
//! behind an authenticating proxy typically expect HTTP basic or bearer
//! credentials:
//!
//! - **NoAuth** (default): adds nothing
//! - **BasicAuth**: `Authorization: Basic base64(user:password)`
//! - **BearerAuth**: `Authorization: Bearer <token>`

use crate::hbase::error::Error;
use crate::hbase::header_constants::AUTHORIZATION;
use crate::hbase::multimap_ext::{Multimap, MultimapExt};
use crate::hbase::utils::b64_encode;
use http::Method;
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for authenticating gateway requests
///
/// The trait is object-safe so that a provider can be stored in the client
/// behind an `Arc`.
pub trait HBaseAuth: Send + Sync + Debug {
    /// Authenticate a request by adding appropriate headers
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `path` - Request path (e.g., `/student01/schema`)
    /// * `headers` - Mutable headers map to add authentication headers to
    fn authenticate(&self, method: &Method, path: &str, headers: &mut Multimap)
    -> Result<(), Error>;

    /// Returns a human-readable name for this auth provider
    fn name(&self) -> &'static str;
}

/// HTTP basic authentication
#[derive(Clone)]
pub struct BasicAuth {
    user: String,
    auth_header: String,
}

impl Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicAuth {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        let user = user.into();
        let auth_header = format!(
            "Basic {}",
            b64_encode(format!("{}:{}", user, password.into()))
        );
        Self { user, auth_header }
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl HBaseAuth for BasicAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        headers: &mut Multimap,
    ) -> Result<(), Error> {
        headers.add(AUTHORIZATION, &self.auth_header);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BasicAuth"
    }
}

/// Bearer token authentication
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
    auth_header: String,
}

impl Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token_preview = if self.token.chars().count() > 10 {
            format!("{}...", self.token.chars().take(10).collect::<String>())
        } else {
            "[REDACTED]".to_string()
        };
        f.debug_struct("BearerAuth")
            .field("token", &token_preview)
            .finish()
    }
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let auth_header = format!("Bearer {token}");
        Self { token, auth_header }
    }
}

impl HBaseAuth for BearerAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        headers: &mut Multimap,
    ) -> Result<(), Error> {
        headers.add(AUTHORIZATION, &self.auth_header);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BearerAuth"
    }
}

/// No authentication (unsecured gateways and tests)
#[derive(Clone, Debug, Default)]
pub struct NoAuth;

impl NoAuth {
    pub fn new() -> Self {
        Self
    }
}

impl HBaseAuth for NoAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        _headers: &mut Multimap,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoAuth"
    }
}

/// Type alias for a shared auth provider
pub type BoxedHBaseAuth = Arc<dyn HBaseAuth>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_adds_header() {
        let auth = BasicAuth::new("hbase", "hbase");
        let mut headers = Multimap::new();
        auth.authenticate(&Method::GET, "/", &mut headers).unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).map(String::as_str),
            Some("Basic aGJhc2U6aGJhc2U=")
        );
    }

    #[test]
    fn test_basic_auth_debug_redacts_password() {
        let debug = format!("{:?}", BasicAuth::new("hbase", "topsecret"));
        assert!(debug.contains("hbase"));
        assert!(!debug.contains("topsecret"));
    }

    #[test]
    fn test_bearer_auth_adds_header() {
        let auth = BearerAuth::new("token-123");
        let mut headers = Multimap::new();
        auth.authenticate(&Method::PUT, "/t/schema", &mut headers)
            .unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).map(String::as_str),
            Some("Bearer token-123")
        );
    }

    #[test]
    fn test_no_auth_adds_nothing() {
        let mut headers = Multimap::new();
        NoAuth::new()
            .authenticate(&Method::GET, "/", &mut headers)
            .unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_auth_names() {
        assert_eq!(BasicAuth::new("a", "b").name(), "BasicAuth");
        assert_eq!(BearerAuth::new("t").name(), "BearerAuth");
        assert_eq!(NoAuth::new().name(), "NoAuth");
    }
}
