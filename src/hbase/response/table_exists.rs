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

//! Response type for TableExists operation
//!
//! ## Response (HTTP 200 or HTTP 404)
//!
//! - HTTP 200: Table exists
//! - HTTP 404: Table does not exist (handled as valid response, not error)

use crate::hbase::error::{Error, NetworkError};
use crate::hbase::response::is_not_found;
use crate::hbase::types::{FromHBaseResponse, HBaseRequest};
use crate::impl_has_hbase_fields;
use bytes::Bytes;
use http::HeaderMap;

/// Response from TableExists operation
///
/// Unlike other response types, this handles HTTP 404 as a valid response
/// indicating the table does not exist, rather than treating it as an error.
#[derive(Clone, Debug)]
pub struct TableExistsResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
    exists: bool,
}

impl TableExistsResponse {
    /// Returns true if the table exists, false if it does not.
    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }
}

impl_has_hbase_fields!(TableExistsResponse);

#[async_trait::async_trait]
impl FromHBaseResponse for TableExistsResponse {
    async fn from_hbase_response(
        request: HBaseRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(mut resp) => {
                let headers = std::mem::take(resp.headers_mut());
                let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;
                Ok(Self {
                    request,
                    headers,
                    body,
                    exists: true,
                })
            }
            Err(e) if is_not_found(&e) => Ok(Self {
                request,
                headers: HeaderMap::new(),
                body: Bytes::new(),
                exists: false,
            }),
            Err(e) => Err(e),
        }
    }
}
