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

//! Response type for ScannerNext operation
//!
//! ## Response (HTTP 200 or HTTP 204)
//!
//! - HTTP 200: `CellSet` document with the next batch
//! - HTTP 204: the scanner is exhausted

use crate::hbase::error::{Error, NetworkError};
use crate::hbase::types::{FromHBaseResponse, HBaseRequest, Row};
use crate::{impl_has_cells, impl_has_hbase_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use once_cell::sync::OnceCell;

/// Response from ScannerNext operation
#[derive(Clone, Debug)]
pub struct ScannerNextResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
    exhausted: bool,
    cached_rows: OnceCell<Vec<Row>>,
}

impl ScannerNextResponse {
    /// True once the scanner has no more rows.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl_has_hbase_fields!(ScannerNextResponse);
impl_has_cells!(ScannerNextResponse);

#[async_trait::async_trait]
impl FromHBaseResponse for ScannerNextResponse {
    async fn from_hbase_response(
        request: HBaseRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let status = resp.status();
        let headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;
        let exhausted = status == StatusCode::NO_CONTENT || body.is_empty();
        Ok(Self {
            request,
            headers,
            body,
            exhausted,
            cached_rows: OnceCell::new(),
        })
    }
}
