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

//! Response type for GetCell operation
//!
//! ## Response (HTTP 200 or HTTP 404)
//!
//! - HTTP 200: `CellSet` document with the versions of the requested column
//! - HTTP 404: nothing stored (handled as an empty result, not error)

use crate::hbase::error::{Error, NetworkError};
use crate::hbase::response::is_not_found;
use crate::hbase::types::{FromHBaseResponse, HBaseRequest, Row};
use crate::{impl_has_cells, impl_has_hbase_fields};
use bytes::Bytes;
use http::HeaderMap;
use once_cell::sync::OnceCell;

/// Response from GetCell operation
///
/// Cells are available through [`HasCells`](crate::hbase::HasCells).
#[derive(Clone, Debug)]
pub struct GetCellResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
    cached_rows: OnceCell<Vec<Row>>,
}

impl_has_hbase_fields!(GetCellResponse);
impl_has_cells!(GetCellResponse);

#[async_trait::async_trait]
impl FromHBaseResponse for GetCellResponse {
    async fn from_hbase_response(
        request: HBaseRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(mut resp) => Ok(Self {
                headers: std::mem::take(resp.headers_mut()),
                body: resp.bytes().await.map_err(NetworkError::ReqwestError)?,
                request,
                cached_rows: OnceCell::new(),
            }),
            Err(e) if is_not_found(&e) => Ok(Self {
                request,
                headers: HeaderMap::new(),
                body: Bytes::new(),
                cached_rows: OnceCell::new(),
            }),
            Err(e) => Err(e),
        }
    }
}
