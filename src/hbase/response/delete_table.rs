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

//! Response type for DeleteTable operation

use crate::hbase::error::{Error, NetworkError};
use crate::hbase::response::is_not_found;
use crate::hbase::types::{FromHBaseResponse, HBaseRequest};
use crate::impl_has_hbase_fields;
use bytes::Bytes;
use http::HeaderMap;

/// Response from DeleteTable operation
///
/// A 404 from the gateway is reported as
/// [`HBaseError::TableNotFound`](crate::hbase::HBaseError::TableNotFound).
#[derive(Clone, Debug)]
pub struct DeleteTableResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_hbase_fields!(DeleteTableResponse);

#[async_trait::async_trait]
impl FromHBaseResponse for DeleteTableResponse {
    async fn from_hbase_response(
        request: HBaseRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(mut resp) => Ok(Self {
                headers: std::mem::take(resp.headers_mut()),
                body: resp.bytes().await.map_err(NetworkError::ReqwestError)?,
                request,
            }),
            Err(e) if is_not_found(&e) => Err(Error::table_not_found(request.table_name())),
            Err(e) => Err(e),
        }
    }
}
