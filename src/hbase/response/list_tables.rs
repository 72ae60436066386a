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

//! Response type for ListTables operation
//!
//! ## Response Schema
//!
//! ```json
//! {"table":[{"name":"student01"},{"name":"web"}]}
//! ```

use crate::hbase::error::ValidationErr;
use crate::hbase::types::{HBaseRequest, TableListModel};
use crate::{impl_from_hbase_response, impl_has_hbase_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response from ListTables operation
#[derive(Clone, Debug)]
pub struct ListTablesResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListTablesResponse {
    /// Table names, in the order returned by the gateway.
    pub fn tables(&self) -> Result<Vec<String>, ValidationErr> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let model: TableListModel = serde_json::from_slice(&self.body)?;
        Ok(model.tables.into_iter().map(|t| t.name).collect())
    }
}

impl_has_hbase_fields!(ListTablesResponse);
impl_from_hbase_response!(ListTablesResponse);
