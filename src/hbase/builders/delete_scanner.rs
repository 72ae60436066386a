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

//! Builder for DeleteScanner operation

use super::scanner_next::scanner_table;
use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::DeleteScannerResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for DeleteScanner operation
///
/// Releases a scanner on the gateway (`DELETE {location}`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteScanner {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    scanner_path: String,
}

impl HBaseApi for DeleteScanner {
    type HBaseResponse = DeleteScannerResponse;
}

/// Builder type for DeleteScanner
pub type DeleteScannerBldr = DeleteScannerBuilder<((HBaseClient,), (String,))>;

impl ToHBaseRequest for DeleteScanner {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        let table = scanner_table(&self.scanner_path)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .table(table)
            .path(self.scanner_path)
            .build())
    }
}
