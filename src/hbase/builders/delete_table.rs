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

//! Builder for DeleteTable operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::DeleteTableResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::check_table_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for DeleteTable operation
///
/// Drops a table (`DELETE /{table}/schema`). The gateway disables the table
/// before deleting it.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteTable {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
}

impl HBaseApi for DeleteTable {
    type HBaseResponse = DeleteTableResponse;
}

/// Builder type for DeleteTable
pub type DeleteTableBldr = DeleteTableBuilder<((HBaseClient,), (String,))>;

impl ToHBaseRequest for DeleteTable {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(format!("/{}/schema", self.table))
            .table(self.table)
            .build())
    }
}
