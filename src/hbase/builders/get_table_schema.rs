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

//! Builder for GetTableSchema operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::GetTableSchemaResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::check_table_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for GetTableSchema operation
///
/// Fetches the table descriptor with its column families.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetTableSchema {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
}

impl HBaseApi for GetTableSchema {
    type HBaseResponse = GetTableSchemaResponse;
}

/// Builder type for GetTableSchema
pub type GetTableSchemaBldr = GetTableSchemaBuilder<((HBaseClient,), (String,))>;

impl ToHBaseRequest for GetTableSchema {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(format!("/{}/schema", self.table))
            .table(self.table)
            .build())
    }
}
