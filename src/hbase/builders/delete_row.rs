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

//! Builder for DeleteRow operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::DeleteRowResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::{check_row_key, check_table_name, encode_path_segment};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for DeleteRow operation
///
/// Deletes every cell of one row (`DELETE /{table}/{row}`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteRow {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
    #[builder(!default, setter(into))]
    row: Bytes,
}

impl HBaseApi for DeleteRow {
    type HBaseResponse = DeleteRowResponse;
}

/// Builder type for DeleteRow
pub type DeleteRowBldr = DeleteRowBuilder<((HBaseClient,), (String,), (Bytes,))>;

impl ToHBaseRequest for DeleteRow {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;
        check_row_key(&self.row)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(format!("/{}/{}", self.table, encode_path_segment(&self.row)))
            .table(self.table)
            .build())
    }
}
