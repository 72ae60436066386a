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

//! Builder for ListTables operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::ListTablesResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for ListTables operation
///
/// Lists the tables known to the gateway (`GET /`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListTables {
    #[builder(!default)]
    client: HBaseClient,
}

impl HBaseApi for ListTables {
    type HBaseResponse = ListTablesResponse;
}

/// Builder type for ListTables
pub type ListTablesBldr = ListTablesBuilder<((HBaseClient,),)>;

impl ToHBaseRequest for ListTables {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/")
            .build())
    }
}
