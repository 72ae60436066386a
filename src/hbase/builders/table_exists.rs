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

//! Builder for TableExists operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::TableExistsResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::check_table_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for TableExists operation
///
/// Checks if a table exists.
///
/// # Example
///
/// ```no_run
/// use hbase_ops::hbase::HBaseClient;
/// use hbase_ops::hbase::types::HBaseApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HBaseClient::builder().endpoint("http://localhost:8080").build()?;
///
/// let exists = client.table_exists("student01").build().send().await?.exists();
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct TableExists {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
}

impl HBaseApi for TableExists {
    type HBaseResponse = TableExistsResponse;
}

/// Builder type for TableExists
pub type TableExistsBldr = TableExistsBuilder<((HBaseClient,), (String,))>;

impl ToHBaseRequest for TableExists {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(format!("/{}/exists", self.table))
            .table(self.table)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hbase::builders::test_client;

    #[test]
    fn test_request_path() {
        let req = test_client()
            .table_exists("default:student01")
            .build()
            .to_hbase_request()
            .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/default:student01/exists");
        assert_eq!(req.table_name(), "default:student01");
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert!(
            test_client()
                .table_exists("no such/table")
                .build()
                .to_hbase_request()
                .is_err()
        );
    }
}
