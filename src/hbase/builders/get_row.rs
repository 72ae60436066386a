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

//! Builder for GetRow operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::multimap_ext::{Multimap, MultimapExt};
use crate::hbase::response::GetRowResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::{ALL_VERSIONS, check_row_key, check_table_name, encode_path_segment};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for GetRow operation
///
/// Reads the cells of one row (`GET /{table}/{row}?v=N`). All stored versions
/// are returned unless `max_versions` is set.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetRow {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
    #[builder(!default, setter(into))]
    row: Bytes,
    #[builder(default, setter(into))]
    max_versions: Option<u32>,
}

impl HBaseApi for GetRow {
    type HBaseResponse = GetRowResponse;
}

/// Builder type for GetRow
pub type GetRowBldr = GetRowBuilder<((HBaseClient,), (String,), (Bytes,), ())>;

impl ToHBaseRequest for GetRow {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;
        check_row_key(&self.row)?;

        let versions = self.max_versions.unwrap_or(ALL_VERSIONS);
        if versions == 0 {
            return Err(ValidationErr::StrError {
                message: "max_versions must be at least 1".to_string(),
                source: None,
            });
        }
        let mut query_params = Multimap::new();
        query_params.add("v", versions.to_string());

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(format!("/{}/{}", self.table, encode_path_segment(&self.row)))
            .table(self.table)
            .query_params(query_params)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hbase::builders::test_client;

    #[test]
    fn test_all_versions_by_default() {
        let req = test_client()
            .get_row("student01", "10011")
            .build()
            .to_hbase_request()
            .unwrap();
        assert_eq!(req.path, "/student01/10011");
        assert_eq!(req.query_params.to_query_string(), "v=2147483647");
    }

    #[test]
    fn test_max_versions() {
        let req = test_client()
            .get_row("student01", "10011")
            .max_versions(2u32)
            .build()
            .to_hbase_request()
            .unwrap();
        assert_eq!(req.query_params.to_query_string(), "v=2");

        assert!(
            test_client()
                .get_row("student01", "10011")
                .max_versions(0u32)
                .build()
                .to_hbase_request()
                .is_err()
        );
    }
}
