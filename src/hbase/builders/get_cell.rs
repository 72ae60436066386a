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

//! Builder for GetCell operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::multimap_ext::{Multimap, MultimapExt};
use crate::hbase::response::GetCellResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::{
    ALL_VERSIONS, check_column_family, check_row_key, check_table_name, encode_path_segment,
};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for GetCell operation
///
/// Reads the versions of one column
/// (`GET /{table}/{row}/{family}:{qualifier}[/{ts},{ts+1}]?v=N`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetCell {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
    #[builder(!default, setter(into))]
    row: Bytes,
    #[builder(!default, setter(into))]
    family: String,
    #[builder(!default, setter(into))]
    qualifier: Bytes,
    #[builder(default, setter(into))]
    max_versions: Option<u32>,
    /// Only the version written at exactly this timestamp
    #[builder(default, setter(into))]
    timestamp: Option<u64>,
}

impl HBaseApi for GetCell {
    type HBaseResponse = GetCellResponse;
}

/// Builder type for GetCell
pub type GetCellBldr =
    GetCellBuilder<((HBaseClient,), (String,), (Bytes,), (String,), (Bytes,), (), ())>;

impl ToHBaseRequest for GetCell {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;
        check_row_key(&self.row)?;
        check_column_family(&self.family)?;

        let versions = self.max_versions.unwrap_or(ALL_VERSIONS);
        if versions == 0 {
            return Err(ValidationErr::StrError {
                message: "max_versions must be at least 1".to_string(),
                source: None,
            });
        }
        let mut query_params = Multimap::new();
        query_params.add("v", versions.to_string());

        let mut path = format!(
            "/{}/{}/{}:{}",
            self.table,
            encode_path_segment(&self.row),
            encode_path_segment(self.family.as_bytes()),
            encode_path_segment(&self.qualifier),
        );
        if let Some(ts) = self.timestamp {
            // half-open range [ts, ts + 1); a lone timestamp is an upper bound
            path.push_str(&format!("/{ts},{}", ts.saturating_add(1)));
        }

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(path)
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
    fn test_request_path() {
        let req = test_client()
            .get_cell("student01", "10011", "cf1", "name")
            .build()
            .to_hbase_request()
            .unwrap();
        assert_eq!(req.path, "/student01/10011/cf1:name");
        assert_eq!(req.query_params.to_query_string(), "v=2147483647");
    }

    #[test]
    fn test_timestamp_and_versions() {
        let req = test_client()
            .get_cell("student01", "10011", "cf1", "na/me")
            .timestamp(1_595_300_000_000u64)
            .max_versions(1u32)
            .build()
            .to_hbase_request()
            .unwrap();
        assert_eq!(req.path, "/student01/10011/cf1:na%2Fme/1595300000000,1595300000001");
        assert_eq!(req.query_params.to_query_string(), "v=1");
    }
}
