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

//! Builder for PutCell operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::PutCellResponse;
use crate::hbase::types::{CellSetModel, HBaseApi, HBaseRequest, ToHBaseRequest};
use crate::hbase::utils::{
    check_column_family, check_row_key, check_table_name, encode_path_segment,
};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for PutCell operation
///
/// Writes one cell (`PUT /{table}/{row}` with a one-cell `CellSet`). The
/// region server assigns the timestamp unless one is given.
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
/// client
///     .put_cell("student01", "10011", "cf1", "name", "zhangsan")
///     .build()
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutCell {
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
    #[builder(!default, setter(into))]
    value: Bytes,
    /// Explicit cell timestamp in milliseconds
    #[builder(default, setter(into))]
    timestamp: Option<u64>,
}

impl HBaseApi for PutCell {
    type HBaseResponse = PutCellResponse;
}

/// Builder type for PutCell
pub type PutCellBldr = PutCellBuilder<(
    (HBaseClient,),
    (String,),
    (Bytes,),
    (String,),
    (Bytes,),
    (Bytes,),
    (),
)>;

impl ToHBaseRequest for PutCell {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;
        check_row_key(&self.row)?;
        check_column_family(&self.family)?;

        let mut cell_set =
            CellSetModel::single_cell(&self.row, &self.family, &self.qualifier, &self.value);
        if let Some(ts) = self.timestamp {
            for row in &mut cell_set.rows {
                for cell in &mut row.cells {
                    cell.timestamp = Some(ts);
                }
            }
        }
        let body = serde_json::to_vec(&cell_set)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(format!("/{}/{}", self.table, encode_path_segment(&self.row)))
            .table(self.table)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hbase::builders::test_client;

    #[test]
    fn test_request() {
        let req = test_client()
            .put_cell("student01", "row 1", "cf1", "name", "zhangsan")
            .timestamp(42u64)
            .build()
            .to_hbase_request()
            .unwrap();

        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/student01/row%201");
        let body: serde_json::Value = serde_json::from_slice(req.body.as_ref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"Row":[{"key":"cm93IDE=","Cell":[
                {"column":"Y2YxOm5hbWU=","timestamp":42,"$":"emhhbmdzYW4="}
            ]}]})
        );
    }

    #[test]
    fn test_empty_row_rejected() {
        let err = test_client()
            .put_cell("student01", "", "cf1", "name", "v")
            .build()
            .to_hbase_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::InvalidRowKey(_)));
    }
}
