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

//! Builder for CreateTable operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::CreateTableResponse;
use crate::hbase::types::{
    ColumnFamily, ColumnSchemaModel, HBaseApi, HBaseRequest, TableSchemaModel, ToHBaseRequest,
};
use crate::hbase::utils::{check_column_family, check_table_name};
use http::Method;
use std::collections::HashSet;
use typed_builder::TypedBuilder;

/// Argument builder for CreateTable operation
///
/// Defines a table with the given column families (`PUT /{table}/schema`).
/// The gateway updates the descriptor of an existing table instead of
/// failing, so callers that must not touch an existing table check for it
/// first.
///
/// # Example
///
/// ```no_run
/// use hbase_ops::hbase::{ColumnFamily, HBaseClient};
/// use hbase_ops::hbase::types::HBaseApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HBaseClient::builder().endpoint("http://localhost:8080").build()?;
///
/// client
///     .create_table(
///         "student01",
///         vec![ColumnFamily::new("cf1").with_max_versions(3), "cf2".into()],
///     )
///     .build()
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTable {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
    #[builder(!default)]
    column_families: Vec<ColumnFamily>,
}

impl HBaseApi for CreateTable {
    type HBaseResponse = CreateTableResponse;
}

/// Builder type for CreateTable
pub type CreateTableBldr =
    CreateTableBuilder<((HBaseClient,), (String,), (Vec<ColumnFamily>,))>;

impl ToHBaseRequest for CreateTable {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;

        if self.column_families.is_empty() {
            return Err(ValidationErr::InvalidColumnFamily {
                name: String::new(),
                reason: "a table needs at least one column family".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for cf in &self.column_families {
            check_column_family(&cf.name)?;
            if !seen.insert(cf.name.as_str()) {
                return Err(ValidationErr::InvalidColumnFamily {
                    name: cf.name.clone(),
                    reason: "column family listed twice".to_string(),
                });
            }
        }

        let schema = TableSchemaModel {
            name: self.table.clone(),
            column_schema: self
                .column_families
                .iter()
                .map(ColumnSchemaModel::from)
                .collect(),
            attributes: Default::default(),
        };
        let body = serde_json::to_vec(&schema)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(format!("/{}/schema", self.table))
            .table(self.table)
            .body(body)
            .build())
    }
}
