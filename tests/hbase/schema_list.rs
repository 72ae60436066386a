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

use super::common::*;
use hbase_ops::hbase::ColumnFamily;
use hbase_ops::hbase::types::HBaseApi;
use hbase_ops_common::test_context::TestContext;
use hbase_ops_common::utils::rand_table_name;

#[tokio::test]
async fn list_tables_contains_created() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;

    let tables = ctx.ops.list_tables().await.unwrap();
    assert!(tables.contains(&table));

    guard.cleanup().await;
    let tables = ctx.ops.list_tables().await.unwrap();
    assert!(!tables.contains(&table));
}

#[tokio::test]
async fn schema_reports_versions() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();
    ctx.ops
        .create_table(
            &table,
            [
                ColumnFamily::new("cf1").with_max_versions(3),
                ColumnFamily::new("cf2"),
            ],
        )
        .await
        .unwrap();

    let schema = ctx.ops.table_schema(&table).await.unwrap();
    assert_eq!(schema.name, table);
    let cf1 = schema
        .column_families
        .iter()
        .find(|cf| cf.name == "cf1")
        .unwrap();
    assert_eq!(cf1.max_versions, Some(3));
    assert!(schema.has_family("cf2"));

    ctx.ops.drop_table(&table).await.unwrap();
}

#[tokio::test]
async fn schema_of_missing_table() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();

    assert_table_not_found(ctx.ops.table_schema(&table).await, &table);

    let resp = ctx.client.get_table_schema(&table).build().send().await;
    assert_table_not_found(resp.map(|_| ()), &table);
}
