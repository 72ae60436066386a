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
use hbase_ops_common::test_context::TestContext;
use hbase_ops_common::utils::rand_table_name;

#[tokio::test]
async fn create_table_with_families() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();

    ctx.ops.create_table(&table, ["cf1", "cf2"]).await.unwrap();

    assert!(ctx.ops.table_exists(&table).await.unwrap());
    let schema = ctx.ops.table_schema(&table).await.unwrap();
    assert!(schema.has_family("cf1"));
    assert!(schema.has_family("cf2"));
    assert_eq!(schema.column_families.len(), 2);

    ctx.ops.drop_table(&table).await.unwrap();
    assert!(!ctx.ops.table_exists(&table).await.unwrap());
}

#[tokio::test]
async fn create_existing_table_is_not_mutated() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    let before = ctx.gateway.as_ref().map(|g| g.mutations());

    let result = ctx
        .ops
        .create_table(&table, [ColumnFamily::new("other").with_max_versions(5)])
        .await;
    assert_table_already_exists(result, &table);

    assert_eq!(ctx.gateway.as_ref().map(|g| g.mutations()), before);
    let schema = ctx.ops.table_schema(&table).await.unwrap();
    assert_eq!(schema.family_names(), vec!["cf1"]);

    guard.cleanup().await;
}

#[tokio::test]
async fn drop_missing_table_reports_absence() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();
    let before = ctx.gateway.as_ref().map(|g| g.mutations());

    let result = ctx.ops.drop_table(&table).await;
    assert_table_not_found(result, &table);
    assert!(
        ctx.ops
            .drop_table(&table)
            .await
            .unwrap_err()
            .is_precondition()
    );

    assert_eq!(ctx.gateway.as_ref().map(|g| g.mutations()), before);
}

#[tokio::test]
async fn dropped_table_loses_its_rows() {
    let ctx = TestContext::new_from_env().await;
    let (table, _guard) = ctx.create_table_helper(&["cf1"]).await;
    put_student_rows(&ctx.ops, &table, &["10011"]).await;

    ctx.ops.drop_table(&table).await.unwrap();
    ctx.ops.create_table(&table, ["cf1"]).await.unwrap();

    assert!(ctx.ops.get_row(&table, "10011").await.unwrap().is_empty());
    ctx.ops.drop_table(&table).await.unwrap();
}
