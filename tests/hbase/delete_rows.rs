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
use hbase_ops_common::test_context::TestContext;
use hbase_ops_common::utils::rand_table_name;

#[tokio::test]
async fn delete_rows_removes_them() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    put_student_rows(&ctx.ops, &table, &["10011", "10012", "10013"]).await;

    let deleted = ctx
        .ops
        .delete_rows(&table, ["10011", "10012"])
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    assert!(ctx.ops.get_row(&table, "10011").await.unwrap().is_empty());
    assert!(ctx.ops.get_row(&table, "10012").await.unwrap().is_empty());
    assert_eq!(ctx.ops.get_row(&table, "10013").await.unwrap().len(), 2);

    guard.cleanup().await;
}

#[tokio::test]
async fn deleting_absent_rows_is_not_an_error() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;

    let deleted = ctx
        .ops
        .delete_rows(&table, ["never-written", "also-missing"])
        .await
        .unwrap();
    assert_eq!(deleted, 2);

    guard.cleanup().await;
}

#[tokio::test]
async fn delete_rows_validates_every_key_first() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    put_student_rows(&ctx.ops, &table, &["10011"]).await;

    let err = ctx
        .ops
        .delete_rows(&table, ["10011", ""])
        .await
        .unwrap_err();
    assert!(!err.is_precondition());
    // nothing was deleted
    assert_eq!(ctx.ops.get_row(&table, "10011").await.unwrap().len(), 2);

    guard.cleanup().await;
}

#[tokio::test]
async fn delete_rows_requires_table() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();

    assert_table_not_found(ctx.ops.delete_rows(&table, ["10011"]).await, &table);
}
