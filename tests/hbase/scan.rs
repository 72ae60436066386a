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
use hbase_ops::hbase::ScanOptions;
use hbase_ops_common::test_context::TestContext;
use hbase_ops_common::utils::rand_table_name;

#[tokio::test]
async fn scan_yields_surviving_rows() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1", "cf2"]).await;

    let keys = ["r1", "r2", "r3", "r4", "r5"];
    put_student_rows(&ctx.ops, &table, &keys).await;
    ctx.ops
        .put_cell(&table, "r2", "cf2", "course", "math")
        .await
        .unwrap();
    ctx.ops.delete_rows(&table, ["r1", "r4"]).await.unwrap();

    let rows = ctx
        .ops
        .scan_table(&table, &ScanOptions::default())
        .await
        .unwrap();
    let scanned: Vec<_> = rows.iter().map(|r| r.key_str().into_owned()).collect();
    assert_eq!(scanned, vec!["r2", "r3", "r5"]);
    assert_eq!(rows[0].cells.len(), 3);
    assert_eq!(rows[1].cells.len(), 2);
    assert_eq!(
        rows[0].latest("cf1", b"name").map(|c| c.value_str().into_owned()),
        Some("name-r2".to_string())
    );
    if let Some(gateway) = &ctx.gateway {
        assert_eq!(gateway.open_scanners(), 0);
    }

    guard.cleanup().await;
}

#[tokio::test]
async fn scan_joins_rows_split_across_batches() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    put_student_rows(&ctx.ops, &table, &["r1", "r2"]).await;

    let rows = ctx
        .ops
        .scan_table(&table, &ScanOptions::new().batch(1))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.cells.len() == 2));

    guard.cleanup().await;
}

#[tokio::test]
async fn scan_range_and_columns() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    put_student_rows(&ctx.ops, &table, &["a", "b", "c", "d"]).await;

    let rows = ctx
        .ops
        .scan_table(
            &table,
            &ScanOptions::new()
                .start_row("b")
                .end_row("d")
                .column("cf1:name"),
        )
        .await
        .unwrap();
    let scanned: Vec<_> = rows.iter().map(|r| r.key_str().into_owned()).collect();
    assert_eq!(scanned, vec!["b", "c"]);
    assert!(
        rows.iter()
            .all(|r| r.cells.len() == 1 && r.cells[0].qualifier_str() == "name")
    );

    guard.cleanup().await;
}

#[tokio::test]
async fn scan_empty_table() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;

    let rows = ctx
        .ops
        .scan_table(&table, &ScanOptions::default())
        .await
        .unwrap();
    assert!(rows.is_empty());

    guard.cleanup().await;
}

#[tokio::test]
async fn scan_missing_table() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();

    assert_table_not_found(
        ctx.ops.scan_table(&table, &ScanOptions::default()).await,
        &table,
    );
}

#[tokio::test]
async fn scanner_released_when_batch_fails() {
    let ctx = TestContext::new_from_env().await;
    let Some(gateway) = ctx.gateway.clone() else {
        return;
    };
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    put_student_rows(&ctx.ops, &table, &["r1"]).await;

    gateway.fail_scanner_reads(true);
    let err = ctx
        .ops
        .scan_table(&table, &ScanOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(500));
    assert_eq!(gateway.open_scanners(), 0);

    gateway.fail_scanner_reads(false);
    guard.cleanup().await;
}
