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
use hbase_ops_common::utils::{rand_row_key, rand_table_name};

#[tokio::test]
async fn put_then_get_cell() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1", "cf2"]).await;

    ctx.ops
        .put_cell(&table, "10011", "cf1", "name", "zhangsan")
        .await
        .unwrap();

    let cells = ctx
        .ops
        .get_cell(&table, "10011", "cf1", "name")
        .await
        .unwrap();
    assert_eq!(cells.len(), 1);
    let cell = &cells[0];
    assert_eq!(cell.row_str(), "10011");
    assert_eq!(cell.family, "cf1");
    assert_eq!(cell.qualifier_str(), "name");
    assert_eq!(cell.value_str(), "zhangsan");
    assert!(cell.timestamp > 0);
    assert!(cell.timestamp_utc().is_some());

    let first_ts = cell.timestamp;
    ctx.ops
        .put_cell(&table, "10011", "cf1", "name", "lisi")
        .await
        .unwrap();
    let cells = ctx
        .ops
        .get_cell(&table, "10011", "cf1", "name")
        .await
        .unwrap();
    assert_eq!(cells[0].value_str(), "lisi");
    assert!(cells[0].timestamp >= first_ts);

    guard.cleanup().await;
}

#[tokio::test]
async fn get_row_returns_all_families() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1", "cf2"]).await;

    ctx.ops
        .put_cell(&table, "10011", "cf1", "name", "zhangsan")
        .await
        .unwrap();
    ctx.ops
        .put_cell(&table, "10011", "cf2", "course", "math")
        .await
        .unwrap();
    ctx.ops
        .put_cell(&table, "10012", "cf1", "name", "lisi")
        .await
        .unwrap();

    let cells = ctx.ops.get_row(&table, "10011").await.unwrap();
    let mut seen: Vec<String> = cells
        .iter()
        .map(|c| format!("{}:{}={}", c.family, c.qualifier_str(), c.value_str()))
        .collect();
    seen.sort();
    assert_eq!(seen, vec!["cf1:name=zhangsan", "cf2:course=math"]);
    assert!(cells.iter().all(|c| c.row_str() == "10011"));

    let line = cells
        .iter()
        .find(|c| c.family == "cf1")
        .map(|c| c.to_string())
        .unwrap();
    assert!(
        line.starts_with("row: 10011\tfamily: cf1\tqualifier: name\tvalue: zhangsan\ttimestamp: ")
    );

    guard.cleanup().await;
}

#[tokio::test]
async fn cell_versions() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();
    ctx.ops
        .create_table(&table, [ColumnFamily::new("cf1").with_max_versions(3)])
        .await
        .unwrap();

    for value in ["v1", "v2", "v3", "v4"] {
        ctx.ops
            .put_cell(&table, "r1", "cf1", "q", value)
            .await
            .unwrap();
    }

    // only the three newest versions are retained, newest first
    let cells = ctx.ops.get_cell(&table, "r1", "cf1", "q").await.unwrap();
    let values: Vec<_> = cells.iter().map(|c| c.value_str().into_owned()).collect();
    assert_eq!(values, vec!["v4", "v3", "v2"]);
    assert!(cells.windows(2).all(|w| w[0].timestamp > w[1].timestamp));

    let newest = ctx
        .ops
        .get_cell_versions(&table, "r1", "cf1", "q", Some(1), None)
        .await
        .unwrap();
    assert_eq!(newest.len(), 1);
    assert_eq!(newest[0].value_str(), "v4");

    let pinned = ctx
        .ops
        .get_cell_versions(&table, "r1", "cf1", "q", None, Some(cells[1].timestamp))
        .await
        .unwrap();
    assert_eq!(pinned.len(), 1);
    assert_eq!(pinned[0].value_str(), "v3");

    let row = ctx
        .ops
        .get_row_versions(&table, "r1", Some(2))
        .await
        .unwrap();
    assert_eq!(row.len(), 2);

    ctx.ops.drop_table(&table).await.unwrap();
}

#[tokio::test]
async fn missing_row_is_empty() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;

    assert!(ctx.ops.get_row(&table, rand_row_key()).await.unwrap().is_empty());
    assert!(
        ctx.ops
            .get_cell(&table, rand_row_key(), "cf1", "name")
            .await
            .unwrap()
            .is_empty()
    );

    guard.cleanup().await;
}

#[tokio::test]
async fn binary_keys_and_values() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    let row: &[u8] = b"row/with space?&";
    let value: &[u8] = &[0, 159, 146, 150, 255];

    ctx.ops
        .put_cell(&table, row, "cf1", "bin", value)
        .await
        .unwrap();
    let cells = ctx.ops.get_cell(&table, row, "cf1", "bin").await.unwrap();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].row.as_ref(), row);
    assert_eq!(cells[0].value.as_ref(), value);

    guard.cleanup().await;
}

#[tokio::test]
async fn row_operations_require_table() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();

    assert_table_not_found(
        ctx.ops.put_cell(&table, "r1", "cf1", "q", "v").await,
        &table,
    );
    assert_table_not_found(ctx.ops.get_row(&table, "r1").await, &table);
    assert_table_not_found(ctx.ops.get_cell(&table, "r1", "cf1", "q").await, &table);
    assert!(!ctx.ops.table_exists(&table).await.unwrap());
}
