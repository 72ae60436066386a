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

use hbase_ops::hbase::types::HBaseApi;
use hbase_ops_common::test_context::TestContext;
use hbase_ops_common::utils::rand_table_name;

#[tokio::test]
async fn table_exists_check() {
    let ctx = TestContext::new_from_env().await;
    let table = rand_table_name();

    // 404 is a valid answer, not an error
    let resp = ctx
        .client
        .table_exists(&table)
        .build()
        .send()
        .await
        .expect("table_exists should not return error for non-existent table");
    assert!(!resp.exists());
    assert!(!ctx.ops.table_exists(&table).await.unwrap());

    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    assert!(ctx.ops.table_exists(&table).await.unwrap());

    guard.cleanup().await;
    assert!(!ctx.ops.table_exists(&table).await.unwrap());
}
