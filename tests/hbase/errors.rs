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

use hbase_ops::hbase::error::{NetworkError, ValidationErr};
use hbase_ops::hbase::types::HBaseApi;
use hbase_ops::hbase::{Error, HBaseClient, TableOps};
use hbase_ops_common::test_context::TestContext;

#[tokio::test]
async fn invalid_names_fail_before_io() {
    let ctx = TestContext::new_from_env().await;
    let before = ctx.gateway.as_ref().map(|g| g.mutations());

    let err = ctx.ops.create_table("bad table", ["cf1"]).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidTableName { .. })
    ));

    let err = ctx
        .client
        .create_table("t1", vec!["cf:1".into()])
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidColumnFamily { .. })
    ));

    assert_eq!(ctx.gateway.as_ref().map(|g| g.mutations()), before);
}

#[tokio::test]
async fn unknown_family_is_a_server_error() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;

    let err = ctx
        .ops
        .put_cell(&table, "r1", "nope", "q", "v")
        .await
        .unwrap_err();
    assert!(!err.is_precondition());
    assert!(matches!(err, Error::Server(_)));

    guard.cleanup().await;
}

#[tokio::test]
async fn unreachable_gateway_is_a_network_error() {
    // port 1 is never served
    let client = HBaseClient::builder()
        .endpoint("http://127.0.0.1:1")
        .build()
        .unwrap();
    let ops = TableOps::new(client);

    let err = ops.table_exists("student01").await.unwrap_err();
    assert!(matches!(err, Error::Network(NetworkError::ReqwestError(_))));
    assert!(!err.is_precondition());
}

#[tokio::test]
async fn reserved_row_keys_are_rejected() {
    let ctx = TestContext::new_from_env().await;
    let (table, guard) = ctx.create_table_helper(&["cf1"]).await;
    let before = ctx.gateway.as_ref().map(|g| g.mutations());

    for key in ["exists", "schema", "scanner", "regions", ".", ".."] {
        let err = ctx
            .ops
            .put_cell(&table, key, "cf1", "name", "zhangsan")
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationErr::InvalidRowKey(_))),
            "{key}: {err:?}"
        );
        let err = ctx.ops.get_row(&table, key).await.unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationErr::InvalidRowKey(_))),
            "{key}: {err:?}"
        );
        let err = ctx.ops.delete_rows(&table, [key]).await.unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationErr::InvalidRowKey(_))),
            "{key}: {err:?}"
        );
    }

    assert_eq!(ctx.gateway.as_ref().map(|g| g.mutations()), before);
    assert!(ctx.ops.table_exists(&table).await.unwrap());
    guard.cleanup().await;
}

#[tokio::test]
async fn reserved_row_keys_fail_without_connecting() {
    let client = HBaseClient::builder()
        .endpoint("http://127.0.0.1:1")
        .build()
        .unwrap();
    let ops = TableOps::new(client);

    let err = ops.get_row("student01", "..").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidRowKey(_))
    ));
    let err = ops
        .get_cell("student01", "exists", "cf1", "name")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidRowKey(_))
    ));
}
