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

use hbase_ops_common::fake_gateway::FakeGateway;
use hbase_ops_common::utils::rand_table_name;
use std::process::Output;

async fn hbase_ops(gateway: &FakeGateway, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_hbase-ops"))
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg(gateway.port().to_string())
        .args(args)
        .env_remove("HBASE_REST_USER")
        .env_remove("HBASE_REST_HTTPS")
        .output()
        .await
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn cli_round_trip() {
    let gateway = FakeGateway::start().await;
    let table = rand_table_name();

    let out = hbase_ops(&gateway, &["create", &table, "cf1", "cf2"]).await;
    assert!(out.status.success(), "{out:?}");
    assert!(gateway.has_table(&table));

    let out = hbase_ops(&gateway, &["create", &table, "cf1"]).await;
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));

    let out = hbase_ops(
        &gateway,
        &["put", &table, "10011", "cf1", "name", "zhangsan"],
    )
    .await;
    assert!(out.status.success(), "{out:?}");

    let out = hbase_ops(&gateway, &["get", &table, "10011"]).await;
    assert!(out.status.success(), "{out:?}");
    assert!(
        stdout(&out)
            .starts_with("row: 10011\tfamily: cf1\tqualifier: name\tvalue: zhangsan\ttimestamp: ")
    );

    let out = hbase_ops(&gateway, &["show", &table]).await;
    assert!(out.status.success(), "{out:?}");
    let text = stdout(&out);
    assert!(text.contains(&format!("table {table} exists")));
    assert!(text.contains("value: zhangsan"));
    assert_eq!(gateway.open_scanners(), 0);

    let out = hbase_ops(&gateway, &["delete", &table, "10011"]).await;
    assert!(out.status.success(), "{out:?}");
    let out = hbase_ops(&gateway, &["scan", &table]).await;
    assert!(out.status.success(), "{out:?}");
    assert!(stdout(&out).is_empty());

    let out = hbase_ops(&gateway, &["drop", &table]).await;
    assert!(out.status.success(), "{out:?}");
    let out = hbase_ops(&gateway, &["drop", &table]).await;
    assert_eq!(out.status.code(), Some(2));

    let out = hbase_ops(&gateway, &["exists", &table]).await;
    assert!(out.status.success(), "{out:?}");
    assert_eq!(stdout(&out).trim(), format!("table {table} does not exist"));
}

#[tokio::test]
async fn cli_connection_failure_exits_one() {
    let out = tokio::process::Command::new(env!("CARGO_BIN_EXE_hbase-ops"))
        .args(["--host", "127.0.0.1", "--port", "1", "list"])
        .output()
        .await
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}
