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

use hbase_ops::hbase::{Error, HBaseError, TableOps};

/// Writes `cf1:name` and `cf1:age` for every key.
pub async fn put_student_rows(ops: &TableOps, table: &str, keys: &[&str]) {
    for key in keys {
        ops.put_cell(table, key, "cf1", "name", format!("name-{key}"))
            .await
            .unwrap();
        ops.put_cell(table, key, "cf1", "age", "20").await.unwrap();
    }
}

pub fn assert_table_not_found(result: Result<impl std::fmt::Debug, Error>, table: &str) {
    match result {
        Err(Error::HBase(HBaseError::TableNotFound { table: t })) => assert_eq!(t, table),
        other => panic!("expected TableNotFound for {table}, got {other:?}"),
    }
}

pub fn assert_table_already_exists(result: Result<impl std::fmt::Debug, Error>, table: &str) {
    match result {
        Err(Error::HBase(HBaseError::TableAlreadyExists { table: t })) => assert_eq!(t, table),
        other => panic!("expected TableAlreadyExists for {table}, got {other:?}"),
    }
}
