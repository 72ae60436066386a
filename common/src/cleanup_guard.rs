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

use hbase_ops::hbase::{HBaseError, TableOps};

/// Cleanup guard that drops the table when cleaned up
pub struct CleanupGuard {
    ops: TableOps,
    table: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(ops: TableOps, table: S) -> Self {
        Self {
            ops,
            table: table.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(&self.ops, &self.table).await;
    }
}

pub async fn cleanup(ops: &TableOps, table: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while dropping table {table}");
        },
        outcome = ops.drop_table(table) => {
            match outcome {
                Ok(()) => {}
                Err(hbase_ops::hbase::Error::HBase(HBaseError::TableNotFound { .. })) => {}
                Err(e) => {
                    eprintln!("Error dropping table '{table}':\n{e}");
                }
            }
        }
    );
}
