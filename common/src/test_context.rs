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

use crate::cleanup_guard::CleanupGuard;
use crate::fake_gateway::FakeGateway;
use crate::utils::rand_table_name;
use hbase_ops::hbase::{ClientConfig, HBaseClient, TableOps};
use std::sync::Arc;

/// Environment variable selecting a live gateway instead of the fake one.
pub const ENV_LIVE: &str = "HBASE_OPS_LIVE";

#[derive(Clone)]
pub struct TestContext {
    pub client: HBaseClient,
    pub ops: TableOps,
    /// The in-process gateway; `None` when running against a live cluster
    pub gateway: Option<Arc<FakeGateway>>,
}

impl TestContext {
    /// Connects to the gateway named by `HBASE_REST_*` when `HBASE_OPS_LIVE`
    /// is true, otherwise starts a fresh fake gateway.
    pub async fn new_from_env() -> Self {
        let live: bool = std::env::var(ENV_LIVE)
            .unwrap_or("false".into())
            .parse()
            .unwrap_or(false);
        log::debug!("{ENV_LIVE}={live}");

        if live {
            let config = ClientConfig::from_env().unwrap();
            let client = HBaseClient::from_config(&config).unwrap();
            Self {
                ops: TableOps::new(client.clone()),
                client,
                gateway: None,
            }
        } else {
            let gateway = FakeGateway::start().await;
            let client = HBaseClient::builder()
                .endpoint(gateway.endpoint())
                .build()
                .unwrap();
            Self {
                ops: TableOps::new(client.clone()),
                client,
                gateway: Some(Arc::new(gateway)),
            }
        }
    }

    /// Creates a table with a random name and the given column families.
    ///
    /// # Returns
    /// A tuple containing:
    /// - `String` - The name of the created table.
    /// - `CleanupGuard` - A guard whose `cleanup()` drops the table.
    pub async fn create_table_helper(&self, families: &[&str]) -> (String, CleanupGuard) {
        let table = rand_table_name();
        self.ops
            .create_table(&table, families.iter().copied())
            .await
            .unwrap();
        let guard = CleanupGuard::new(self.ops.clone(), &table);
        (table, guard)
    }
}
