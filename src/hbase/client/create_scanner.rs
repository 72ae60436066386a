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

//! Client method for CreateScanner operation

use crate::hbase::builders::{CreateScanner, CreateScannerBldr};
use crate::hbase::client::HBaseClient;

impl HBaseClient {
    /// Opens a scanner over a table
    ///
    /// The scanner holds server resources until released with
    /// [`delete_scanner`](Self::delete_scanner).
    pub fn create_scanner(&self, table: impl Into<String>) -> CreateScannerBldr {
        CreateScanner::builder().client(self.clone()).table(table)
    }
}
