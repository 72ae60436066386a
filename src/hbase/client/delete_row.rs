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

//! Client method for DeleteRow operation

use crate::hbase::builders::{DeleteRow, DeleteRowBldr};
use crate::hbase::client::HBaseClient;
use bytes::Bytes;

impl HBaseClient {
    /// Deletes all cells of a row
    pub fn delete_row(&self, table: impl Into<String>, row: impl Into<Bytes>) -> DeleteRowBldr {
        DeleteRow::builder()
            .client(self.clone())
            .table(table)
            .row(row)
    }
}
