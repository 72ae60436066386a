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

//! Argument builders for REST gateway operations

// Table administration
mod create_table;
mod delete_table;
mod get_table_schema;
mod list_tables;
mod table_exists;

pub use create_table::{CreateTable, CreateTableBldr};
pub use delete_table::{DeleteTable, DeleteTableBldr};
pub use get_table_schema::{GetTableSchema, GetTableSchemaBldr};
pub use list_tables::{ListTables, ListTablesBldr};
pub use table_exists::{TableExists, TableExistsBldr};

// Row operations
mod delete_row;
mod get_cell;
mod get_row;
mod put_cell;

pub use delete_row::{DeleteRow, DeleteRowBldr};
pub use get_cell::{GetCell, GetCellBldr};
pub use get_row::{GetRow, GetRowBldr};
pub use put_cell::{PutCell, PutCellBldr};

// Scanners
mod create_scanner;
mod delete_scanner;
mod scanner_next;

pub use create_scanner::{CreateScanner, CreateScannerBldr};
pub use delete_scanner::{DeleteScanner, DeleteScannerBldr};
pub use scanner_next::{ScannerNext, ScannerNextBldr};

#[cfg(test)]
pub(crate) fn test_client() -> crate::hbase::client::HBaseClient {
    crate::hbase::client::HBaseClient::builder()
        .endpoint("http://localhost:8080")
        .build()
        .unwrap()
}
