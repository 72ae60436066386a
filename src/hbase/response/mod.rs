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

//! Response types for REST gateway operations

// Table administration
mod create_table;
mod delete_table;
mod get_table_schema;
mod list_tables;
mod table_exists;

pub use create_table::CreateTableResponse;
pub use delete_table::DeleteTableResponse;
pub use get_table_schema::GetTableSchemaResponse;
pub use list_tables::ListTablesResponse;
pub use table_exists::TableExistsResponse;

// Row operations
mod delete_row;
mod get_cell;
mod get_row;
mod put_cell;

pub use delete_row::DeleteRowResponse;
pub use get_cell::GetCellResponse;
pub use get_row::GetRowResponse;
pub use put_cell::PutCellResponse;

// Scanners
mod create_scanner;
mod delete_scanner;
mod scanner_next;

pub use create_scanner::CreateScannerResponse;
pub use delete_scanner::DeleteScannerResponse;
pub use scanner_next::ScannerNextResponse;

use crate::hbase::error::Error;

/// True if the gateway answered `404 Not Found`.
pub(crate) fn is_not_found(err: &Error) -> bool {
    err.http_status() == Some(404)
}
