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

//! REST gateway client and its per-operation entry points

mod hbase_client;

pub use hbase_client::{HBaseClient, HBaseClientBuilder};

// Table administration
mod create_table;
mod delete_table;
mod get_table_schema;
mod list_tables;
mod table_exists;

// Row operations
mod delete_row;
mod get_cell;
mod get_row;
mod put_cell;

// Scanners
mod create_scanner;
mod delete_scanner;
mod scanner_next;
