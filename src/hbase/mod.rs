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

//! HBase REST gateway support
//!
//! The REST gateway bundled with HBase exposes tables, rows, cells and
//! scanners as HTTP resources. Row keys, column specs and values travel base64
//! encoded inside JSON documents; timestamps are milliseconds since the epoch.
//!
//! # Key Concepts
//!
//! - **Tables**: named, with an ordered set of column families (`/{table}/schema`)
//! - **Rows**: addressed by key (`/{table}/{row}`), holding versioned cells
//! - **Scanners**: server-side cursors created with `PUT /{table}/scanner` and
//!   addressed by the URL returned in the `Location` header
//!
//! # Example
//!
//! ```no_run
//! use hbase_ops::hbase::{ClientConfig, HBaseClient, TableOps};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let ops = TableOps::new(HBaseClient::from_config(&config)?);
//!
//! ops.create_table("student01", ["cf1", "cf2"]).await?;
//! ops.put_cell("student01", "10011", "cf1", "name", "zhangsan").await?;
//! for cell in ops.get_row("student01", "10011").await? {
//!     println!("{cell}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod builders;
pub mod client;
pub mod config;
pub mod error;
pub mod header_constants;
pub mod multimap_ext;
pub mod response;
pub mod response_traits;
pub mod table_ops;
pub mod types;
pub mod utils;

pub use client::{HBaseClient, HBaseClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, HBaseError};
pub use response_traits::{HasCells, HasHBaseFields};
pub use table_ops::{ScanOptions, TableOps};
pub use types::{Cell, ColumnFamily, Row, TableSchema};
