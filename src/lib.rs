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

//! # HBase table operations (`hbase-ops`)
//!
//! This crate provides a strongly-typed, async interface to the HBase REST
//! gateway, plus the small set of table operations a command line exerciser
//! needs: existence check, create, drop, put, delete, get and scan.
//!
//! Each gateway call has a corresponding request builder (e.g.,
//! [`hbase::builders::TableExists`], [`hbase::builders::PutCell`],
//! [`hbase::builders::CreateScanner`]), which allows users to configure request
//! parameters using a fluent builder pattern.
//!
//! All request builders implement the [`hbase::types::HBaseApi`] trait, which
//! provides the async [`send`](crate::hbase::types::HBaseApi::send) method to
//! execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use hbase_ops::hbase::HBaseClient;
//! use hbase_ops::hbase::types::HBaseApi;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = HBaseClient::builder()
//!         .endpoint("http://127.0.0.1:8080")
//!         .build()
//!         .unwrap(); // configure your client here
//!
//!     let exists = client
//!         .table_exists("student")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("Table exists: {}", exists.exists());
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`hbase::HBaseClient`] returns a builder struct
//! - Builders implement [`hbase::types::ToHBaseRequest`] for request conversion and [`hbase::types::HBaseApi`] for execution
//! - Responses implement [`hbase::types::FromHBaseResponse`] for consistent parsing
//! - [`hbase::TableOps`] layers the precondition checks of the table exerciser on top

#![allow(clippy::result_large_err)]
pub mod hbase;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
