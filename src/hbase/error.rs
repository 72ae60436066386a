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

//! Error definitions for HBase REST operations
//!
//! Errors are layered: request validation, transport, unexpected server
//! status and table preconditions each have their own enum, unified by
//! [`Error`] so that `?` works across all of them.

use thiserror::Error;

/// Request parameters rejected before any I/O takes place
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid table name '{name}': {reason}")]
    InvalidTableName { name: String, reason: String },

    #[error("invalid column family '{name}': {reason}")]
    InvalidColumnFamily { name: String, reason: String },

    #[error("invalid row key: {0}")]
    InvalidRowKey(String),

    #[error("invalid scanner: {0}")]
    InvalidScanner(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("base64 decoding failed: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("failed to build HTTP client: {0}")]
    HttpClientError(#[source] reqwest::Error),

    #[error("{message}")]
    StrError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Transport level failures (connection refused, reset, DNS, ...)
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("invalid URL '{url}': {source}")]
    UrlError {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// The gateway answered with a status the operation does not handle
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server failed with HTTP status code {status}: {body}")]
    HttpError { status: u16, body: String },
}

/// Table level preconditions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HBaseError {
    #[error("table '{table}' does not exist")]
    TableNotFound { table: String },

    #[error("table '{table}' already exists")]
    TableAlreadyExists { table: String },
}

/// Error type returned by every operation of this crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error(transparent)]
    HBase(#[from] HBaseError),
}

impl Error {
    /// Returns true for logical precondition failures (table missing or
    /// already present), as opposed to connectivity or server failures.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::HBase(_))
    }

    /// HTTP status code of a server error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Server(ServerError::HttpError { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn table_not_found(table: impl Into<String>) -> Self {
        Error::HBase(HBaseError::TableNotFound {
            table: table.into(),
        })
    }

    pub(crate) fn table_already_exists(table: impl Into<String>) -> Self {
        Error::HBase(HBaseError::TableAlreadyExists {
            table: table.into(),
        })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationErr::JsonError(err))
    }
}
