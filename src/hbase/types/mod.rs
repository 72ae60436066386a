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

//! Core types for REST gateway operations

mod model;

pub use model::{
    Cell, CellModel, CellSetModel, ColumnFamily, ColumnSchemaModel, Row, RowModel, ScannerModel,
    TableListModel, TableModel, TableSchema, TableSchemaModel,
};

use crate::hbase::client::HBaseClient;
use crate::hbase::error::{Error, ValidationErr};
use crate::hbase::multimap_ext::Multimap;
use typed_builder::TypedBuilder;

/// Request structure for gateway operations
#[derive(Clone, Debug, TypedBuilder)]
pub struct HBaseRequest {
    /// Client reference
    #[builder(!default)]
    pub client: HBaseClient,
    /// HTTP method
    #[builder(!default)]
    pub method: http::Method,
    /// Request path relative to the gateway root, already percent encoded
    #[builder(!default, setter(into))]
    pub path: String,
    /// Table the request addresses, if any
    #[builder(default, setter(into, strip_option))]
    pub table: Option<String>,
    /// Query parameters
    #[builder(default)]
    pub query_params: Multimap,
    /// Request headers
    #[builder(default)]
    pub headers: Multimap,
    /// Request body (JSON)
    #[builder(default, setter(strip_option))]
    pub body: Option<Vec<u8>>,
}

impl HBaseRequest {
    /// Execute the request
    ///
    /// # Errors
    ///
    /// Returns `Error` if the HTTP request fails or the server returns a
    /// non-success status.
    pub(crate) async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute_hbase(
                self.method.clone(),
                &self.path,
                &mut self.headers,
                &self.query_params,
                self.body.take(),
            )
            .await
    }

    /// Table name for error reporting; empty when the request has none.
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or_default()
    }
}

/// Convert builder to HBaseRequest
pub trait ToHBaseRequest {
    /// Convert this builder into an HBaseRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if the request parameters are invalid.
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr>;
}

/// Execute a gateway operation
pub trait HBaseApi: ToHBaseRequest {
    /// Response type for this operation
    type HBaseResponse: FromHBaseResponse;

    /// Send the request and await the response
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails or the response cannot be parsed.
    fn send(self) -> impl std::future::Future<Output = Result<Self::HBaseResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let mut request: HBaseRequest = self.to_hbase_request()?;
            let response: Result<reqwest::Response, Error> = request.execute().await;
            Self::HBaseResponse::from_hbase_response(request, response).await
        }
    }
}

/// Parse response from the gateway
#[async_trait::async_trait]
pub trait FromHBaseResponse: Sized {
    /// Parse the response of an HBaseRequest
    ///
    /// # Errors
    ///
    /// Returns `Error` if the response cannot be parsed or contains an error.
    async fn from_hbase_response(
        request: HBaseRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}
