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

//! Trait composition for REST gateway responses
//!
//! Every response keeps the request that produced it, the response headers
//! and the raw body. Responses carrying a `CellSet` decode it on first access
//! and cache the result.

use crate::hbase::error::ValidationErr;
use crate::hbase::types::{Cell, CellSetModel, HBaseRequest, Row};
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromHBaseResponse` trait for the specified types.
///
/// This macro generates the boilerplate code for parsing a gateway response,
/// storing the request, headers, and body in the response struct. Any error,
/// including a non-success status, is passed through unchanged.
macro_rules! impl_from_hbase_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::hbase::types::FromHBaseResponse for $ty {
                async fn from_hbase_response(
                    request: $crate::hbase::types::HBaseRequest,
                    response: Result<reqwest::Response, $crate::hbase::error::Error>,
                ) -> Result<Self, $crate::hbase::error::Error> {
                    let mut resp = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::hbase::error::NetworkError::ReqwestError)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasHBaseFields` trait for the specified types.
macro_rules! impl_has_hbase_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::hbase::response_traits::HasHBaseFields for $ty {
                /// The request that was sent to the gateway.
                #[inline]
                fn request(&self) -> &$crate::hbase::types::HBaseRequest {
                    &self.request
                }

                /// HTTP headers returned by the gateway.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the gateway, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasCells` trait for types with a `cached_rows` field.
macro_rules! impl_has_cells {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::hbase::response_traits::HasCells for $ty {
                fn rows(&self) -> Result<&[$crate::hbase::types::Row], $crate::hbase::error::ValidationErr> {
                    self.cached_rows
                        .get_or_try_init(|| $crate::hbase::response_traits::decode_cell_set(&self.body))
                        .map(Vec::as_slice)
                }
            }
        )*
    };
}

/// Base trait providing access to common response fields
pub trait HasHBaseFields {
    /// The request that was sent to the gateway.
    fn request(&self) -> &HBaseRequest;
    /// HTTP headers returned by the gateway.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the gateway, as raw bytes.
    fn body(&self) -> &Bytes;

    /// Table the request addressed; empty for cluster-wide requests.
    #[inline]
    fn table(&self) -> &str {
        self.request().table_name()
    }
}

/// Responses whose body is a `CellSet` document
pub trait HasCells: HasHBaseFields {
    /// Decoded rows, in the order the gateway returned them.
    fn rows(&self) -> Result<&[Row], ValidationErr>;

    /// All cells of all rows, flattened.
    fn cells(&self) -> Result<Vec<Cell>, ValidationErr> {
        Ok(self
            .rows()?
            .iter()
            .flat_map(|row| row.cells.iter().cloned())
            .collect())
    }
}

/// Decodes a `CellSet` body; an empty body holds no rows.
pub fn decode_cell_set(body: &[u8]) -> Result<Vec<Row>, ValidationErr> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let model: CellSetModel = serde_json::from_slice(body)?;
    model.decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body() {
        assert!(decode_cell_set(b"").unwrap().is_empty());
        assert!(decode_cell_set(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_cell_set(b"<html>").is_err());
        assert!(decode_cell_set(br#"{"Row":[{"key":"***"}]}"#).is_err());
    }
}
