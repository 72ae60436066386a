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

//! Response type for CreateScanner operation
//!
//! ## Response (HTTP 201)
//!
//! Empty body; the scanner URL is in the `Location` header, e.g.
//! `http://gateway:8080/student01/scanner/159530000000140a6a`.

use crate::hbase::error::{Error, NetworkError, ValidationErr};
use crate::hbase::header_constants::LOCATION;
use crate::hbase::response::is_not_found;
use crate::hbase::types::{FromHBaseResponse, HBaseRequest};
use crate::impl_has_hbase_fields;
use bytes::Bytes;
use http::HeaderMap;

/// Response from CreateScanner operation
#[derive(Clone, Debug)]
pub struct CreateScannerResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl CreateScannerResponse {
    /// Path of the new scanner, relative to the gateway root.
    pub fn scanner_path(&self) -> Result<String, ValidationErr> {
        let location = self
            .headers
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ValidationErr::InvalidScanner("missing Location header in response".to_string())
            })?;
        scanner_path_from_location(location)
    }
}

/// Extracts the path of an absolute or root-relative scanner location.
pub(crate) fn scanner_path_from_location(location: &str) -> Result<String, ValidationErr> {
    if location.starts_with('/') {
        return Ok(location.to_string());
    }
    let url = url::Url::parse(location).map_err(|e| {
        ValidationErr::InvalidScanner(format!("invalid scanner location '{location}': {e}"))
    })?;
    Ok(url.path().to_string())
}

impl_has_hbase_fields!(CreateScannerResponse);

#[async_trait::async_trait]
impl FromHBaseResponse for CreateScannerResponse {
    async fn from_hbase_response(
        request: HBaseRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(mut resp) => Ok(Self {
                headers: std::mem::take(resp.headers_mut()),
                body: resp.bytes().await.map_err(NetworkError::ReqwestError)?,
                request,
            }),
            Err(e) if is_not_found(&e) => Err(Error::table_not_found(request.table_name())),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_path_from_location() {
        assert_eq!(
            scanner_path_from_location("http://192.168.88.110:8080/student01/scanner/15953000a")
                .unwrap(),
            "/student01/scanner/15953000a"
        );
        assert_eq!(
            scanner_path_from_location("/student01/scanner/1").unwrap(),
            "/student01/scanner/1"
        );
        assert!(scanner_path_from_location("student01/scanner/1").is_err());
    }
}
