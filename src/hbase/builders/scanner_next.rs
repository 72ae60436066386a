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

//! Builder for ScannerNext operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::ScannerNextResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ToHBaseRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for ScannerNext operation
///
/// Fetches the next batch of a scanner (`GET {location}`). The response is
/// exhausted once the gateway answers `204 No Content`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ScannerNext {
    #[builder(!default)]
    client: HBaseClient,
    /// Path of the scanner as returned by [`CreateScanner`](super::CreateScanner)
    #[builder(!default, setter(into))]
    scanner_path: String,
}

impl HBaseApi for ScannerNext {
    type HBaseResponse = ScannerNextResponse;
}

/// Builder type for ScannerNext
pub type ScannerNextBldr = ScannerNextBuilder<((HBaseClient,), (String,))>;

impl ToHBaseRequest for ScannerNext {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        let table = scanner_table(&self.scanner_path)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .table(table)
            .path(self.scanner_path)
            .build())
    }
}

/// Returns the table addressed by a `/{table}/scanner/{id}` path.
pub(crate) fn scanner_table(path: &str) -> Result<String, ValidationErr> {
    let mut segments = path.strip_prefix('/').unwrap_or_default().split('/');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(table), Some("scanner"), Some(id), None) if !table.is_empty() && !id.is_empty() => {
            Ok(table.to_string())
        }
        _ => Err(ValidationErr::InvalidScanner(format!(
            "'{path}' is not a scanner path"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_table() {
        assert_eq!(
            scanner_table("/student01/scanner/15953000000001a2b3c").unwrap(),
            "student01"
        );
        assert!(scanner_table("").is_err());
        assert!(scanner_table("student01/scanner/1").is_err());
        assert!(scanner_table("/student01/scanner/").is_err());
        assert!(scanner_table("/student01/10011").is_err());
    }
}
