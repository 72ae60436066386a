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

//! Builder for CreateScanner operation

use crate::hbase::client::HBaseClient;
use crate::hbase::error::ValidationErr;
use crate::hbase::response::CreateScannerResponse;
use crate::hbase::types::{HBaseApi, HBaseRequest, ScannerModel, ToHBaseRequest};
use crate::hbase::utils::{b64_encode, check_column_family, check_table_name, split_column_spec};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for CreateScanner operation
///
/// Opens a server-side scanner over a table (`PUT /{table}/scanner`). The
/// gateway answers `201 Created` with the scanner's URL in `Location`; batches
/// are then fetched with [`ScannerNext`](super::ScannerNext) and the scanner is
/// released with [`DeleteScanner`](super::DeleteScanner).
///
/// # Example
///
/// ```no_run
/// use hbase_ops::hbase::HBaseClient;
/// use hbase_ops::hbase::types::HBaseApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HBaseClient::builder().endpoint("http://localhost:8080").build()?;
///
/// let scanner = client
///     .create_scanner("student01")
///     .batch(Some(100u32))
///     .build()
///     .send()
///     .await?;
/// println!("scanner at {}", scanner.scanner_path()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateScanner {
    #[builder(!default)]
    client: HBaseClient,
    #[builder(!default, setter(into))]
    table: String,
    /// First row to return (inclusive)
    #[builder(default, setter(into))]
    start_row: Option<Bytes>,
    /// Row to stop at (exclusive)
    #[builder(default, setter(into))]
    end_row: Option<Bytes>,
    /// Column families (`cf`) or columns (`cf:qualifier`) to return; all when empty
    #[builder(default)]
    columns: Vec<Bytes>,
    /// Maximum number of cells per batch
    #[builder(default, setter(into))]
    batch: Option<u32>,
    #[builder(default, setter(into))]
    max_versions: Option<u32>,
}

impl HBaseApi for CreateScanner {
    type HBaseResponse = CreateScannerResponse;
}

/// Builder type for CreateScanner
pub type CreateScannerBldr =
    CreateScannerBuilder<((HBaseClient,), (String,), (), (), (), (), ())>;

impl ToHBaseRequest for CreateScanner {
    fn to_hbase_request(self) -> Result<HBaseRequest, ValidationErr> {
        check_table_name(&self.table)?;

        for column in &self.columns {
            let (family, _) = split_column_spec(column);
            check_column_family(&family)?;
        }
        if self.batch == Some(0) {
            return Err(ValidationErr::InvalidScanner(
                "batch size must be at least 1".to_string(),
            ));
        }
        if let (Some(start), Some(end)) = (&self.start_row, &self.end_row)
            && !end.is_empty()
            && start > end
        {
            return Err(ValidationErr::InvalidScanner(
                "start row sorts after end row".to_string(),
            ));
        }

        let scanner = ScannerModel {
            start_row: self.start_row.as_ref().map(b64_encode),
            end_row: self.end_row.as_ref().map(b64_encode),
            column: self.columns.iter().map(b64_encode).collect(),
            batch: self.batch,
            max_versions: self.max_versions,
        };
        let body = serde_json::to_vec(&scanner)?;

        Ok(HBaseRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(format!("/{}/scanner", self.table))
            .table(self.table)
            .body(body)
            .build())
    }
}
