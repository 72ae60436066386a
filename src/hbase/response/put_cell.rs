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

//! Response type for PutCell operation

use crate::hbase::types::HBaseRequest;
use crate::{impl_from_hbase_response, impl_has_hbase_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response from PutCell operation
#[derive(Clone, Debug)]
pub struct PutCellResponse {
    request: HBaseRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_hbase_fields!(PutCellResponse);
impl_from_hbase_response!(PutCellResponse);
