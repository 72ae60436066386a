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

use uuid::Uuid;

/// Random table name, unique enough to share a live cluster between runs.
pub fn rand_table_name() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("hbase_ops_{}", &id[..12])
}

/// Random row key.
pub fn rand_row_key() -> String {
    Uuid::new_v4().simple().to_string()
}
