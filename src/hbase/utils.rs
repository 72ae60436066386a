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

//! Name validation and encoding helpers for REST gateway requests

use crate::hbase::error::ValidationErr;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length of a table name in bytes, namespace prefix included.
pub const MAX_TABLE_NAME_LEN: usize = 255;

/// Version count used when all stored versions are requested.
pub const ALL_VERSIONS: u32 = i32::MAX as u32;

lazy_static! {
    static ref TABLE_NAME_REGEX: Regex =
        Regex::new(r"^(?:[A-Za-z0-9_]+:)?[A-Za-z0-9_][A-Za-z0-9_.\-]*$").unwrap();
}

/// Validates a table name, optionally prefixed with `namespace:`.
pub fn check_table_name(name: &str) -> Result<(), ValidationErr> {
    let invalid = |reason: &str| ValidationErr::InvalidTableName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("table name cannot be empty"));
    }
    if name.len() > MAX_TABLE_NAME_LEN {
        return Err(invalid("table name must be at most 255 bytes"));
    }
    if !TABLE_NAME_REGEX.is_match(name) {
        return Err(invalid(
            "table name may only contain letters, digits, '_', '-' and '.', must not start with '-' or '.', and allows one 'namespace:' prefix",
        ));
    }
    Ok(())
}

/// Validates a column family name.
pub fn check_column_family(name: &str) -> Result<(), ValidationErr> {
    let invalid = |reason: &str| ValidationErr::InvalidColumnFamily {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("column family cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("column family cannot start with '.'"));
    }
    if name.contains(':') {
        return Err(invalid("column family cannot contain ':'"));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(invalid("column family cannot contain control characters"));
    }
    Ok(())
}

/// Row keys the gateway resolves to a table subresource, or that URL
/// normalization removes from the path, instead of addressing a row.
pub const RESERVED_ROW_KEYS: [&[u8]; 6] =
    [b"schema", b"scanner", b"exists", b"regions", b".", b".."];

/// Validates a row key.
///
/// Keys in [`RESERVED_ROW_KEYS`] cannot be addressed as `/{table}/{row}` and
/// are rejected.
pub fn check_row_key(row: &[u8]) -> Result<(), ValidationErr> {
    if row.is_empty() {
        return Err(ValidationErr::InvalidRowKey(
            "row key cannot be empty".to_string(),
        ));
    }
    if RESERVED_ROW_KEYS.contains(&row) {
        return Err(ValidationErr::InvalidRowKey(format!(
            "'{}' is reserved by the REST gateway",
            String::from_utf8_lossy(row)
        )));
    }
    Ok(())
}

/// Base64 encodes bytes the way the gateway expects them in JSON documents.
pub fn b64_encode(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

/// Decodes a base64 field of a gateway JSON document.
pub fn b64_decode(data: &str) -> Result<Vec<u8>, ValidationErr> {
    Ok(STANDARD.decode(data)?)
}

/// Joins family and qualifier into the gateway's `family:qualifier` column spec.
pub fn column_spec(family: &str, qualifier: &[u8]) -> Vec<u8> {
    let mut spec = Vec::with_capacity(family.len() + 1 + qualifier.len());
    spec.extend_from_slice(family.as_bytes());
    spec.push(b':');
    spec.extend_from_slice(qualifier);
    spec
}

/// Splits a column spec at the first `:` into family and qualifier.
///
/// A spec without `:` names a whole family and yields an empty qualifier.
pub fn split_column_spec(spec: &[u8]) -> (String, Vec<u8>) {
    match spec.iter().position(|b| *b == b':') {
        Some(pos) => (
            String::from_utf8_lossy(&spec[..pos]).into_owned(),
            spec[pos + 1..].to_vec(),
        ),
        None => (String::from_utf8_lossy(spec).into_owned(), Vec::new()),
    }
}

/// Percent encodes one path segment (row key, qualifier, table name).
pub fn encode_path_segment(segment: &[u8]) -> String {
    urlencoding::encode_binary(segment).into_owned()
}
