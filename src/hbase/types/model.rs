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

//! Table, row and cell types, plus the gateway's JSON representations
//!
//! The wire models follow the REST gateway's JSON schema: row keys, column
//! specs (`family:qualifier`) and values are base64 strings, timestamps are
//! milliseconds since the epoch, and schema attributes are string valued.

use crate::hbase::error::ValidationErr;
use crate::hbase::utils::{b64_decode, b64_encode, column_spec, split_column_spec};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Schema attribute holding the number of versions a family retains.
pub const VERSIONS_ATTRIBUTE: &str = "VERSIONS";

// ============================================================================
// Domain types
// ============================================================================

/// One stored version of a cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: Bytes,
    pub family: String,
    pub qualifier: Bytes,
    pub value: Bytes,
    /// Milliseconds since the epoch
    pub timestamp: u64,
}

impl Cell {
    pub fn row_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.row)
    }

    pub fn qualifier_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.qualifier)
    }

    pub fn value_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }

    /// Timestamp as a UTC date, `None` if out of range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row: {}\tfamily: {}\tqualifier: {}\tvalue: {}\ttimestamp: {}",
            self.row_str(),
            self.family,
            self.qualifier_str(),
            self.value_str(),
            self.timestamp
        )
    }
}

/// A row and the cells returned for it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub key: Bytes,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn key_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.key)
    }

    /// Latest version of `family:qualifier` in this row.
    pub fn latest(&self, family: &str, qualifier: &[u8]) -> Option<&Cell> {
        self.cells
            .iter()
            .filter(|c| c.family == family && c.qualifier.as_ref() == qualifier)
            .max_by_key(|c| c.timestamp)
    }
}

/// Column family definition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnFamily {
    pub name: String,
    /// Number of versions retained; `None` keeps the server default
    pub max_versions: Option<u32>,
    /// Other schema attributes (`BLOOMFILTER`, `TTL`, ...)
    pub attributes: BTreeMap<String, String>,
}

impl ColumnFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_max_versions(mut self, versions: u32) -> Self {
        self.max_versions = Some(versions);
        self
    }
}

impl From<&str> for ColumnFamily {
    fn from(name: &str) -> Self {
        ColumnFamily::new(name)
    }
}

impl From<String> for ColumnFamily {
    fn from(name: String) -> Self {
        ColumnFamily::new(name)
    }
}

impl From<&String> for ColumnFamily {
    fn from(name: &String) -> Self {
        ColumnFamily::new(name.as_str())
    }
}

/// Table definition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub column_families: Vec<ColumnFamily>,
    pub attributes: BTreeMap<String, String>,
}

impl TableSchema {
    pub fn family_names(&self) -> Vec<&str> {
        self.column_families
            .iter()
            .map(|cf| cf.name.as_str())
            .collect()
    }

    pub fn has_family(&self, name: &str) -> bool {
        self.column_families.iter().any(|cf| cf.name == name)
    }
}

// ============================================================================
// Wire models
// ============================================================================

/// `CellSet` document: rows with their cells
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CellSetModel {
    #[serde(rename = "Row", default)]
    pub rows: Vec<RowModel>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RowModel {
    pub key: String,
    #[serde(rename = "Cell", default)]
    pub cells: Vec<CellModel>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CellModel {
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(rename = "$", default)]
    pub value: String,
}

impl CellSetModel {
    /// Document writing one cell.
    pub fn single_cell(row: &[u8], family: &str, qualifier: &[u8], value: &[u8]) -> Self {
        Self {
            rows: vec![RowModel {
                key: b64_encode(row),
                cells: vec![CellModel {
                    column: b64_encode(column_spec(family, qualifier)),
                    timestamp: None,
                    value: b64_encode(value),
                }],
            }],
        }
    }

    /// Decodes every row and cell of the document.
    pub fn decode(&self) -> Result<Vec<Row>, ValidationErr> {
        self.rows.iter().map(RowModel::decode).collect()
    }
}

impl RowModel {
    pub fn decode(&self) -> Result<Row, ValidationErr> {
        let key = Bytes::from(b64_decode(&self.key)?);
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                let (family, qualifier) = split_column_spec(&b64_decode(&cell.column)?);
                Ok(Cell {
                    row: key.clone(),
                    family,
                    qualifier: Bytes::from(qualifier),
                    value: Bytes::from(b64_decode(&cell.value)?),
                    timestamp: cell.timestamp.unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, ValidationErr>>()?;
        Ok(Row { key, cells })
    }
}

/// `TableSchema` document
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableSchemaModel {
    pub name: String,
    #[serde(rename = "ColumnSchema", default)]
    pub column_schema: Vec<ColumnSchemaModel>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ColumnSchemaModel {
    pub name: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

fn attribute_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<&ColumnFamily> for ColumnSchemaModel {
    fn from(cf: &ColumnFamily) -> Self {
        let mut attributes: BTreeMap<String, serde_json::Value> = cf
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        if let Some(versions) = cf.max_versions {
            attributes.insert(
                VERSIONS_ATTRIBUTE.to_string(),
                serde_json::Value::String(versions.to_string()),
            );
        }
        Self {
            name: cf.name.clone(),
            attributes,
        }
    }
}

impl From<&ColumnSchemaModel> for ColumnFamily {
    fn from(model: &ColumnSchemaModel) -> Self {
        let mut attributes: BTreeMap<String, String> = model
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), attribute_string(v)))
            .collect();
        let max_versions = attributes
            .remove(VERSIONS_ATTRIBUTE)
            .and_then(|v| v.parse().ok());
        Self {
            name: model.name.clone(),
            max_versions,
            attributes,
        }
    }
}

impl From<&TableSchemaModel> for TableSchema {
    fn from(model: &TableSchemaModel) -> Self {
        Self {
            name: model.name.clone(),
            column_families: model.column_schema.iter().map(ColumnFamily::from).collect(),
            attributes: model
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), attribute_string(v)))
                .collect(),
        }
    }
}

/// `TableList` document
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableListModel {
    #[serde(rename = "table", default)]
    pub tables: Vec<TableModel>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableModel {
    pub name: String,
}

/// `Scanner` document posted to create a scanner
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScannerModel {
    #[serde(rename = "startRow", default, skip_serializing_if = "Option::is_none")]
    pub start_row: Option<String>,
    #[serde(rename = "endRow", default, skip_serializing_if = "Option::is_none")]
    pub end_row: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<u32>,
    #[serde(rename = "maxVersions", default, skip_serializing_if = "Option::is_none")]
    pub max_versions: Option<u32>,
}
