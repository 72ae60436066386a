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

//! Table operations with existence preconditions
//!
//! [`TableOps`] bundles the operations of the table exerciser. Each one checks
//! its precondition (table present or absent) first and reports a failed
//! check as [`HBaseError`](crate::hbase::HBaseError) instead of mutating
//! anything. Operations run strictly one after another; nothing is retried.

use crate::hbase::client::HBaseClient;
use crate::hbase::error::Error;
use crate::hbase::response_traits::HasCells;
use crate::hbase::types::{Cell, ColumnFamily, HBaseApi, Row, TableSchema};
use crate::hbase::utils::{check_row_key, check_table_name};
use bytes::Bytes;

/// Cells per scanner batch unless configured otherwise.
pub const DEFAULT_SCAN_BATCH: u32 = 100;

/// Range and column selection for [`TableOps::scan_table`]
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// First row to return (inclusive)
    pub start_row: Option<Bytes>,
    /// Row to stop at (exclusive)
    pub end_row: Option<Bytes>,
    /// Families (`cf`) or columns (`cf:qualifier`); all when empty
    pub columns: Vec<Bytes>,
    /// Cells per batch, [`DEFAULT_SCAN_BATCH`] when unset
    pub batch: Option<u32>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_row(mut self, row: impl AsRef<[u8]>) -> Self {
        self.start_row = Some(Bytes::copy_from_slice(row.as_ref()));
        self
    }

    pub fn end_row(mut self, row: impl AsRef<[u8]>) -> Self {
        self.end_row = Some(Bytes::copy_from_slice(row.as_ref()));
        self
    }

    pub fn column(mut self, column: impl AsRef<[u8]>) -> Self {
        self.columns.push(Bytes::copy_from_slice(column.as_ref()));
        self
    }

    pub fn batch(mut self, batch: u32) -> Self {
        self.batch = Some(batch);
        self
    }
}

/// Table exerciser operations on top of an [`HBaseClient`]
#[derive(Clone, Debug)]
pub struct TableOps {
    client: HBaseClient,
}

impl TableOps {
    pub fn new(client: HBaseClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HBaseClient {
        &self.client
    }

    /// Returns whether `table` exists.
    pub async fn table_exists(&self, table: &str) -> Result<bool, Error> {
        let exists = self.client.table_exists(table).build().send().await?.exists();
        log::info!("table '{table}' exists: {exists}");
        Ok(exists)
    }

    /// Creates `table` with the given column families.
    ///
    /// Fails with [`HBaseError::TableAlreadyExists`](crate::hbase::HBaseError::TableAlreadyExists)
    /// without touching the existing table.
    pub async fn create_table<I, F>(&self, table: &str, column_families: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = F>,
        F: Into<ColumnFamily>,
    {
        let column_families: Vec<ColumnFamily> =
            column_families.into_iter().map(Into::into).collect();

        if self.table_exists(table).await? {
            log::info!("table '{table}' already exists, not creating it");
            return Err(Error::table_already_exists(table));
        }

        let names: Vec<String> = column_families.iter().map(|cf| cf.name.clone()).collect();
        self.client
            .create_table(table, column_families)
            .build()
            .send()
            .await?;
        log::info!("created table '{table}' with column families {names:?}");
        Ok(())
    }

    /// Disables and deletes `table`.
    ///
    /// Fails with [`HBaseError::TableNotFound`](crate::hbase::HBaseError::TableNotFound)
    /// when there is nothing to drop.
    pub async fn drop_table(&self, table: &str) -> Result<(), Error> {
        self.ensure_exists(table).await?;
        self.client.delete_table(table).build().send().await?;
        log::info!("dropped table '{table}'");
        Ok(())
    }

    /// Writes one cell.
    pub async fn put_cell(
        &self,
        table: &str,
        row: impl AsRef<[u8]>,
        family: &str,
        qualifier: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<(), Error> {
        let row = Bytes::copy_from_slice(row.as_ref());
        check_row_key(&row)?;
        self.ensure_exists(table).await?;
        let qualifier = Bytes::copy_from_slice(qualifier.as_ref());
        self.client
            .put_cell(
                table,
                row.clone(),
                family,
                qualifier.clone(),
                Bytes::copy_from_slice(value.as_ref()),
            )
            .build()
            .send()
            .await?;
        log::info!(
            "put {table}/{}/{family}:{}",
            String::from_utf8_lossy(&row),
            String::from_utf8_lossy(&qualifier)
        );
        Ok(())
    }

    /// Deletes rows by key, in order, and returns how many were processed.
    ///
    /// Keys holding no cells are not an error. All keys are validated before
    /// the first deletion.
    pub async fn delete_rows<I, R>(&self, table: &str, rows: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let rows: Vec<Bytes> = rows
            .into_iter()
            .map(|r| Bytes::copy_from_slice(r.as_ref()))
            .collect();
        for row in &rows {
            check_row_key(row)?;
        }

        self.ensure_exists(table).await?;
        for row in &rows {
            self.client
                .delete_row(table, row.clone())
                .build()
                .send()
                .await?;
            log::info!("deleted row {table}/{}", String::from_utf8_lossy(row));
        }
        Ok(rows.len())
    }

    /// Returns every stored version of every cell of `row`.
    pub async fn get_row(&self, table: &str, row: impl AsRef<[u8]>) -> Result<Vec<Cell>, Error> {
        self.get_row_versions(table, row, None).await
    }

    /// Returns the cells of `row`, at most `max_versions` per column.
    pub async fn get_row_versions(
        &self,
        table: &str,
        row: impl AsRef<[u8]>,
        max_versions: Option<u32>,
    ) -> Result<Vec<Cell>, Error> {
        let row = Bytes::copy_from_slice(row.as_ref());
        check_row_key(&row)?;
        self.ensure_exists(table).await?;
        let resp = self
            .client
            .get_row(table, row.clone())
            .max_versions(max_versions)
            .build()
            .send()
            .await?;
        let cells = resp.cells()?;
        log::info!(
            "got {} cell(s) from {table}/{}",
            cells.len(),
            String::from_utf8_lossy(&row)
        );
        Ok(cells)
    }

    /// Returns every stored version of one column of `row`.
    pub async fn get_cell(
        &self,
        table: &str,
        row: impl AsRef<[u8]>,
        family: &str,
        qualifier: impl AsRef<[u8]>,
    ) -> Result<Vec<Cell>, Error> {
        self.get_cell_versions(table, row, family, qualifier, None, None)
            .await
    }

    /// Returns versions of one column of `row`, optionally limited in number
    /// or pinned to an exact timestamp.
    pub async fn get_cell_versions(
        &self,
        table: &str,
        row: impl AsRef<[u8]>,
        family: &str,
        qualifier: impl AsRef<[u8]>,
        max_versions: Option<u32>,
        timestamp: Option<u64>,
    ) -> Result<Vec<Cell>, Error> {
        let row = Bytes::copy_from_slice(row.as_ref());
        check_row_key(&row)?;
        self.ensure_exists(table).await?;
        let qualifier = Bytes::copy_from_slice(qualifier.as_ref());
        let resp = self
            .client
            .get_cell(table, row.clone(), family, qualifier.clone())
            .max_versions(max_versions)
            .timestamp(timestamp)
            .build()
            .send()
            .await?;
        let cells = resp.cells()?;
        log::info!(
            "got {} version(s) of {table}/{}/{family}:{}",
            cells.len(),
            String::from_utf8_lossy(&row),
            String::from_utf8_lossy(&qualifier)
        );
        Ok(cells)
    }

    /// Reads the rows of `table` selected by `options`, in row key order.
    ///
    /// The gateway scanner is released before returning, also when reading a
    /// batch failed.
    pub async fn scan_table(&self, table: &str, options: &ScanOptions) -> Result<Vec<Row>, Error> {
        let scanner = self
            .client
            .create_scanner(table)
            .start_row(options.start_row.clone())
            .end_row(options.end_row.clone())
            .columns(options.columns.clone())
            .batch(Some(options.batch.unwrap_or(DEFAULT_SCAN_BATCH)))
            .build()
            .send()
            .await?;
        let scanner_path = scanner.scanner_path()?;
        log::debug!("opened scanner {scanner_path}");

        let result = self.drain_scanner(&scanner_path).await;

        if let Err(e) = self
            .client
            .delete_scanner(&scanner_path)
            .build()
            .send()
            .await
        {
            log::warn!("failed to release scanner {scanner_path}: {e}");
        }

        let rows = result?;
        log::info!("scanned {} row(s) of table '{table}'", rows.len());
        Ok(rows)
    }

    async fn drain_scanner(&self, scanner_path: &str) -> Result<Vec<Row>, Error> {
        let mut rows: Vec<Row> = Vec::new();
        loop {
            let batch = self.client.scanner_next(scanner_path).build().send().await?;
            if batch.is_exhausted() {
                break;
            }
            let batch_rows = batch.rows()?;
            if batch_rows.is_empty() {
                break;
            }
            for row in batch_rows {
                merge_row(&mut rows, row.clone());
            }
        }
        Ok(rows)
    }

    /// Lists table names.
    pub async fn list_tables(&self) -> Result<Vec<String>, Error> {
        let tables = self.client.list_tables().build().send().await?.tables()?;
        log::info!("listed {} table(s)", tables.len());
        Ok(tables)
    }

    /// Returns the descriptor of `table`.
    pub async fn table_schema(&self, table: &str) -> Result<TableSchema, Error> {
        let schema = self
            .client
            .get_table_schema(table)
            .build()
            .send()
            .await?
            .schema()?;
        log::info!(
            "table '{table}' has column families {:?}",
            schema.family_names()
        );
        Ok(schema)
    }

    async fn ensure_exists(&self, table: &str) -> Result<(), Error> {
        check_table_name(table)?;
        if self.client.table_exists(table).build().send().await?.exists() {
            Ok(())
        } else {
            log::info!("table '{table}' does not exist");
            Err(Error::table_not_found(table))
        }
    }
}

/// Appends `row`, joining it with the last row when a batch boundary split it.
fn merge_row(rows: &mut Vec<Row>, row: Row) {
    match rows.last_mut() {
        Some(last) if last.key == row.key => last.cells.extend(row.cells),
        _ => rows.push(row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &'static str, qualifiers: &[&'static str]) -> Row {
        Row {
            key: Bytes::from_static(key.as_bytes()),
            cells: qualifiers
                .iter()
                .map(|q| Cell {
                    row: Bytes::from_static(key.as_bytes()),
                    family: "cf1".into(),
                    qualifier: Bytes::from_static(q.as_bytes()),
                    value: Bytes::new(),
                    timestamp: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_row_joins_split_rows() {
        let mut rows = Vec::new();
        merge_row(&mut rows, row("r1", &["a", "b"]));
        merge_row(&mut rows, row("r1", &["c"]));
        merge_row(&mut rows, row("r2", &["a"]));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells.len(), 3);
        assert_eq!(rows[1].key_str(), "r2");
    }

    #[test]
    fn test_scan_options() {
        let options = ScanOptions::new()
            .start_row("10011")
            .end_row("10020")
            .column("cf1:name")
            .batch(10);
        assert_eq!(options.start_row.as_deref(), Some(&b"10011"[..]));
        assert_eq!(options.end_row.as_deref(), Some(&b"10020"[..]));
        assert_eq!(options.columns.len(), 1);
        assert_eq!(options.batch, Some(10));
    }
}
