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

//! In-process stand-in for the HBase REST gateway
//!
//! Speaks the JSON dialect of the gateway for the resources the client uses:
//! table list, `exists`, `schema`, rows, cells and scanners. Data lives in
//! memory; timestamps are assigned from the wall clock and strictly increase.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use hbase_ops::hbase::ColumnFamily;
use hbase_ops::hbase::types::{
    CellModel, CellSetModel, ColumnSchemaModel, RowModel, ScannerModel, TableListModel,
    TableModel, TableSchemaModel,
};
use hbase_ops::hbase::utils::{b64_decode, b64_encode, column_spec, split_column_spec};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::oneshot;

/// Versions a family keeps when its schema does not say otherwise.
const DEFAULT_VERSIONS: u32 = 1;
const DEFAULT_SCANNER_BATCH: usize = 100;

type Column = (String, Vec<u8>);

#[derive(Default)]
struct FakeTable {
    /// family -> versions retained
    families: BTreeMap<String, u32>,
    /// row -> column -> versions, newest first
    rows: BTreeMap<Vec<u8>, BTreeMap<Column, Vec<(u64, Vec<u8>)>>>,
}

struct FlatCell {
    row: Vec<u8>,
    family: String,
    qualifier: Vec<u8>,
    timestamp: u64,
    value: Vec<u8>,
}

struct FakeScanner {
    cells: VecDeque<FlatCell>,
    batch: usize,
}

#[derive(Default)]
struct GatewayState {
    tables: BTreeMap<String, FakeTable>,
    scanners: HashMap<String, FakeScanner>,
    next_scanner_id: u64,
    last_timestamp: u64,
    mutations: u64,
    fail_scanner_reads: bool,
}

type SharedState = Arc<Mutex<GatewayState>>;

/// A running fake gateway bound to an ephemeral local port
///
/// The server stops when the value is dropped.
pub struct FakeGateway {
    endpoint: String,
    port: u16,
    state: SharedState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeGateway {
    pub async fn start() -> Self {
        let state: SharedState = Arc::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake gateway");
        let addr = listener.local_addr().expect("fake gateway address");

        let app = Router::new().fallback(handle).with_state(state.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = server.await {
                log::warn!("fake gateway stopped: {e}");
            }
        });
        log::debug!("fake gateway listening on {addr}");

        Self {
            endpoint: format!("http://{addr}"),
            port: addr.port(),
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Base URL, e.g. `http://127.0.0.1:40123`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Scanners created and not yet deleted.
    pub fn open_scanners(&self) -> usize {
        self.lock().scanners.len()
    }

    /// Number of successful schema and row mutations so far.
    pub fn mutations(&self) -> u64 {
        self.lock().mutations
    }

    /// Makes every scanner read answer `500` while set.
    pub fn fail_scanner_reads(&self, fail: bool) {
        self.lock().fail_scanner_reads = fail;
    }

    pub fn has_table(&self, table: &str) -> bool {
        self.lock().tables.contains_key(table)
    }

    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for FakeGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let segments: Vec<Vec<u8>> = uri
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::decode_binary(s.as_bytes()).into_owned())
        .collect();
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost")
        .to_string();
    let versions = query_versions(uri.query());

    let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
    state.route(&method, &segments, versions, &host, &body)
}

/// Value of the `v` query parameter.
fn query_versions(query: Option<&str>) -> Option<u32> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "v")
        .and_then(|(_, v)| v.parse().ok())
}

/// Parses `ts` (upper bound, exclusive) or `from,to` (half-open range).
fn parse_time_range(spec: &str) -> Option<(u64, u64)> {
    match spec.split_once(',') {
        Some((from, to)) => Some((from.parse().ok()?, to.parse().ok()?)),
        None => Some((0, spec.parse().ok()?)),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

fn text(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

fn not_found(what: &str) -> Response {
    text(StatusCode::NOT_FOUND, format!("Not found: {what}\r\n"))
}

impl GatewayState {
    fn route(
        &mut self,
        method: &Method,
        segments: &[Vec<u8>],
        versions: Option<u32>,
        host: &str,
        body: &[u8],
    ) -> Response {
        let Some((table, rest)) = segments.split_first() else {
            return match *method {
                Method::GET => self.list_tables(),
                _ => text(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            };
        };
        let table = String::from_utf8_lossy(table).into_owned();

        match (method.clone(), rest) {
            (Method::GET, [r]) if r.as_slice() == b"exists" => {
                if self.tables.contains_key(&table) {
                    StatusCode::OK.into_response()
                } else {
                    not_found(&table)
                }
            }
            (m, [r]) if r.as_slice() == b"schema" => match m {
                Method::GET => self.get_schema(&table),
                Method::PUT | Method::POST => self.put_schema(&table, body),
                Method::DELETE => self.delete_schema(&table),
                _ => text(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            },
            (Method::PUT | Method::POST, [r]) if r.as_slice() == b"scanner" => {
                self.create_scanner(&table, host, body)
            }
            (m, [r, id]) if r.as_slice() == b"scanner" => {
                let id = String::from_utf8_lossy(id).into_owned();
                match m {
                    Method::GET => self.scanner_next(&id),
                    Method::DELETE => self.delete_scanner(&id),
                    _ => text(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
                }
            }
            (Method::GET, [row, spec @ ..]) if spec.len() <= 2 => {
                let column = spec.first().map(|c| split_column_spec(c));
                let time_range = match spec.get(1) {
                    Some(range) => match parse_time_range(&String::from_utf8_lossy(range)) {
                        Some(range) => Some(range),
                        None => return text(StatusCode::BAD_REQUEST, "bad timestamp"),
                    },
                    None => None,
                };
                self.get_row(&table, row, column, versions, time_range)
            }
            (Method::PUT | Method::POST, [_row, ..]) => self.put_cells(&table, body),
            (Method::DELETE, [row]) => self.delete_row(&table, row),
            _ => text(StatusCode::BAD_REQUEST, "unsupported request"),
        }
    }

    fn next_timestamp(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        self.last_timestamp = now.max(self.last_timestamp + 1);
        self.last_timestamp
    }

    fn list_tables(&self) -> Response {
        let model = TableListModel {
            tables: self
                .tables
                .keys()
                .map(|name| TableModel { name: name.clone() })
                .collect(),
        };
        json_response(StatusCode::OK, &model)
    }

    fn get_schema(&self, table: &str) -> Response {
        let Some(t) = self.tables.get(table) else {
            return not_found(table);
        };
        let model = TableSchemaModel {
            name: table.to_string(),
            column_schema: t
                .families
                .iter()
                .map(|(name, versions)| {
                    let cf = ColumnFamily::new(name.as_str()).with_max_versions(*versions);
                    ColumnSchemaModel::from(&cf)
                })
                .collect(),
            attributes: [("IS_META".to_string(), serde_json::json!("false"))]
                .into_iter()
                .collect(),
        };
        json_response(StatusCode::OK, &model)
    }

    fn put_schema(&mut self, table: &str, body: &[u8]) -> Response {
        let model: TableSchemaModel = match serde_json::from_slice(body) {
            Ok(model) => model,
            Err(e) => return text(StatusCode::BAD_REQUEST, e.to_string()),
        };
        if model.column_schema.is_empty() {
            return text(StatusCode::BAD_REQUEST, "no column families");
        }

        let created = !self.tables.contains_key(table);
        let t = self.tables.entry(table.to_string()).or_default();
        for cs in &model.column_schema {
            let cf = ColumnFamily::from(cs);
            t.families
                .insert(cf.name, cf.max_versions.unwrap_or(DEFAULT_VERSIONS));
        }
        self.mutations += 1;
        if created {
            StatusCode::CREATED.into_response()
        } else {
            StatusCode::OK.into_response()
        }
    }

    fn delete_schema(&mut self, table: &str) -> Response {
        if self.tables.remove(table).is_none() {
            return not_found(table);
        }
        self.mutations += 1;
        StatusCode::OK.into_response()
    }

    fn put_cells(&mut self, table: &str, body: &[u8]) -> Response {
        if !self.tables.contains_key(table) {
            return not_found(table);
        }
        let model: CellSetModel = match serde_json::from_slice(body) {
            Ok(model) => model,
            Err(e) => return text(StatusCode::BAD_REQUEST, e.to_string()),
        };

        let mut writes = Vec::new();
        for row in &model.rows {
            let Ok(key) = b64_decode(&row.key) else {
                return text(StatusCode::BAD_REQUEST, "bad row key");
            };
            for cell in &row.cells {
                let (Ok(column), Ok(value)) = (b64_decode(&cell.column), b64_decode(&cell.value))
                else {
                    return text(StatusCode::BAD_REQUEST, "bad cell");
                };
                writes.push((key.clone(), split_column_spec(&column), cell.timestamp, value));
            }
        }

        let mut stamped = Vec::with_capacity(writes.len());
        for (row, column, timestamp, value) in writes {
            let ts = match timestamp {
                Some(ts) => ts,
                None => self.next_timestamp(),
            };
            stamped.push((row, column, ts, value));
        }

        let Some(t) = self.tables.get_mut(table) else {
            return not_found(table);
        };
        for (_, (family, _), _, _) in &stamped {
            if !t.families.contains_key(family) {
                return text(
                    StatusCode::BAD_REQUEST,
                    format!("column family {family} does not exist in table {table}"),
                );
            }
        }
        for (row, column, ts, value) in stamped {
            let keep = t.families[&column.0] as usize;
            let versions = t.rows.entry(row).or_default().entry(column).or_default();
            versions.retain(|(existing, _)| *existing != ts);
            versions.push((ts, value));
            versions.sort_by(|a, b| b.0.cmp(&a.0));
            versions.truncate(keep);
        }
        self.mutations += 1;
        StatusCode::OK.into_response()
    }

    fn delete_row(&mut self, table: &str, row: &[u8]) -> Response {
        let Some(t) = self.tables.get_mut(table) else {
            return not_found(table);
        };
        t.rows.remove(row);
        self.mutations += 1;
        StatusCode::OK.into_response()
    }

    fn get_row(
        &self,
        table: &str,
        row: &[u8],
        column: Option<Column>,
        versions: Option<u32>,
        time_range: Option<(u64, u64)>,
    ) -> Response {
        let Some(t) = self.tables.get(table) else {
            return not_found(table);
        };
        let versions = versions.unwrap_or(1).max(1) as usize;

        let mut cells = Vec::new();
        if let Some(columns) = t.rows.get(row) {
            for ((family, qualifier), stored) in columns {
                let wanted = match &column {
                    None => true,
                    Some((f, q)) if q.is_empty() => f == family,
                    Some((f, q)) => f == family && q == qualifier,
                };
                if !wanted {
                    continue;
                }
                stored
                    .iter()
                    .filter(|(ts, _)| time_range.is_none_or(|(from, to)| from <= *ts && *ts < to))
                    .take(versions)
                    .for_each(|(ts, value)| {
                        cells.push(CellModel {
                            column: b64_encode(column_spec(family, qualifier)),
                            timestamp: Some(*ts),
                            value: b64_encode(value),
                        })
                    });
            }
        }
        if cells.is_empty() {
            return not_found(&String::from_utf8_lossy(row));
        }

        let model = CellSetModel {
            rows: vec![RowModel {
                key: b64_encode(row),
                cells,
            }],
        };
        json_response(StatusCode::OK, &model)
    }

    fn create_scanner(&mut self, table: &str, host: &str, body: &[u8]) -> Response {
        let Some(t) = self.tables.get(table) else {
            return not_found(table);
        };
        let model: ScannerModel = if body.is_empty() {
            ScannerModel::default()
        } else {
            match serde_json::from_slice(body) {
                Ok(model) => model,
                Err(e) => return text(StatusCode::BAD_REQUEST, e.to_string()),
            }
        };

        let decode = |v: &Option<String>| -> Result<Option<Vec<u8>>, ()> {
            v.as_deref().map(|s| b64_decode(s).map_err(|_| ())).transpose()
        };
        let (Ok(start), Ok(end)) = (decode(&model.start_row), decode(&model.end_row)) else {
            return text(StatusCode::BAD_REQUEST, "bad row range");
        };
        let mut columns = Vec::new();
        for c in &model.column {
            match b64_decode(c) {
                Ok(spec) => columns.push(split_column_spec(&spec)),
                Err(_) => return text(StatusCode::BAD_REQUEST, "bad column"),
            }
        }
        let versions = model.max_versions.unwrap_or(1).max(1) as usize;

        let mut cells = VecDeque::new();
        for (row, stored_columns) in &t.rows {
            if start.as_ref().is_some_and(|s| row < s) {
                continue;
            }
            if end.as_ref().is_some_and(|e| !e.is_empty() && row >= e) {
                break;
            }
            for ((family, qualifier), stored) in stored_columns {
                let wanted = columns.is_empty()
                    || columns
                        .iter()
                        .any(|(f, q)| f == family && (q.is_empty() || q == qualifier));
                if !wanted {
                    continue;
                }
                for (ts, value) in stored.iter().take(versions) {
                    cells.push_back(FlatCell {
                        row: row.clone(),
                        family: family.clone(),
                        qualifier: qualifier.clone(),
                        timestamp: *ts,
                        value: value.clone(),
                    });
                }
            }
        }

        self.next_scanner_id += 1;
        let created = self.next_timestamp();
        let id = format!("{created}{:04x}", self.next_scanner_id);
        self.scanners.insert(
            id.clone(),
            FakeScanner {
                cells,
                batch: model
                    .batch
                    .map(|b| b.max(1) as usize)
                    .unwrap_or(DEFAULT_SCANNER_BATCH),
            },
        );

        let location = format!("http://{host}/{table}/scanner/{id}");
        (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
    }

    fn scanner_next(&mut self, id: &str) -> Response {
        if self.fail_scanner_reads {
            return text(StatusCode::INTERNAL_SERVER_ERROR, "scanner read failed");
        }
        let Some(scanner) = self.scanners.get_mut(id) else {
            return not_found(id);
        };
        if scanner.cells.is_empty() {
            return StatusCode::NO_CONTENT.into_response();
        }

        let mut rows: Vec<RowModel> = Vec::new();
        for _ in 0..scanner.batch {
            let Some(cell) = scanner.cells.pop_front() else {
                break;
            };
            let key = b64_encode(&cell.row);
            let model = CellModel {
                column: b64_encode(column_spec(&cell.family, &cell.qualifier)),
                timestamp: Some(cell.timestamp),
                value: b64_encode(&cell.value),
            };
            match rows.last_mut() {
                Some(last) if last.key == key => last.cells.push(model),
                _ => rows.push(RowModel {
                    key,
                    cells: vec![model],
                }),
            }
        }
        json_response(StatusCode::OK, &CellSetModel { rows })
    }

    fn delete_scanner(&mut self, id: &str) -> Response {
        match self.scanners.remove(id) {
            Some(_) => StatusCode::OK.into_response(),
            None => not_found(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_versions() {
        assert_eq!(query_versions(Some("v=3")), Some(3));
        assert_eq!(query_versions(Some("a=1&v=2147483647")), Some(2147483647));
        assert_eq!(query_versions(Some("a=1")), None);
        assert_eq!(query_versions(None), None);
    }

    #[test]
    fn test_parse_time_range() {
        assert_eq!(parse_time_range("5,6"), Some((5, 6)));
        assert_eq!(parse_time_range("5"), Some((0, 5)));
        assert_eq!(parse_time_range("x"), None);
    }
}
