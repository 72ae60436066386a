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

//! `hbase-ops`: exercise basic table operations against an HBase REST gateway
//!
//! Connection settings come from the `HBASE_REST_*` environment variables and
//! can be overridden per invocation with the global flags. Precondition
//! failures (table missing or already present) exit with status 2, every
//! other failure with status 1.

use clap::{Parser, Subcommand};
use hbase_ops::hbase::{
    Cell, ClientConfig, ColumnFamily, Error, HBaseClient, HBaseError, Row, ScanOptions, TableOps,
};
use std::process::ExitCode;
use std::time::Duration;

/// Exercise basic HBase table operations through the REST gateway.
#[derive(Debug, Parser)]
#[command(name = "hbase-ops", version, about)]
struct Cli {
    /// Gateway host [default: $HBASE_REST_HOST or 127.0.0.1]
    #[arg(long, global = true)]
    host: Option<String>,
    /// Gateway port [default: $HBASE_REST_PORT or 8080]
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Connect with https
    #[arg(long, global = true)]
    https: bool,
    /// User for HTTP basic authentication
    #[arg(long, global = true)]
    user: Option<String>,
    /// Password for HTTP basic authentication
    #[arg(long, global = true)]
    password: Option<String>,
    /// Bearer token; takes precedence over --user
    #[arg(long, global = true)]
    token: Option<String>,
    /// Whole-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a table exists
    Exists { table: String },
    /// Create a table with the given column families
    Create {
        table: String,
        #[arg(required = true)]
        families: Vec<String>,
        /// Versions retained by every family
        #[arg(long)]
        versions: Option<u32>,
    },
    /// Disable and delete a table
    Drop { table: String },
    /// Write one cell
    Put {
        table: String,
        row: String,
        family: String,
        qualifier: String,
        value: String,
    },
    /// Delete rows by key
    Delete {
        table: String,
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// Print the cells of a row
    Get {
        table: String,
        row: String,
        /// Versions per column [default: all]
        #[arg(long)]
        versions: Option<u32>,
    },
    /// Print the versions of one column of a row
    GetCell {
        table: String,
        row: String,
        family: String,
        qualifier: String,
        /// Versions to return [default: all]
        #[arg(long)]
        versions: Option<u32>,
        /// Only the version with this timestamp (ms)
        #[arg(long)]
        timestamp: Option<u64>,
    },
    /// Print every cell of a table
    Scan {
        table: String,
        /// First row (inclusive)
        #[arg(long)]
        start_row: Option<String>,
        /// Last row (exclusive)
        #[arg(long)]
        end_row: Option<String>,
        /// Family or family:qualifier to include; repeatable
        #[arg(long = "column")]
        columns: Vec<String>,
        /// Cells per scanner batch
        #[arg(long)]
        batch: Option<u32>,
    },
    /// List tables
    List,
    /// Print the column families of a table
    Schema { table: String },
    /// Check that a table exists, then scan it
    Show { table: String },
}

impl Cli {
    fn config(&self) -> Result<ClientConfig, Error> {
        let mut config = ClientConfig::from_env()?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.https {
            config.https = true;
        }
        if let Some(user) = &self.user {
            config.user = Some(user.clone());
        }
        if let Some(password) = &self.password {
            config.password = Some(password.clone());
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_precondition() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = cli.config()?;
    log::debug!("using gateway {}", config.endpoint());
    let ops = TableOps::new(HBaseClient::from_config(&config)?);

    match cli.command {
        Command::Exists { table } => {
            if ops.table_exists(&table).await? {
                println!("table {table} exists");
            } else {
                println!("table {table} does not exist");
            }
        }
        Command::Create {
            table,
            families,
            versions,
        } => {
            let families = families.into_iter().map(|name| {
                let cf = ColumnFamily::new(name);
                match versions {
                    Some(v) => cf.with_max_versions(v),
                    None => cf,
                }
            });
            ops.create_table(&table, families).await?;
            println!("created table {table}");
        }
        Command::Drop { table } => {
            ops.drop_table(&table).await?;
            println!("dropped table {table}");
        }
        Command::Put {
            table,
            row,
            family,
            qualifier,
            value,
        } => {
            ops.put_cell(&table, &row, &family, &qualifier, &value).await?;
            println!("put {table}/{row}/{family}:{qualifier}");
        }
        Command::Delete { table, rows } => {
            let n = ops.delete_rows(&table, &rows).await?;
            println!("deleted {n} row(s) from {table}");
        }
        Command::Get {
            table,
            row,
            versions,
        } => {
            print_cells(&ops.get_row_versions(&table, &row, versions).await?);
        }
        Command::GetCell {
            table,
            row,
            family,
            qualifier,
            versions,
            timestamp,
        } => {
            let cells = ops
                .get_cell_versions(&table, &row, &family, &qualifier, versions, timestamp)
                .await?;
            print_cells(&cells);
        }
        Command::Scan {
            table,
            start_row,
            end_row,
            columns,
            batch,
        } => {
            let mut options = ScanOptions::new();
            if let Some(row) = start_row {
                options = options.start_row(row);
            }
            if let Some(row) = end_row {
                options = options.end_row(row);
            }
            for column in columns {
                options = options.column(column);
            }
            options.batch = batch;
            print_rows(&ops.scan_table(&table, &options).await?);
        }
        Command::List => {
            for table in ops.list_tables().await? {
                println!("{table}");
            }
        }
        Command::Schema { table } => {
            let schema = ops.table_schema(&table).await?;
            println!("{}", schema.name);
            for cf in &schema.column_families {
                match cf.max_versions {
                    Some(v) => println!("  {}\tVERSIONS: {v}", cf.name),
                    None => println!("  {}", cf.name),
                }
            }
        }
        Command::Show { table } => {
            if !ops.table_exists(&table).await? {
                return Err(HBaseError::TableNotFound { table }.into());
            }
            println!("table {table} exists");
            print_rows(&ops.scan_table(&table, &ScanOptions::default()).await?);
        }
    }
    Ok(())
}

fn print_cells(cells: &[Cell]) {
    for cell in cells {
        println!("{cell}");
    }
}

fn print_rows(rows: &[Row]) {
    for row in rows {
        print_cells(&row.cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_put() {
        let cli = Cli::try_parse_from([
            "hbase-ops",
            "--host",
            "192.168.88.110",
            "put",
            "student01",
            "10011",
            "cf1",
            "name",
            "zhangsan",
        ])
        .unwrap();
        assert_eq!(cli.host.as_deref(), Some("192.168.88.110"));
        assert!(matches!(
            cli.command,
            Command::Put { ref table, ref value, .. } if table == "student01" && value == "zhangsan"
        ));
    }

    #[test]
    fn test_parse_token() {
        let cli = Cli::try_parse_from(["hbase-ops", "--token", "abc", "list"]).unwrap();
        assert_eq!(cli.config().unwrap().token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hbase-ops",
            "scan",
            "student01",
            "--port",
            "8085",
            "--batch",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.port, Some(8085));
        assert!(matches!(cli.command, Command::Scan { batch: Some(10), .. }));
    }

    #[test]
    fn test_create_requires_family() {
        assert!(Cli::try_parse_from(["hbase-ops", "create", "student01"]).is_err());
        let cli = Cli::try_parse_from([
            "hbase-ops",
            "create",
            "student01",
            "cf1",
            "cf2",
            "--versions",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Create { ref families, versions: Some(3), .. } if families.len() == 2
        ));
    }

    #[test]
    fn test_delete_takes_many_rows() {
        let cli = Cli::try_parse_from(["hbase-ops", "delete", "student01", "10011", "10012"])
            .unwrap();
        assert!(matches!(cli.command, Command::Delete { ref rows, .. } if rows.len() == 2));
    }
}
