//! Row extraction from a Nova backup archive
//!
//! A `.novabackup` file is a ZIP archive with the launcher database stored as
//! `nova.db` at its root. The database is copied to a temporary file, opened
//! read-only and queried with three fixed projections. Rows come back as plain
//! column → value mappings; typing them is left to the resolver.

use log::debug;
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OpenFlags};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

use super::error::{NovaError, Result};

/// Entry name of the launcher database inside the archive
pub const DATABASE_ENTRY: &str = "nova.db";

/// One result row: column name → value
pub type Row = Map<String, Value>;

/// A named read-only projection
#[derive(Debug, Clone, Copy)]
pub struct Query {
    pub name: &'static str,
    pub sql: &'static str,
}

pub const FAVORITES_QUERY: Query = Query {
    name: "favorites",
    sql: "SELECT _id, title, itemType, container FROM favorites",
};

pub const DRAWER_GROUPS_QUERY: Query = Query {
    name: "drawer_groups",
    sql: "SELECT _id, title, groupType FROM drawer_groups WHERE title IS NOT NULL AND title != ''",
};

pub const APP_GROUPS_QUERY: Query = Query {
    name: "appgroups",
    sql: "SELECT groupId, component FROM appgroups",
};

/// The three result sets, in database order
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub favorites: Vec<Row>,
    pub drawer_groups: Vec<Row>,
    pub app_groups: Vec<Row>,
}

/// Read a backup file from disk and extract its rows
pub fn read_backup<P: AsRef<Path>>(path: P) -> Result<RawTables> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    extract(&bytes)
}

/// Extract rows from the bytes of a backup archive
pub fn extract(bytes: &[u8]) -> Result<RawTables> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut entry = match archive.by_name(DATABASE_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(NovaError::MissingDatabase(DATABASE_ENTRY)),
        Err(e) => return Err(e.into()),
    };

    // SQLite needs a real file to open
    let mut db_file = tempfile::NamedTempFile::new()?;
    let copied = io::copy(&mut entry, &mut db_file)?;
    db_file.flush()?;
    debug!("Unpacked {} ({} bytes)", DATABASE_ENTRY, copied);

    let conn = Connection::open_with_flags(
        db_file.path(),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(NovaError::DecoderInit)?;

    read_tables(&conn)
}

/// Run the three fixed queries against an open database
pub fn read_tables(conn: &Connection) -> Result<RawTables> {
    let tables = RawTables {
        favorites: run_query(conn, FAVORITES_QUERY)?,
        drawer_groups: run_query(conn, DRAWER_GROUPS_QUERY)?,
        app_groups: run_query(conn, APP_GROUPS_QUERY)?,
    };

    debug!(
        "Extracted {} favorites, {} drawer groups, {} app group links",
        tables.favorites.len(),
        tables.drawer_groups.len(),
        tables.app_groups.len()
    );

    Ok(tables)
}

fn run_query(conn: &Connection, query: Query) -> Result<Vec<Row>> {
    let format_error = |source| NovaError::Format {
        query: query.name,
        source,
    };

    let mut stmt = conn.prepare(query.sql).map_err(format_error)?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let rows = stmt
        .query_map([], |row| {
            let mut map = Row::new();
            for (i, name) in columns.iter().enumerate() {
                let value: SqlValue = row.get(i)?;
                map.insert(name.clone(), sql_to_json(value));
            }
            Ok(map)
        })
        .map_err(format_error)?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(format_error)
}

fn sql_to_json(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::from(i),
        SqlValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        SqlValue::Text(s) => Value::String(s),
        SqlValue::Blob(b) => Value::String(String::from_utf8_lossy(&b).into_owned()),
    }
}
