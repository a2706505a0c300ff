use super::schema::{SCHEMA, SCHEMA_VERSION};
use log::info;
use rusqlite::{Connection, Result};

pub fn run(conn: &Connection) -> Result<()> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    conn.execute_batch(SCHEMA)?;

    if version < SCHEMA_VERSION {
        info!("Migrated window state schema from version {version} to {SCHEMA_VERSION}");
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    Ok(())
}
