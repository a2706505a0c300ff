pub mod schema;
pub mod migrations;

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_opens() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let _db = Database::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_migrations_run() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(&db_path).unwrap();
        migrations::run(db.connection()).unwrap();

        // Verify table exists
        let count: i32 = db.connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='window_state'",
                [],
                |row| row.get(0)
            ).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_schema_version_recorded() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(&db_path).unwrap();
        migrations::run(db.connection()).unwrap();

        let version: i32 = db.connection()
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(&db_path).unwrap();

        migrations::run(db.connection()).unwrap();
        db.connection()
            .execute(
                "INSERT INTO window_state (id, x, y, width, height, updated_at)
                 VALUES (1, 10, 20, 800, 600, 0)",
                [],
            )
            .unwrap();

        // Running again must keep the stored bounds
        migrations::run(db.connection()).unwrap();

        let width: f64 = db.connection()
            .query_row("SELECT width FROM window_state WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(width, 800.0);
    }

    #[test]
    fn test_only_one_row_allowed() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(&db_path).unwrap();
        migrations::run(db.connection()).unwrap();

        let result = db.connection().execute(
            "INSERT INTO window_state (id, width, height, updated_at) VALUES (2, 800, 600, 0)",
            [],
        );
        assert!(result.is_err(), "window_state is keyed to the single default window");
    }
}
