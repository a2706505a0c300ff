pub const SCHEMA_VERSION: i32 = 1;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS window_state (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    x REAL,
    y REAL,
    width REAL NOT NULL,
    height REAL NOT NULL,
    maximized INTEGER NOT NULL DEFAULT 0,
    fullscreen INTEGER NOT NULL DEFAULT 0,
    updated_at INTEGER NOT NULL
);
"#;
