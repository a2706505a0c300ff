use thiserror::Error;

/// Shell error type
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Could not determine project directories")]
    NoProjectDirs,

    #[error("Could not create data directory: {0}")]
    DataDirCreation(#[source] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Host error: {0}")]
    Host(#[from] tauri::Error),

    #[error("Could not open {url}: {reason}")]
    Opener { url: String, reason: String },

    #[error("Invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

// For Tauri command returns - converts ShellError to String
impl From<ShellError> for String {
    fn from(e: ShellError) -> Self {
        e.to_string()
    }
}
