// src-tauri/src/constants.rs

/// Fixed title of the application window
pub const APP_TITLE: &str = "Storatron";

/// Tauri label of the single application window
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Default window width in logical pixels
pub const DEFAULT_WIDTH: f64 = 1280.0;

/// Default window height in logical pixels
pub const DEFAULT_HEIGHT: f64 = 720.0;

/// Local document loaded into the window
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Target of the Help > Learn More item
pub const LEARN_MORE_URL: &str = "https://zbgn.fr/storatron";

/// Environment variable selecting the shell variant
pub const VARIANT_ENV: &str = "STORATRON_VARIANT";

/// Database file name inside the platform data directory
pub const DB_FILE_NAME: &str = "storatron.db";

/// Zoom factor applied per zoom step (1.2^level)
pub const ZOOM_STEP_FACTOR: f64 = 1.2;

/// Lowest zoom level reachable through View > Zoom Out
pub const MIN_ZOOM_LEVEL: i32 = -8;

/// Highest zoom level reachable through View > Zoom In
pub const MAX_ZOOM_LEVEL: i32 = 9;

/// DOM event dispatched to the page by Preferences
pub const PREFERENCES_EVENT: &str = "storatron:preferences";

/// DOM event dispatched to the page by Check for Updates
pub const CHECK_FOR_UPDATES_EVENT: &str = "storatron:check-for-updates";
