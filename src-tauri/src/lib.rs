mod commands;
pub mod config;
mod constants;
pub mod db;
pub mod error;
mod host;
pub mod menu;
pub mod models;
pub mod platform;
pub mod shell;
pub mod window_state;

#[cfg(test)]
mod test_utils;

use crate::config::ShellConfig;
use crate::constants::DB_FILE_NAME;
use crate::db::{migrations, Database};
use crate::error::ShellError;
use crate::host::{lifecycle, TauriHost};
use crate::shell::ShellController;
use crate::window_state::WindowStateKeeper;
use directories::ProjectDirs;
use log::{error, info};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tauri::Manager;

fn get_db_path() -> Result<PathBuf, ShellError> {
    let proj_dirs = ProjectDirs::from("fr", "zbgn", "Storatron").ok_or(ShellError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(ShellError::DataDirCreation)?;
    Ok(data_dir.join(DB_FILE_NAME))
}

fn open_database() -> Result<Arc<Mutex<Database>>, ShellError> {
    let db_path = get_db_path()?;
    info!("Opening window state database at {}", db_path.display());
    let db = Database::open(&db_path)?;
    migrations::run(db.connection())?;
    Ok(Arc::new(Mutex::new(db)))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::from_env();
    info!("Starting {} ({:?} shell)", config.title, config.variant);

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(move |app| {
            let db = open_database().inspect_err(|e| error!("Initialization failed: {e}"))?;

            let host = TauriHost::new(app.handle().clone());
            let shell = Arc::new(ShellController::new(host, config, WindowStateKeeper::new(db)));

            // Must be managed before the window exists: its page-load
            // callback looks the controller up.
            app.manage(Arc::clone(&shell));

            shell
                .open()
                .inspect_err(|e| error!("Failed to open main window: {e}"))?;
            Ok(())
        })
        .on_menu_event(|app, event| lifecycle::handle_menu_event(app, &event))
        .on_window_event(lifecycle::handle_window_event)
        .invoke_handler(tauri::generate_handler![
            commands::report_progress,
            commands::report_done,
            commands::get_window_bounds,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| lifecycle::handle_run_event(app_handle, &event));
}
