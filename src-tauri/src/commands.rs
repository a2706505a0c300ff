use crate::host::TauriShell;
use crate::models::WindowBounds;
use serde::Serialize;
use std::sync::Arc;
use tauri::State;

#[derive(Serialize)]
pub struct DoneResponse {
    /// Badge count after this completion; `None` when the report was ignored.
    pub badge_count: Option<u32>,
}

#[tauri::command]
pub fn report_progress(shell: State<Arc<TauriShell>>, progress: Option<f64>) -> Result<(), String> {
    shell.report_progress(progress).map(|_| ()).map_err(|e| {
        log::error!("Failed to forward progress {progress:?}: {e}");
        "Failed to update progress".to_string()
    })
}

#[tauri::command]
pub fn report_done(shell: State<Arc<TauriShell>>) -> Result<DoneResponse, String> {
    let badge_count = shell.report_done().map_err(|e| {
        log::error!("Failed to update badge: {e}");
        "Failed to update badge".to_string()
    })?;
    Ok(DoneResponse { badge_count })
}

#[tauri::command]
pub fn get_window_bounds(shell: State<Arc<TauriShell>>) -> Option<WindowBounds> {
    shell.tracked_bounds()
}
