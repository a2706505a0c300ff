//! Routes Tauri runtime events to the [`TauriShell`] held in managed state.

use super::TauriShell;
use crate::constants::MAIN_WINDOW_LABEL;
use crate::menu::MenuCommand;
use crate::shell::AllWindowsClosed;
use log::{debug, error, warn};
use std::sync::Arc;
use tauri::menu::MenuEvent;
use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, RunEvent, WebviewWindow, Window, WindowEvent};

/// What a window event asks of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowAction {
    Ignore,
    GeometryChanged,
    CloseRequested,
    Destroyed,
    Focused,
}

fn window_action(label: &str, event: &WindowEvent) -> WindowAction {
    if label != MAIN_WINDOW_LABEL {
        return WindowAction::Ignore;
    }
    if matches!(event, WindowEvent::Moved(_) | WindowEvent::Resized(_)) {
        WindowAction::GeometryChanged
    } else if matches!(event, WindowEvent::CloseRequested { .. }) {
        WindowAction::CloseRequested
    } else if matches!(event, WindowEvent::Destroyed) {
        WindowAction::Destroyed
    } else if matches!(event, WindowEvent::Focused(true)) {
        WindowAction::Focused
    } else {
        WindowAction::Ignore
    }
}

/// Only the first finished load reveals the window; reloads must not steal
/// focus.
fn reveals_window(event: PageLoadEvent, visible: bool) -> bool {
    matches!(event, PageLoadEvent::Finished) && !visible
}

/// An exit request without a code comes from the last window closing; any
/// explicit exit goes through.
fn should_prevent_exit(code: Option<i32>, policy: AllWindowsClosed) -> bool {
    code.is_none() && policy == AllWindowsClosed::StayResident
}

fn shell<M: Manager<tauri::Wry>>(manager: &M) -> Option<Arc<TauriShell>> {
    manager
        .try_state::<Arc<TauriShell>>()
        .map(|state| Arc::clone(state.inner()))
}

pub fn handle_page_load(window: &WebviewWindow, event: PageLoadEvent) {
    if !reveals_window(event, window.is_visible().unwrap_or(false)) {
        return;
    }
    let Some(shell) = shell(window) else { return };
    if let Err(e) = shell.on_ready_to_render(window) {
        error!("Failed to show window: {e}");
    }
}

pub fn handle_title_changed(window: &WebviewWindow, title: &str) {
    let Some(shell) = shell(window) else { return };
    if let Err(e) = shell.on_page_title_changed(window, title) {
        warn!("Failed to update window title: {e}");
    }
}

pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    let action = window_action(window.label(), event);
    if action == WindowAction::Ignore {
        return;
    }
    let Some(shell) = shell(window) else { return };

    match action {
        WindowAction::Ignore => {}
        WindowAction::Destroyed => shell.on_window_destroyed(),
        WindowAction::Focused => {
            if let Err(e) = shell.on_focus() {
                warn!("Failed to clear badge: {e}");
            }
        }
        WindowAction::GeometryChanged | WindowAction::CloseRequested => {
            let Some(webview_window) = window.get_webview_window(MAIN_WINDOW_LABEL) else {
                return;
            };
            if action == WindowAction::GeometryChanged {
                shell.on_window_changed(&webview_window);
            } else if let Err(e) = shell.on_close_requested(&webview_window) {
                error!("Failed to save window state: {e}");
            }
        }
    }
}

pub fn handle_menu_event(app: &AppHandle, event: &MenuEvent) {
    let Some(command) = MenuCommand::from_id(event.id().as_ref()) else {
        debug!("Ignoring menu event {:?}", event.id());
        return;
    };
    let Some(shell) = shell(app) else { return };
    if let Err(e) = shell.perform(command) {
        error!("Menu command {} failed: {e}", command.id());
    }
}

pub fn handle_run_event(app: &AppHandle, event: &RunEvent) {
    if let RunEvent::ExitRequested { api, code, .. } = event {
        if let Some(shell) = shell(app) {
            if should_prevent_exit(*code, shell.on_all_windows_closed()) {
                api.prevent_exit();
            }
        }
        return;
    }

    #[cfg(target_os = "macos")]
    if let RunEvent::Reopen { .. } = event {
        if let Some(shell) = shell(app) {
            if let Err(e) = shell.on_activate() {
                error!("Failed to reopen window: {e}");
            }
        }
    }
}
