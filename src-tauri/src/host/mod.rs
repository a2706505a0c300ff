//! Tauri implementation of the shell's host traits.

pub mod lifecycle;
pub mod menu;

use crate::constants::MAIN_WINDOW_LABEL;
use crate::error::ShellError;
use crate::menu::MenuNode;
use crate::models::{MonitorArea, WindowBounds, WindowState};
use crate::platform::{self, HostCapabilities};
use crate::shell::{
    Dock, ProgressIndicator, ShellController, ShellHost, ShellWindow, WindowRequest,
};
use log::{debug, warn};
use std::path::PathBuf;
use tauri::window::{ProgressBarState, ProgressBarStatus};
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_opener::OpenerExt;

/// The controller as it lives in Tauri managed state.
pub type TauriShell = ShellController<TauriHost>;

pub struct TauriHost {
    app: AppHandle,
    capabilities: HostCapabilities,
    dock: Option<TauriDock>,
}

impl TauriHost {
    pub fn new(app: AppHandle) -> Self {
        let capabilities = platform::current();
        let dock = capabilities.has_dock.then(|| TauriDock { app: app.clone() });
        Self { app, capabilities, dock }
    }
}

impl ShellHost for TauriHost {
    type Window = WebviewWindow;

    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn create_window(&self, request: &WindowRequest) -> Result<WebviewWindow, ShellError> {
        let url = WebviewUrl::App(PathBuf::from(&request.document));
        let mut builder = WebviewWindowBuilder::new(&self.app, MAIN_WINDOW_LABEL, url)
            .title(&request.title)
            .inner_size(request.bounds.width, request.bounds.height)
            .visible(false)
            .maximized(request.maximized)
            .fullscreen(request.fullscreen)
            .on_page_load(|window, payload| {
                lifecycle::handle_page_load(&window, payload.event());
            })
            .on_document_title_changed(|window, title| {
                lifecycle::handle_title_changed(&window, &title);
            });

        builder = match request.bounds.position() {
            Some((x, y)) => builder.position(x, y),
            None => builder.center(),
        };

        if let Some(script) = request.bridge_script {
            builder = builder.initialization_script(script);
        }

        Ok(builder.build()?)
    }

    fn install_menu(&self, nodes: &[MenuNode]) -> Result<(), ShellError> {
        let menu = menu::build_menu(&self.app, nodes, self.capabilities.menu_convention)?;
        self.app.set_menu(menu)?;
        Ok(())
    }

    fn dock(&self) -> Option<&dyn Dock> {
        self.dock.as_ref().map(|dock| dock as &dyn Dock)
    }

    fn open_url(&self, url: &str) -> Result<(), ShellError> {
        self.app
            .opener()
            .open_url(url, None::<&str>)
            .map_err(|e| ShellError::Opener {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    fn monitor_areas(&self) -> Vec<MonitorArea> {
        match self.app.available_monitors() {
            Ok(monitors) => monitors
                .iter()
                .map(|monitor| {
                    let scale = monitor.scale_factor();
                    let position = monitor.position().to_logical::<f64>(scale);
                    let size = monitor.size().to_logical::<f64>(scale);
                    MonitorArea {
                        x: position.x,
                        y: position.y,
                        width: size.width,
                        height: size.height,
                    }
                })
                .collect(),
            Err(e) => {
                warn!("Could not list monitors: {e}");
                Vec::new()
            }
        }
    }
}

/// Dock badge, resolved through the main window.
pub struct TauriDock {
    app: AppHandle,
}

impl Dock for TauriDock {
    fn set_badge(&self, label: Option<&str>) -> Result<(), ShellError> {
        match self.app.get_webview_window(MAIN_WINDOW_LABEL) {
            // Badge labels are a macOS-only Tauri API; other platforms never
            // construct a TauriDock (`has_dock` is false there).
            #[cfg(target_os = "macos")]
            Some(window) => Ok(window.set_badge_label(label.map(str::to_string))?),
            #[cfg(not(target_os = "macos"))]
            Some(_window) => Ok(()),
            None => {
                debug!("No window to carry badge {label:?}");
                Ok(())
            }
        }
    }
}

fn progress_bar_state(indicator: ProgressIndicator) -> ProgressBarState {
    let status = match indicator {
        ProgressIndicator::Cleared => ProgressBarStatus::None,
        ProgressIndicator::Fraction(_) => ProgressBarStatus::Normal,
        ProgressIndicator::Indeterminate => ProgressBarStatus::Indeterminate,
    };
    ProgressBarState {
        status: Some(status),
        progress: indicator.percent(),
    }
}

impl ShellWindow for WebviewWindow {
    fn show(&self) -> Result<(), ShellError> {
        Ok(WebviewWindow::show(self)?)
    }

    fn focus(&self) -> Result<(), ShellError> {
        Ok(WebviewWindow::set_focus(self)?)
    }

    fn is_focused(&self) -> bool {
        WebviewWindow::is_focused(self).unwrap_or(false)
    }

    fn set_title(&self, title: &str) -> Result<(), ShellError> {
        Ok(WebviewWindow::set_title(self, title)?)
    }

    fn set_progress(&self, indicator: ProgressIndicator) -> Result<(), ShellError> {
        Ok(WebviewWindow::set_progress_bar(self, progress_bar_state(indicator))?)
    }

    fn snapshot(&self) -> Result<WindowState, ShellError> {
        let scale = WebviewWindow::scale_factor(self)?;
        let position = WebviewWindow::outer_position(self)?.to_logical::<f64>(scale);
        let size = WebviewWindow::inner_size(self)?.to_logical::<f64>(scale);
        Ok(WindowState {
            bounds: WindowBounds::new(position.x, position.y, size.width, size.height),
            maximized: WebviewWindow::is_maximized(self)?,
            fullscreen: WebviewWindow::is_fullscreen(self)?,
            minimized: WebviewWindow::is_minimized(self)?,
        })
    }

    fn eval(&self, script: &str) -> Result<(), ShellError> {
        Ok(WebviewWindow::eval(self, script)?)
    }

    fn set_zoom(&self, factor: f64) -> Result<(), ShellError> {
        Ok(WebviewWindow::set_zoom(self, factor)?)
    }

    fn is_fullscreen(&self) -> Result<bool, ShellError> {
        Ok(WebviewWindow::is_fullscreen(self)?)
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ShellError> {
        Ok(WebviewWindow::set_fullscreen(self, fullscreen)?)
    }

    fn minimize(&self) -> Result<(), ShellError> {
        Ok(WebviewWindow::minimize(self)?)
    }

    fn close(&self) -> Result<(), ShellError> {
        Ok(WebviewWindow::close(self)?)
    }

    fn toggle_maximize(&self) -> Result<(), ShellError> {
        if WebviewWindow::is_maximized(self)? {
            WebviewWindow::unmaximize(self)?;
        } else {
            WebviewWindow::maximize(self)?;
        }
        Ok(())
    }

    fn toggle_devtools(&self) {
        #[cfg(debug_assertions)]
        {
            if self.is_devtools_open() {
                self.close_devtools();
            } else {
                self.open_devtools();
            }
        }
        #[cfg(not(debug_assertions))]
        debug!("Developer tools are only available in debug builds");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_progress_uses_none_status() {
        let state = progress_bar_state(ProgressIndicator::Cleared);
        assert!(matches!(state.status, Some(ProgressBarStatus::None)));
        assert_eq!(state.progress, None);
    }

    #[test]
    fn test_fraction_progress_is_percentage() {
        let state = progress_bar_state(ProgressIndicator::Fraction(0.5));
        assert!(matches!(state.status, Some(ProgressBarStatus::Normal)));
        assert_eq!(state.progress, Some(50));
    }

    #[test]
    fn test_indeterminate_progress() {
        let state = progress_bar_state(ProgressIndicator::Indeterminate);
        assert!(matches!(state.status, Some(ProgressBarStatus::Indeterminate)));
        assert_eq!(state.progress, None);
    }
}
