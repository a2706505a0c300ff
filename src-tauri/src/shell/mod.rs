//! Single-window application shell.
//!
//! [`ShellController`] owns the one window the application may have and
//! reacts to host lifecycle events. It only talks to the host through the
//! [`ShellHost`] and [`ShellWindow`] traits, so every transition can be
//! exercised without a real window system.

pub mod badge;
pub mod progress;
pub mod zoom;

pub use badge::{badge_label, BadgeCounter};
pub use progress::ProgressIndicator;
pub use zoom::ZoomLevel;

use crate::config::ShellConfig;
use crate::constants::{CHECK_FOR_UPDATES_EVENT, PREFERENCES_EVENT};
use crate::error::ShellError;
use crate::menu::{menu_template, MenuAction, MenuCommand, MenuNode, MenuRole};
use crate::models::{MonitorArea, WindowBounds, WindowState};
use crate::platform::HostCapabilities;
use crate::window_state::WindowStateKeeper;
use log::{debug, info, warn};
use std::sync::{Mutex, MutexGuard};

/// Initialization script exposing `window.storatron` to page content.
pub const BRIDGE_SCRIPT: &str = include_str!("../../scripts/bridge.js");

const SPEAK_SELECTION_SCRIPT: &str = r#"(() => {
  const text = String(window.getSelection() || "");
  if (text && window.speechSynthesis) {
    window.speechSynthesis.speak(new SpeechSynthesisUtterance(text));
  }
})()"#;

const STOP_SPEAKING_SCRIPT: &str = "window.speechSynthesis && window.speechSynthesis.cancel()";

const RELOAD_SCRIPT: &str = "window.location.reload()";

/// Everything the host needs to construct the window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRequest {
    pub title: String,
    pub bounds: WindowBounds,
    pub maximized: bool,
    pub fullscreen: bool,
    /// Local document loaded into the webview.
    pub document: String,
    /// Script run in the page before any of its own scripts.
    pub bridge_script: Option<&'static str>,
}

/// A live top-level window.
pub trait ShellWindow {
    fn show(&self) -> Result<(), ShellError>;
    fn focus(&self) -> Result<(), ShellError>;
    fn is_focused(&self) -> bool;
    fn set_title(&self, title: &str) -> Result<(), ShellError>;
    fn set_progress(&self, indicator: ProgressIndicator) -> Result<(), ShellError>;
    /// Current geometry in logical pixels.
    fn snapshot(&self) -> Result<WindowState, ShellError>;
    fn eval(&self, script: &str) -> Result<(), ShellError>;
    fn set_zoom(&self, factor: f64) -> Result<(), ShellError>;
    fn is_fullscreen(&self) -> Result<bool, ShellError>;
    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ShellError>;
    fn minimize(&self) -> Result<(), ShellError>;
    fn close(&self) -> Result<(), ShellError>;
    fn toggle_maximize(&self) -> Result<(), ShellError>;
    /// No-op where the host has no developer tools.
    fn toggle_devtools(&self);
}

/// Application icon badge. Only exists where the platform has one.
pub trait Dock: Send + Sync {
    fn set_badge(&self, label: Option<&str>) -> Result<(), ShellError>;
}

/// The host application framework, as seen by the shell.
pub trait ShellHost: Send + Sync {
    type Window: ShellWindow + Clone + Send + Sync + 'static;

    fn capabilities(&self) -> HostCapabilities;
    fn create_window(&self, request: &WindowRequest) -> Result<Self::Window, ShellError>;
    fn install_menu(&self, menu: &[MenuNode]) -> Result<(), ShellError>;
    fn dock(&self) -> Option<&dyn Dock>;
    fn open_url(&self, url: &str) -> Result<(), ShellError>;
    fn monitor_areas(&self) -> Vec<MonitorArea>;
}

/// What to do once the last window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllWindowsClosed {
    Quit,
    StayResident,
}

pub struct ShellController<H: ShellHost> {
    host: H,
    config: ShellConfig,
    keeper: WindowStateKeeper,
    window: Mutex<Option<H::Window>>,
    badge: BadgeCounter,
    zoom: Mutex<ZoomLevel>,
}

impl<H: ShellHost> ShellController<H> {
    pub fn new(host: H, config: ShellConfig, keeper: WindowStateKeeper) -> Self {
        Self {
            host,
            config,
            keeper,
            window: Mutex::new(None),
            badge: BadgeCounter::new(),
            zoom: Mutex::new(ZoomLevel::default()),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn lock_window(&self) -> MutexGuard<'_, Option<H::Window>> {
        match self.window.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("ShellController: window mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn lock_zoom(&self) -> MutexGuard<'_, ZoomLevel> {
        self.zoom.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn is_open(&self) -> bool {
        self.lock_window().is_some()
    }

    /// Handle to the open window, if any.
    pub fn window(&self) -> Option<H::Window> {
        self.lock_window().clone()
    }

    /// Create the window from persisted (or default) bounds.
    ///
    /// The window starts hidden and is revealed by [`Self::on_ready_to_render`].
    /// Returns `false` without doing anything when a window is already open.
    pub fn open(&self) -> Result<bool, ShellError> {
        if self.is_open() {
            debug!("Window already open, not creating another");
            return Ok(false);
        }

        let monitors = self.host.monitor_areas();
        let state = self.keeper.load(self.config.default_bounds(), &monitors)?;

        if self.config.variant.has_menu() {
            let menu = menu_template(&self.config.title, self.host.capabilities().menu_convention);
            self.host.install_menu(&menu)?;
        }

        let request = WindowRequest {
            title: self.config.title.clone(),
            bounds: state.bounds,
            maximized: state.maximized,
            fullscreen: state.fullscreen,
            document: self.config.entry_document.clone(),
            bridge_script: self.config.variant.has_bridge().then_some(BRIDGE_SCRIPT),
        };

        // The window lock is not held here: the host may dispatch events
        // for the new window before create_window returns.
        let window = self.host.create_window(&request)?;
        *self.lock_zoom() = ZoomLevel::reset();
        *self.lock_window() = Some(window);

        info!(
            "Opened window {}x{} at {:?}",
            state.bounds.width,
            state.bounds.height,
            state.bounds.position()
        );
        Ok(true)
    }

    /// Forget the window. Returns whether one was open.
    pub fn close(&self) -> bool {
        let was_open = self.lock_window().take().is_some();
        if was_open {
            info!("Window closed");
        }
        was_open
    }

    /// First paint is ready: reveal the hidden window and focus it.
    pub fn on_ready_to_render(&self, window: &H::Window) -> Result<(), ShellError> {
        window.show()?;
        window.focus()
    }

    /// The window moved or resized.
    pub fn on_window_changed(&self, window: &H::Window) {
        match window.snapshot() {
            Ok(snapshot) => self.keeper.track(snapshot),
            Err(e) => warn!("Could not read window geometry: {e}"),
        }
    }

    /// The window is about to close: record and persist its geometry.
    pub fn on_close_requested(&self, window: &H::Window) -> Result<(), ShellError> {
        self.on_window_changed(window);
        self.keeper.persist()
    }

    pub fn on_window_destroyed(&self) {
        self.close();
    }

    /// Application re-activated (e.g. dock icon clicked). Recreates the
    /// window when none is open; returns whether one was created.
    pub fn on_activate(&self) -> Result<bool, ShellError> {
        if self.is_open() {
            return Ok(false);
        }
        info!("Activated with no window open, recreating");
        self.open()
    }

    pub fn on_all_windows_closed(&self) -> AllWindowsClosed {
        if self.host.capabilities().stays_resident {
            debug!("All windows closed, staying resident");
            AllWindowsClosed::StayResident
        } else {
            info!("All windows closed, quitting");
            AllWindowsClosed::Quit
        }
    }

    /// The window gained focus: clear the background-completion badge.
    pub fn on_focus(&self) -> Result<(), ShellError> {
        if !self.config.variant.forwards_progress() {
            return Ok(());
        }
        self.badge.reset();
        match self.host.dock() {
            Some(dock) => dock.set_badge(None),
            None => Ok(()),
        }
    }

    /// The page changed its document title.
    ///
    /// The full shell keeps its fixed application title; the minimal shell
    /// lets the window title follow the page.
    pub fn on_page_title_changed(
        &self,
        window: &H::Window,
        page_title: &str,
    ) -> Result<(), ShellError> {
        if self.config.variant.locks_title() {
            debug!("Keeping fixed title over page title '{page_title}'");
            return Ok(());
        }
        if page_title.trim().is_empty() {
            return Ok(());
        }
        window.set_title(page_title)
    }

    /// Forward a fractional progress report to the window's indicator.
    pub fn report_progress(&self, value: Option<f64>) -> Result<ProgressIndicator, ShellError> {
        let indicator = ProgressIndicator::from_report(value);
        if !self.config.variant.forwards_progress() {
            debug!("Progress forwarding disabled, ignoring {value:?}");
            return Ok(indicator);
        }

        match self.window() {
            Some(window) => window.set_progress(indicator)?,
            None => debug!("No window open, dropping progress {indicator:?}"),
        }
        Ok(indicator)
    }

    /// A unit of background work completed.
    ///
    /// Bumps the dock badge unless there is no dock or the window has focus.
    /// Returns the new count when the badge was updated.
    pub fn report_done(&self) -> Result<Option<u32>, ShellError> {
        if !self.config.variant.forwards_progress() {
            return Ok(None);
        }
        let Some(dock) = self.host.dock() else {
            return Ok(None);
        };
        if self.window().is_some_and(|window| window.is_focused()) {
            return Ok(None);
        }

        let count = self.badge.increment();
        dock.set_badge(badge_label(count).as_deref())?;
        Ok(Some(count))
    }

    pub fn badge_count(&self) -> u32 {
        self.badge.get()
    }

    /// Bounds the keeper currently holds for the window.
    pub fn tracked_bounds(&self) -> Option<WindowBounds> {
        self.keeper.current().map(|state| state.bounds)
    }

    /// Run a clicked menu command.
    pub fn perform(&self, command: MenuCommand) -> Result<(), ShellError> {
        debug!("Menu command {}", command.id());
        match command {
            MenuCommand::Action(MenuAction::LearnMore) => {
                let url = self.config.learn_more_url()?;
                self.host.open_url(url.as_str())
            }
            MenuCommand::Action(MenuAction::Preferences) => self.dispatch(PREFERENCES_EVENT),
            MenuCommand::Action(MenuAction::CheckForUpdates) => {
                self.dispatch(CHECK_FOR_UPDATES_EVENT)
            }
            MenuCommand::Role(role) => self.perform_role(role),
        }
    }

    fn perform_role(&self, role: MenuRole) -> Result<(), ShellError> {
        match role {
            MenuRole::Undo => self.exec_command("undo"),
            MenuRole::Redo => self.exec_command("redo"),
            MenuRole::Cut => self.exec_command("cut"),
            MenuRole::Copy => self.exec_command("copy"),
            MenuRole::Paste | MenuRole::PasteAndMatchStyle => self.exec_command("paste"),
            MenuRole::Delete => self.exec_command("delete"),
            MenuRole::SelectAll => self.exec_command("selectAll"),
            MenuRole::Reload | MenuRole::ForceReload => self.eval(RELOAD_SCRIPT),
            MenuRole::ToggleDevTools => self.with_window(|window| {
                window.toggle_devtools();
                Ok(())
            }),
            MenuRole::ResetZoom => self.apply_zoom(|_| ZoomLevel::reset()),
            MenuRole::ZoomIn => self.apply_zoom(ZoomLevel::zoom_in),
            MenuRole::ZoomOut => self.apply_zoom(ZoomLevel::zoom_out),
            MenuRole::ToggleFullscreen => {
                self.with_window(|window| window.set_fullscreen(!window.is_fullscreen()?))
            }
            MenuRole::Minimize => self.with_window(ShellWindow::minimize),
            MenuRole::Close => self.with_window(ShellWindow::close),
            MenuRole::Zoom => self.with_window(ShellWindow::toggle_maximize),
            MenuRole::Front => self.with_window(|window| {
                window.show()?;
                window.focus()
            }),
            MenuRole::StartSpeaking => self.eval(SPEAK_SELECTION_SCRIPT),
            MenuRole::StopSpeaking => self.eval(STOP_SPEAKING_SCRIPT),
            MenuRole::About
            | MenuRole::Services
            | MenuRole::Hide
            | MenuRole::HideOthers
            | MenuRole::Unhide
            | MenuRole::Quit => {
                debug!("{} is handled natively", role.id());
                Ok(())
            }
        }
    }

    fn with_window<F>(&self, f: F) -> Result<(), ShellError>
    where
        F: FnOnce(&H::Window) -> Result<(), ShellError>,
    {
        match self.window() {
            Some(window) => f(&window),
            None => {
                debug!("No window open, ignoring window command");
                Ok(())
            }
        }
    }

    fn eval(&self, script: &str) -> Result<(), ShellError> {
        self.with_window(|window| window.eval(script))
    }

    fn exec_command(&self, name: &str) -> Result<(), ShellError> {
        self.eval(&format!("document.execCommand('{name}')"))
    }

    fn dispatch(&self, event: &str) -> Result<(), ShellError> {
        self.eval(&format!("window.dispatchEvent(new CustomEvent('{event}'))"))
    }

    fn apply_zoom<F>(&self, step: F) -> Result<(), ShellError>
    where
        F: FnOnce(ZoomLevel) -> ZoomLevel,
    {
        let Some(window) = self.window() else {
            return Ok(());
        };
        let factor = {
            let mut zoom = self.lock_zoom();
            *zoom = step(*zoom);
            zoom.factor()
        };
        window.set_zoom(factor)
    }
}
