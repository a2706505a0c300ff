//! Shared test utilities for Storatron.
//!
//! Provides a migrated temporary database and a recording host that stands in
//! for Tauri in shell tests.

#![cfg(test)]

use crate::db::{migrations, Database};
use crate::error::ShellError;
use crate::menu::MenuNode;
use crate::models::{MonitorArea, WindowState};
use crate::platform::HostCapabilities;
use crate::shell::{Dock, ProgressIndicator, ShellHost, ShellWindow, WindowRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with migrations applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// Same as [`setup_test_db`] but wrapped the way the app shares it.
pub fn setup_shared_db() -> (Arc<Mutex<Database>>, TempDir) {
    let (db, dir) = setup_test_db();
    (Arc::new(Mutex::new(db)), dir)
}

/// Everything a [`MockWindow`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCall {
    Show,
    Focus,
    SetTitle(String),
    Progress(ProgressIndicator),
    Eval(String),
    Zoom(f64),
    Fullscreen(bool),
    Minimize,
    Close,
    ToggleMaximize,
    ToggleDevtools,
}

#[derive(Debug)]
struct MockWindowInner {
    focused: AtomicBool,
    fullscreen: AtomicBool,
    snapshot: Mutex<WindowState>,
    calls: Mutex<Vec<WindowCall>>,
}

#[derive(Debug, Clone)]
pub struct MockWindow {
    pub request: WindowRequest,
    inner: Arc<MockWindowInner>,
}

impl MockWindow {
    fn new(request: WindowRequest) -> Self {
        let inner = MockWindowInner {
            focused: AtomicBool::new(false),
            fullscreen: AtomicBool::new(false),
            snapshot: Mutex::new(WindowState {
                bounds: request.bounds,
                maximized: request.maximized,
                fullscreen: request.fullscreen,
                minimized: false,
            }),
            calls: Mutex::new(Vec::new()),
        };
        Self { request, inner: Arc::new(inner) }
    }

    pub fn set_focused(&self, focused: bool) {
        self.inner.focused.store(focused, Ordering::SeqCst);
    }

    /// Simulate the user moving/resizing/maximizing the window.
    pub fn set_snapshot(&self, state: WindowState) {
        *self.inner.snapshot.lock().unwrap() = state;
    }

    pub fn calls(&self) -> Vec<WindowCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn last_progress(&self) -> Option<ProgressIndicator> {
        self.calls().into_iter().rev().find_map(|call| match call {
            WindowCall::Progress(indicator) => Some(indicator),
            _ => None,
        })
    }

    fn record(&self, call: WindowCall) {
        self.inner.calls.lock().unwrap().push(call);
    }
}

impl ShellWindow for MockWindow {
    fn show(&self) -> Result<(), ShellError> {
        self.record(WindowCall::Show);
        Ok(())
    }

    fn focus(&self) -> Result<(), ShellError> {
        self.record(WindowCall::Focus);
        Ok(())
    }

    fn is_focused(&self) -> bool {
        self.inner.focused.load(Ordering::SeqCst)
    }

    fn set_title(&self, title: &str) -> Result<(), ShellError> {
        self.record(WindowCall::SetTitle(title.to_string()));
        Ok(())
    }

    fn set_progress(&self, indicator: ProgressIndicator) -> Result<(), ShellError> {
        self.record(WindowCall::Progress(indicator));
        Ok(())
    }

    fn snapshot(&self) -> Result<WindowState, ShellError> {
        let snapshot = *self.inner.snapshot.lock().unwrap();
        Ok(snapshot)
    }

    fn eval(&self, script: &str) -> Result<(), ShellError> {
        self.record(WindowCall::Eval(script.to_string()));
        Ok(())
    }

    fn set_zoom(&self, factor: f64) -> Result<(), ShellError> {
        self.record(WindowCall::Zoom(factor));
        Ok(())
    }

    fn is_fullscreen(&self) -> Result<bool, ShellError> {
        Ok(self.inner.fullscreen.load(Ordering::SeqCst))
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ShellError> {
        self.inner.fullscreen.store(fullscreen, Ordering::SeqCst);
        self.record(WindowCall::Fullscreen(fullscreen));
        Ok(())
    }

    fn minimize(&self) -> Result<(), ShellError> {
        self.record(WindowCall::Minimize);
        Ok(())
    }

    fn close(&self) -> Result<(), ShellError> {
        self.record(WindowCall::Close);
        Ok(())
    }

    fn toggle_maximize(&self) -> Result<(), ShellError> {
        self.record(WindowCall::ToggleMaximize);
        Ok(())
    }

    fn toggle_devtools(&self) {
        self.record(WindowCall::ToggleDevtools);
    }
}

#[derive(Debug, Default)]
pub struct MockDock {
    badges: Mutex<Vec<Option<String>>>,
}

impl MockDock {
    /// Badge currently shown; `None` when cleared or never set.
    pub fn badge(&self) -> Option<String> {
        self.badges.lock().unwrap().last().cloned().flatten()
    }

    pub fn updates(&self) -> usize {
        self.badges.lock().unwrap().len()
    }
}

impl Dock for MockDock {
    fn set_badge(&self, label: Option<&str>) -> Result<(), ShellError> {
        self.badges.lock().unwrap().push(label.map(str::to_string));
        Ok(())
    }
}

/// Host double recording created windows, menus and opened URLs.
pub struct MockHost {
    pub capabilities: HostCapabilities,
    pub dock: Option<MockDock>,
    pub monitors: Vec<MonitorArea>,
    windows: Mutex<Vec<MockWindow>>,
    menus: Mutex<Vec<Vec<MenuNode>>>,
    opened_urls: Mutex<Vec<String>>,
}

impl MockHost {
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            dock: capabilities.has_dock.then(MockDock::default),
            monitors: vec![MonitorArea { x: 0.0, y: 0.0, width: 1920.0, height: 1080.0 }],
            windows: Mutex::new(Vec::new()),
            menus: Mutex::new(Vec::new()),
            opened_urls: Mutex::new(Vec::new()),
        }
    }

    pub fn macos() -> Self {
        Self::new(HostCapabilities::macos())
    }

    pub fn linux() -> Self {
        Self::new(HostCapabilities::standard())
    }

    pub fn created_windows(&self) -> Vec<MockWindow> {
        self.windows.lock().unwrap().clone()
    }

    pub fn last_window(&self) -> MockWindow {
        self.created_windows().pop().expect("no window was created")
    }

    pub fn installed_menus(&self) -> Vec<Vec<MenuNode>> {
        self.menus.lock().unwrap().clone()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened_urls.lock().unwrap().clone()
    }

    pub fn mock_dock(&self) -> &MockDock {
        self.dock.as_ref().expect("host has no dock")
    }
}

impl ShellHost for MockHost {
    type Window = MockWindow;

    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn create_window(&self, request: &WindowRequest) -> Result<MockWindow, ShellError> {
        let window = MockWindow::new(request.clone());
        self.windows.lock().unwrap().push(window.clone());
        Ok(window)
    }

    fn install_menu(&self, menu: &[MenuNode]) -> Result<(), ShellError> {
        self.menus.lock().unwrap().push(menu.to_vec());
        Ok(())
    }

    fn dock(&self) -> Option<&dyn Dock> {
        self.dock.as_ref().map(|dock| dock as &dyn Dock)
    }

    fn open_url(&self, url: &str) -> Result<(), ShellError> {
        self.opened_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn monitor_areas(&self) -> Vec<MonitorArea> {
        self.monitors.clone()
    }
}

