//! Window geometry persistence.
//!
//! The keeper restores the last bounds at startup, follows the window while
//! it moves and resizes, and writes the result back when the window closes.

use crate::db::Database;
use crate::error::ShellError;
use crate::models::{MonitorArea, WindowBounds, WindowState};
use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct WindowStateKeeper {
    db: Arc<Mutex<Database>>,
    tracked: Mutex<Option<WindowState>>,
}

impl WindowStateKeeper {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self {
            db,
            tracked: Mutex::new(None),
        }
    }

    fn lock_db(&self) -> MutexGuard<'_, Database> {
        match self.db.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("WindowStateKeeper: database mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn lock_tracked(&self) -> MutexGuard<'_, Option<WindowState>> {
        self.tracked.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Read the persisted state, or `defaults` when nothing usable is stored.
    ///
    /// A stored position that no available monitor fully contains is dropped
    /// so the window cannot open off-screen. With no monitor information the
    /// stored position is trusted.
    pub fn load(
        &self,
        defaults: WindowBounds,
        monitors: &[MonitorArea],
    ) -> Result<WindowState, ShellError> {
        let stored = {
            let db = self.lock_db();
            WindowState::find(db.connection())?
        };

        let state = match stored {
            Some(state) => sanitize(state, defaults, monitors),
            None => {
                debug!("No persisted window state, using defaults");
                WindowState::normal(defaults)
            }
        };

        *self.lock_tracked() = Some(state);
        Ok(state)
    }

    /// Record the window's current geometry.
    ///
    /// While maximized or fullscreen only the flags change; the last normal
    /// bounds are kept so the window restores to them next run. Minimized
    /// snapshots are ignored: hosts report placeholder geometry for them.
    pub fn track(&self, snapshot: WindowState) {
        if snapshot.minimized {
            debug!("Window minimized, keeping last tracked geometry");
            return;
        }
        let mut tracked = self.lock_tracked();
        let next = match *tracked {
            Some(previous) if snapshot.maximized || snapshot.fullscreen => WindowState {
                bounds: previous.bounds,
                ..snapshot
            },
            Some(_) | None => snapshot,
        };
        *tracked = Some(next);
    }

    /// Last tracked state, if the window was ever loaded or tracked.
    pub fn current(&self) -> Option<WindowState> {
        *self.lock_tracked()
    }

    /// Write the tracked state to the database.
    pub fn persist(&self) -> Result<(), ShellError> {
        let Some(state) = self.current() else {
            return Ok(());
        };

        let db = self.lock_db();
        state.save(db.connection())?;
        info!(
            "Saved window state {}x{} (maximized: {}, fullscreen: {})",
            state.bounds.width, state.bounds.height, state.maximized, state.fullscreen
        );
        Ok(())
    }
}

fn sanitize(state: WindowState, defaults: WindowBounds, monitors: &[MonitorArea]) -> WindowState {
    let mut bounds = state.bounds;

    if !bounds.has_usable_size() {
        warn!(
            "Persisted window size {}x{} is unusable, falling back to defaults",
            bounds.width, bounds.height
        );
        bounds.width = defaults.width;
        bounds.height = defaults.height;
    }

    if bounds.position().is_some()
        && !monitors.is_empty()
        && !monitors.iter().any(|area| bounds.is_within(area))
    {
        info!("Persisted window position is off-screen, resetting position");
        bounds = bounds.without_position();
    }

    WindowState { bounds, ..state }
}
