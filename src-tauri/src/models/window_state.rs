use rusqlite::{params, Connection, OptionalExtension, Result};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// On-screen rectangle of the window in logical pixels.
///
/// `x`/`y` are `None` when the position has never been set; the host then
/// picks the position (centred).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl WindowBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x: Some(x), y: Some(y), width, height }
    }

    pub fn unpositioned(width: f64, height: f64) -> Self {
        Self { x: None, y: None, width, height }
    }

    /// Position, only when both coordinates are known.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }

    pub fn without_position(self) -> Self {
        Self { x: None, y: None, ..self }
    }

    pub fn has_usable_size(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 1.0 && self.height >= 1.0
    }

    /// Whether the whole rectangle lies inside `area`. Unpositioned bounds
    /// are never considered inside.
    pub fn is_within(&self, area: &MonitorArea) -> bool {
        self.position().is_some_and(|(x, y)| {
            x >= area.x
                && y >= area.y
                && x + self.width <= area.x + area.width
                && y + self.height <= area.y + area.height
        })
    }
}

/// Work area of one display in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Persisted window geometry: the last normal bounds plus display mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowState {
    pub bounds: WindowBounds,
    pub maximized: bool,
    pub fullscreen: bool,
    /// Only meaningful on live snapshots; never stored.
    #[serde(skip)]
    pub minimized: bool,
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

impl WindowState {
    pub fn normal(bounds: WindowBounds) -> Self {
        Self { bounds, maximized: false, fullscreen: false, minimized: false }
    }

    pub fn find(conn: &Connection) -> Result<Option<Self>> {
        conn.query_row(
            "SELECT x, y, width, height, maximized, fullscreen FROM window_state WHERE id = 1",
            [],
            |row| {
                Ok(Self {
                    bounds: WindowBounds {
                        x: row.get(0)?,
                        y: row.get(1)?,
                        width: row.get(2)?,
                        height: row.get(3)?,
                    },
                    maximized: row.get(4)?,
                    fullscreen: row.get(5)?,
                    minimized: false,
                })
            },
        )
        .optional()
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        // Store both coordinates or neither
        let (x, y) = match self.bounds.position() {
            Some((x, y)) => (Some(x), Some(y)),
            None => (None, None),
        };

        conn.execute(
            "INSERT INTO window_state (id, x, y, width, height, maximized, fullscreen, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                x = excluded.x,
                y = excluded.y,
                width = excluded.width,
                height = excluded.height,
                maximized = excluded.maximized,
                fullscreen = excluded.fullscreen,
                updated_at = excluded.updated_at",
            params![
                x,
                y,
                self.bounds.width,
                self.bounds.height,
                self.maximized,
                self.fullscreen,
                current_timestamp(),
            ],
        )?;
        Ok(())
    }
}
