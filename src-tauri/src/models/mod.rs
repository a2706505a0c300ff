pub mod window_state;

pub use window_state::{MonitorArea, WindowBounds, WindowState};
