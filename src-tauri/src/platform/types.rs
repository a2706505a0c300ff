/// Which menu layout the host platform expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuConvention {
    /// Edit / View / Window / Help attached to the window.
    Standard,
    /// Application-identity menu first, global menu bar.
    MacOs,
}

/// What the host platform offers the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Applications keep running with no window open.
    pub stays_resident: bool,
    /// The application icon can carry a badge.
    pub has_dock: bool,
    pub menu_convention: MenuConvention,
}

impl HostCapabilities {
    pub const fn macos() -> Self {
        Self {
            stays_resident: true,
            has_dock: true,
            menu_convention: MenuConvention::MacOs,
        }
    }

    pub const fn standard() -> Self {
        Self {
            stays_resident: false,
            has_dock: false,
            menu_convention: MenuConvention::Standard,
        }
    }
}
