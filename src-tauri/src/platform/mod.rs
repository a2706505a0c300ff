pub mod types;

pub use types::{HostCapabilities, MenuConvention};

/// Capabilities of the platform this binary was built for.
#[cfg(target_os = "macos")]
pub const fn current() -> HostCapabilities {
    HostCapabilities::macos()
}

/// Capabilities of the platform this binary was built for.
#[cfg(not(target_os = "macos"))]
pub const fn current() -> HostCapabilities {
    HostCapabilities::standard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_build_target() {
        let caps = current();
        if cfg!(target_os = "macos") {
            assert_eq!(caps, HostCapabilities::macos());
        } else {
            assert!(!caps.stays_resident);
            assert!(!caps.has_dock);
            assert_eq!(caps.menu_convention, MenuConvention::Standard);
        }
    }
}
