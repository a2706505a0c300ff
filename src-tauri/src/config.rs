use crate::constants::{
    APP_TITLE, DEFAULT_HEIGHT, DEFAULT_WIDTH, ENTRY_DOCUMENT, LEARN_MORE_URL, VARIANT_ENV,
};
use crate::error::ShellError;
use crate::models::WindowBounds;
use log::warn;
use url::Url;

/// Which of the two shell flavours to run.
///
/// `Full` wires the preload bridge, the application menu, the title lock and
/// progress/badge forwarding. `Minimal` only creates and manages the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellVariant {
    #[default]
    Full,
    Minimal,
}

impl ShellVariant {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Some(Self::Full),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    pub fn has_bridge(self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn has_menu(self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn locks_title(self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn forwards_progress(self) -> bool {
        matches!(self, Self::Full)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub title: String,
    pub default_width: f64,
    pub default_height: f64,
    pub entry_document: String,
    pub learn_more_url: String,
    pub variant: ShellVariant,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            entry_document: ENTRY_DOCUMENT.to_string(),
            learn_more_url: LEARN_MORE_URL.to_string(),
            variant: ShellVariant::default(),
        }
    }
}

impl ShellConfig {
    /// Default configuration with the variant taken from `STORATRON_VARIANT`.
    pub fn from_env() -> Self {
        Self::default().with_variant_override(std::env::var(VARIANT_ENV).ok().as_deref())
    }

    /// Apply a raw variant value. Unknown values keep the current variant.
    pub fn with_variant_override(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match ShellVariant::parse(raw) {
                Some(variant) => self.variant = variant,
                None => warn!(
                    "Ignoring unknown {VARIANT_ENV} value '{raw}', using {:?}",
                    self.variant
                ),
            }
        }
        self
    }

    /// Bounds used when nothing has been persisted yet: default size, unset position.
    pub fn default_bounds(&self) -> WindowBounds {
        WindowBounds::unpositioned(self.default_width, self.default_height)
    }

    /// Parsed Help > Learn More target. Only web URLs are accepted.
    pub fn learn_more_url(&self) -> Result<Url, ShellError> {
        let url = Url::parse(&self.learn_more_url).map_err(|e| ShellError::InvalidConfig {
            field: "learn_more_url",
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ShellError::InvalidConfig {
                field: "learn_more_url",
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "Storatron");
        assert_eq!(config.variant, ShellVariant::Full);

        let bounds = config.default_bounds();
        assert_eq!(bounds.width, 1280.0);
        assert_eq!(bounds.height, 720.0);
        assert!(bounds.position().is_none());
    }

    #[test]
    fn test_variant_parse_is_case_insensitive() {
        assert_eq!(ShellVariant::parse("Minimal"), Some(ShellVariant::Minimal));
        assert_eq!(ShellVariant::parse(" FULL "), Some(ShellVariant::Full));
        assert_eq!(ShellVariant::parse("compact"), None);
    }

    #[test]
    fn test_variant_override() {
        let config = ShellConfig::default().with_variant_override(Some("minimal"));
        assert_eq!(config.variant, ShellVariant::Minimal);
        assert!(!config.variant.has_menu());
        assert!(!config.variant.forwards_progress());

        let config = ShellConfig::default().with_variant_override(Some("bogus"));
        assert_eq!(config.variant, ShellVariant::Full);

        let config = ShellConfig::default().with_variant_override(None);
        assert_eq!(config.variant, ShellVariant::Full);
    }

    #[test]
    fn test_learn_more_url() {
        let config = ShellConfig::default();
        let url = config.learn_more_url().unwrap();
        assert_eq!(url.host_str(), Some("zbgn.fr"));

        let config = ShellConfig {
            learn_more_url: "file:///etc/passwd".to_string(),
            ..ShellConfig::default()
        };
        assert!(matches!(
            config.learn_more_url(),
            Err(ShellError::InvalidConfig { field: "learn_more_url", .. })
        ));

        let config = ShellConfig {
            learn_more_url: "not a url".to_string(),
            ..ShellConfig::default()
        };
        assert!(config.learn_more_url().is_err());
    }
}
