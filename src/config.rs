//! Site configuration.
//!
//! The page runs in the browser, where there is no process environment, so
//! overrides are captured at compile time:
//!
//! ```bash
//! PORTFOLIO_BASE_PATH=/myPortfolio/ cargo leptos build --release
//! PORTFOLIO_SUCCESS_DELAY_MS=250 cargo leptos watch
//! ```

use std::time::Duration;

use chrono::{DateTime, Datelike};

pub const DEFAULT_RECIPIENT: &str = "giovanni.podbersig@outlook.it";
pub const DEFAULT_FALLBACK_SUBJECT: &str = "Portfolio Contact Form";
pub const DEFAULT_SUCCESS_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Address the contact form hands off to.
    pub recipient: String,
    /// Subject used when the visitor leaves the subject field empty.
    pub fallback_subject: String,
    /// Pause between the mail handoff and reporting success.
    pub success_delay: Duration,
    /// Prefix for root-relative assets, normalised by [`normalize_base_path`].
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            fallback_subject: DEFAULT_FALLBACK_SUBJECT.to_string(),
            success_delay: DEFAULT_SUCCESS_DELAY,
            base_path: String::new(),
        }
    }
}

impl SiteConfig {
    /// Defaults overlaid with the compile-time overrides.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("PORTFOLIO_BASE_PATH"),
            option_env!("PORTFOLIO_SUCCESS_DELAY_MS"),
        )
    }

    pub fn with_overrides(base_path: Option<&str>, success_delay_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base_path {
            config.base_path = normalize_base_path(base);
        }
        match success_delay_ms.map(|ms| ms.trim().parse::<u64>()) {
            Some(Ok(ms)) => config.success_delay = Duration::from_millis(ms),
            Some(Err(_)) => {
                log::warn!(
                    "ignoring unparsable PORTFOLIO_SUCCESS_DELAY_MS, using {}ms",
                    DEFAULT_SUCCESS_DELAY.as_millis()
                );
            }
            None => {}
        }
        config
    }

    /// Prefixes a root-relative asset path with the base path.
    pub fn asset(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_path, path)
    }
}

/// `""` and `"/"` mean "served from the root"; anything else gets exactly one
/// leading slash and no trailing slash.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Year the crate was built, used for the footer copyright.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.recipient, "giovanni.podbersig@outlook.it");
        assert_eq!(config.fallback_subject, "Portfolio Contact Form");
        assert_eq!(config.success_delay, Duration::from_millis(500));
        assert_eq!(config.base_path, "");
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("/myPortfolio/"), "/myPortfolio");
        assert_eq!(normalize_base_path("myPortfolio"), "/myPortfolio");
        assert_eq!(normalize_base_path("//nested/site//"), "/nested/site");
    }

    #[test]
    fn test_asset_paths() {
        let root = SiteConfig::default();
        assert_eq!(root.asset("/immagine.jpg"), "/immagine.jpg");

        let nested = SiteConfig::with_overrides(Some("/myPortfolio/"), None);
        assert_eq!(nested.asset("/immagine.jpg"), "/myPortfolio/immagine.jpg");
        assert_eq!(nested.asset("pkg/portfolio.css"), "/myPortfolio/pkg/portfolio.css");
    }

    #[test]
    fn test_delay_override() {
        let config = SiteConfig::with_overrides(None, Some("1200"));
        assert_eq!(config.success_delay, Duration::from_millis(1200));

        let config = SiteConfig::with_overrides(None, Some("soon"));
        assert_eq!(config.success_delay, DEFAULT_SUCCESS_DELAY);
    }

    #[test]
    fn test_build_year_is_stamped() {
        let year = build_year().expect("build.rs should stamp BUILD_TIME");
        assert!(year >= 2024);
    }
}
