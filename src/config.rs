use log::{debug, warn};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::notification::toast::ToastTimings;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Id of the optional `<script type="application/json">` block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    /// Waits `submit_delay_ms` and always succeeds.
    Simulated,
    /// POSTs the form as JSON to `contact_endpoint`.
    Http,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub submission: SubmissionMode,
    pub contact_endpoint: String,
    pub submit_delay_ms: u32,
    pub request_timeout_ms: u32,
    pub notification_visible_ms: u32,
    pub header_offset_px: f64,
    pub header_scroll_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submission: SubmissionMode::Simulated,
            contact_endpoint: format!("{}/api/contact", get_backend_url()),
            submit_delay_ms: 2_000,
            request_timeout_ms: 10_000,
            notification_visible_ms: 5_000,
            header_offset_px: 80.0,
            header_scroll_threshold_px: 100.0,
            mobile_breakpoint_px: 768.0,
            reveal_threshold: 0.1,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config block from the current document, falling back to
    /// defaults when it is missing or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    debug!("Loaded site config: {:?}", config);
                    config
                }
                Err(e) => {
                    warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn toast_timings(&self) -> ToastTimings {
        ToastTimings {
            visible_ms: self.notification_visible_ms,
            ..ToastTimings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.submission, SubmissionMode::Simulated);
        assert_eq!(config.submit_delay_ms, 2_000);
        assert!(config.contact_endpoint.ends_with("/api/contact"));
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{"submission": "http", "contact_endpoint": "/contact", "notification_visible_ms": 3000}"#,
        )
        .unwrap();

        assert_eq!(config.submission, SubmissionMode::Http);
        assert_eq!(config.contact_endpoint, "/contact");
        assert_eq!(config.toast_timings().visible_ms, 3_000);
        assert_eq!(config.header_offset_px, 80.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SiteConfig::from_json("{submission:"),
            Err(ConfigError::Parse(_))
        ));
        assert!(SiteConfig::from_json(r#"{"submission": "carrier-pigeon"}"#).is_err());
    }
}
