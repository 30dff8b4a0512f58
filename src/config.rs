use js_sys::Reflect;
use log::{info, warn};
use serde::Deserialize;
use web_sys::window;

use crate::models::PaymentRequest;

/// Name of the optional global a host page can set before the widget loads.
pub const CONFIG_GLOBAL: &str = "__CHECKOUT_CONFIG__";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CheckoutConfig {
    pub request: PaymentRequest,
    pub countdown_secs: u32,
    pub copy_reset_ms: u32,
    pub notice_ms: u32,
    pub qr_endpoint: String,
    pub qr_size: u32,
    pub log_level: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            request: PaymentRequest::default(),
            countdown_secs: 15 * 60,
            copy_reset_ms: 2_000,
            notice_ms: 8_000,
            qr_endpoint: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: 200,
            log_level: "debug".to_string(),
        }
    }
}

/// Why the defaults were used instead of a host-provided config.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadNote {
    Absent,
    Malformed(String),
}

impl LoadNote {
    pub fn log(&self) {
        match self {
            LoadNote::Absent => info!("No {} found, using default checkout config", CONFIG_GLOBAL),
            LoadNote::Malformed(e) => warn!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e),
        }
    }
}

impl CheckoutConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads `window.__CHECKOUT_CONFIG__`, either an object or a JSON string.
    /// Falls back to the defaults when it is absent or does not deserialize;
    /// the returned note says which, and is logged once the logger is up.
    pub fn load() -> (Self, Option<LoadNote>) {
        let Some(window) = window() else {
            return (Self::default(), Some(LoadNote::Absent));
        };
        let raw = match Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return (Self::default(), Some(LoadNote::Absent)),
        };
        let parsed = match raw.as_string() {
            Some(json) => Self::from_json(&json).map_err(|e| e.to_string()),
            None => serde_wasm_bindgen::from_value::<CheckoutConfig>(raw).map_err(|e| e.to_string()),
        };
        Self::or_default(parsed)
    }

    fn or_default(parsed: Result<Self, String>) -> (Self, Option<LoadNote>) {
        match parsed {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(LoadNote::Malformed(e))),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}
