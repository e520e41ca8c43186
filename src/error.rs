//! Crate error type. Browser calls surface `JsValue` errors; those are folded
//! into [`ClickerError`] and converted back at the wasm boundary.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ClickerError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("2d canvas context unavailable")]
    NoCanvasContext,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("audio playback failed: {0}")]
    Audio(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ClickerError {
    pub(crate) fn dom(err: JsValue) -> Self {
        Self::Dom(describe(&err))
    }

    pub(crate) fn audio(err: JsValue) -> Self {
        Self::Audio(describe(&err))
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for ClickerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl From<ClickerError> for JsValue {
    fn from(err: ClickerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// JS exceptions are usually strings or Error objects; Debug covers both.
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub type Result<T, E = ClickerError> = std::result::Result<T, E>;
