//! Error type shared by configuration and browser bindings.

/// Errors raised while configuring or attaching site behavior.
#[derive(Debug, thiserror::Error)]
pub enum ClayError {
    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    Config(String),

    /// The inline configuration block was not valid JSON for [`crate::config::MotionConfig`].
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A browser global (`window`, `document`, `body`) was unavailable.
    #[error("missing host object: {0}")]
    MissingHost(&'static str),

    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ClayError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
