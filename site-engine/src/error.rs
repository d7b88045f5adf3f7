// error.rs - Engine error type
//
// DOM absence is never an error; only resource loading, config decoding and
// date parsing can fail.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load particle image {0}")]
    ImageLoad(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unrecognised date {0:?}")]
    Date(String),
    #[error("unknown mode {0:?}")]
    UnknownMode(String),
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
