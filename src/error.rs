use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Browser window is unavailable")]
    NoWindow,

    #[error("Canvas 2d context is unavailable")]
    NoCanvasContext,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("Invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid configuration override: {0}")]
    ConfigOverride(#[from] serde_wasm_bindgen::Error),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("No record with id {0}")]
    RecordNotFound(u32),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
