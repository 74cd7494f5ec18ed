//! GalleryError - every recoverable failure the gallery can report
//!
//! Nothing here is fatal to the page. Callers log the error and turn it
//! into an error toast or a disabled feature.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("clipboard write was rejected: {0}")]
    ClipboardRejected(String),

    #[error("copy command was refused by the browser")]
    CopyRefused,

    #[error("could not stage fallback copy field: {0}")]
    CopyStaging(String),

    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("storage write failed for {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Compile(String),

    #[error("{0}")]
    Thrown(String),

    #[error("mount point #{0} is missing")]
    MissingMount(&'static str),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

/// Best-effort message out of a thrown JS value
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| "unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thrown_displays_bare_message() {
        let err = GalleryError::Thrown("x is not defined".into());
        assert_eq!(err.to_string(), "x is not defined");
    }

    #[test]
    fn storage_write_names_key() {
        let err = GalleryError::StorageWrite {
            key: "bookmarklet-theme".into(),
            reason: "quota".into(),
        };
        assert_eq!(err.to_string(), "storage write failed for bookmarklet-theme: quota");
    }
}
