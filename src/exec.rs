//! Trusted execution - run a bookmarklet inside the gallery page itself
//!
//! This is a local convenience for trying a snippet out. The body runs with
//! the full privileges of the page; nothing is sandboxed or filtered.

use dioxus::logger::tracing::{error, info, warn};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{GalleryError, Result, js_message};
use crate::text;

/// Compile the snippet body into a function and call it once.
pub fn run_trusted(code: &str) -> Result<()> {
    let body = text::strip_scheme(code);
    info!("executing bookmarklet ({} bytes)", body.len());
    warn!("bookmarklet runs with full permissions on this page");

    let source = wrap_body(body);
    let compiled = js_sys::eval(&source).map_err(|err| {
        let message = js_message(&err);
        error!("bookmarklet failed to compile: {message}");
        GalleryError::Compile(message)
    })?;
    let function = compiled
        .dyn_into::<js_sys::Function>()
        .map_err(|_| GalleryError::Compile("snippet did not compile to a function".to_string()))?;

    function.call0(&JsValue::UNDEFINED).map(|_| ()).map_err(|err| {
        let message = js_message(&err);
        error!("bookmarklet execution failed: {message}");
        GalleryError::Thrown(message)
    })
}

/// Function expression around `body`; the newline keeps a trailing line
/// comment from swallowing the closing brace.
fn wrap_body(body: &str) -> String {
    format!("(function () {{\n{body}\n}})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_closes_after_line_comment() {
        assert_eq!(wrap_body("go(); // done"), "(function () {\ngo(); // done\n})");
    }
}
