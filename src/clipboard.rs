//! Clipboard bridge
//!
//! Prefers the async Clipboard API. Browsers without it (or pages served
//! over plain http) fall back to selecting a hidden textarea and running
//! the legacy copy command.

use dioxus::logger::tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use crate::error::{GalleryError, Result, js_message};

/// Copy `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
    let navigator = window.navigator();

    let has_async_api = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);

    if has_async_api {
        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| GalleryError::ClipboardRejected(js_message(&err)))
    } else {
        debug!("async clipboard unavailable, using copy command");
        let document = window.document().ok_or(GalleryError::NoWindow)?;
        copy_with_selection(&document, text)
    }
}

/// Temporary off-screen field, detached when dropped
struct StagedField {
    field: HtmlTextAreaElement,
}

impl StagedField {
    fn attach(document: &Document, text: &str) -> Result<Self> {
        let field = document
            .create_element("textarea")
            .map_err(|err| GalleryError::CopyStaging(js_message(&err)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| GalleryError::CopyStaging("not a textarea".to_string()))?;
        field.set_value(text);
        field.set_read_only(true);

        let style = field.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", "0");
        let _ = style.set_property("left", "0");
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("pointer-events", "none");

        let body = document.body().ok_or(GalleryError::MissingMount("body"))?;
        body.append_child(&field)
            .map_err(|err| GalleryError::CopyStaging(js_message(&err)))?;
        Ok(Self { field })
    }
}

impl Drop for StagedField {
    fn drop(&mut self) {
        self.field.remove();
    }
}

fn copy_with_selection(document: &Document, text: &str) -> Result<()> {
    let staged = StagedField::attach(document, text)?;
    let _ = staged.field.focus();
    staged.field.select();

    let html = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| GalleryError::CopyStaging("document has no copy command".to_string()))?;
    match html.exec_command("copy") {
        Ok(true) => Ok(()),
        Ok(false) => Err(GalleryError::CopyRefused),
        Err(err) => Err(GalleryError::ClipboardRejected(js_message(&err))),
    }
}
