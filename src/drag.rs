//! Drag-to-bookmarks-bar support for card handles
//!
//! The payload has to be on the DataTransfer before `dragstart` returns, so
//! the listeners are attached natively to the mounted handle instead of
//! going through a re-render.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, DragEvent, Element, HtmlElement};

/// Transparent element used as the drag image
pub const DRAG_HELPER_ID: &str = "drag-helper";

/// Keeps the handle's listeners alive; dropping it detaches them.
pub struct DragBinding {
    _start: EventListener,
    _end: EventListener,
}

/// Make `handle` carry `payload` when dragged.
pub fn bind(handle: &Element, payload: String) -> DragBinding {
    let start = EventListener::new(handle, "dragstart", move |event| {
        let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer) else {
            return;
        };
        fill_transfer(&transfer, &payload);
    });
    let end = EventListener::new(handle, "dragend", |_| {
        set_helper_display("none");
    });
    DragBinding { _start: start, _end: end }
}

fn fill_transfer(transfer: &DataTransfer, payload: &str) {
    let _ = transfer.set_data("text/plain", payload);
    let _ = transfer.set_data("text/uri-list", payload);
    transfer.set_effect_allowed("copy");
    // without the helper the browser falls back to a snapshot of the handle
    if let Some(helper) = set_helper_display("block") {
        transfer.set_drag_image(&helper, 0, 0);
    }
}

fn set_helper_display(display: &str) -> Option<Element> {
    let helper = web_sys::window()?
        .document()?
        .get_element_by_id(DRAG_HELPER_ID)?;
    if let Some(html) = helper.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", display);
    }
    Some(helper)
}
