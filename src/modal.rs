//! Detail modal - title, description and actions for one snippet
//!
//! Modal and overlay share one slot and one lifecycle. Opening while a
//! modal is attached replaces it, so there is never a second overlay.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::actions;
use crate::catalog::SnippetEntry;
use crate::context::use_app;
use crate::toast::Phase;

const ENTER_DELAY_MS: u32 = 10;
const EXIT_MS: u32 = 300;

pub type ModalId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct OpenModal {
    pub id: ModalId,
    pub entry: SnippetEntry,
    pub phase: Phase,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSlot {
    current: Option<OpenModal>,
    next_id: ModalId,
}

impl ModalSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&OpenModal> {
        self.current.as_ref()
    }

    pub fn open(&mut self, entry: SnippetEntry) -> ModalId {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(OpenModal { id, entry, phase: Phase::Entering });
        id
    }

    pub fn reveal(&mut self, id: ModalId) -> bool {
        match self.current.as_mut() {
            Some(m) if m.id == id && m.phase == Phase::Entering => {
                m.phase = Phase::Visible;
                true
            }
            _ => false,
        }
    }

    /// Start closing modal `id`; false if it is gone or already closing.
    pub fn close(&mut self, id: ModalId) -> bool {
        match self.current.as_mut() {
            Some(m) if m.id == id && m.phase != Phase::Leaving => {
                m.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn detach(&mut self, id: ModalId) -> bool {
        if self.current.as_ref().is_some_and(|m| m.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Attach a modal for `entry` and make it visible after a short tick.
pub fn open_modal(mut slot: Signal<ModalSlot>, entry: SnippetEntry) {
    let id = slot.write().open(entry);
    spawn_forever(async move {
        TimeoutFuture::new(ENTER_DELAY_MS).await;
        slot.write().reveal(id);
    });
}

/// Fade modal `id` out, then detach it with its overlay.
pub fn close_modal(mut slot: Signal<ModalSlot>, id: ModalId) {
    if !slot.write().close(id) {
        return;
    }
    spawn_forever(async move {
        TimeoutFuture::new(EXIT_MS).await;
        slot.write().detach(id);
    });
}

#[component]
pub fn DetailModal() -> Element {
    let ctx = use_app();
    let Some(open) = ctx.modal.read().current().cloned() else {
        return rsx! {};
    };
    let id = open.id;
    let visible = if open.phase == Phase::Visible { " visible" } else { "" };
    let entry = open.entry;
    let title = entry.display_title().to_string();
    let description = entry.display_description().to_string();
    let tags = entry.tags.clone();
    let copy_entry = entry.clone();
    let run_entry = entry;

    rsx! {
        div {
            key: "overlay-{id}",
            class: "overlay{visible}",
            onclick: move |_| close_modal(ctx.modal, id),
        }
        div {
            key: "modal-{id}",
            class: "description-card{visible}",
            role: "dialog",
            "aria-modal": "true",
            button {
                class: "close-btn",
                "aria-label": "Close",
                onclick: move |_| close_modal(ctx.modal, id),
                "\u{00d7}"
            }
            h3 { "{title}" }
            p { "{description}" }
            if !tags.is_empty() {
                div {
                    class: "tag-list",
                    for tag in tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "action-button copy-button",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        let entry = copy_entry.clone();
                        spawn(async move {
                            actions::copy_entry(ctx, &entry).await;
                        });
                    },
                    CopyIcon {}
                    "Copy Bookmarklet"
                }
                button {
                    class: "action-button run-button",
                    title: "Runs with full access to this page",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        actions::run_entry(ctx, &run_entry);
                        close_modal(ctx.modal, id);
                    },
                    "Run here"
                }
            }
        }
    }
}

#[component]
pub fn CopyIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "9", y: "9", width: "13", height: "13", rx: "2", ry: "2" }
            path { d: "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str) -> SnippetEntry {
        SnippetEntry::new(slug, slug, "", "javascript:void(0)")
    }

    #[test]
    fn reopening_replaces_single_modal() {
        let mut slot = ModalSlot::new();
        let first = slot.open(entry("a"));
        let second = slot.open(entry("b"));
        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.entry.slug, "b");
    }

    #[test]
    fn stale_close_does_not_touch_new_modal() {
        let mut slot = ModalSlot::new();
        let first = slot.open(entry("a"));
        let second = slot.open(entry("b"));
        assert!(!slot.close(first));
        assert!(!slot.detach(first));
        assert!(slot.reveal(second));
        assert_eq!(slot.current().unwrap().phase, Phase::Visible);
    }

    #[test]
    fn open_reveal_close_detach() {
        let mut slot = ModalSlot::new();
        let id = slot.open(entry("a"));
        assert!(slot.reveal(id));
        assert!(slot.close(id));
        assert!(!slot.close(id));
        assert_eq!(slot.current().unwrap().phase, Phase::Leaving);
        assert!(slot.detach(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn close_before_reveal_keeps_it_closing() {
        let mut slot = ModalSlot::new();
        let id = slot.open(entry("a"));
        assert!(slot.close(id));
        assert!(!slot.reveal(id));
    }
}
