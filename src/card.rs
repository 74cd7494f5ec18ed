//! SnippetCard - one interactive card per catalog entry
//!
//! Affordances:
//! - copy button, click on the code, or right-click anywhere → copy payload
//! - info button → detail modal
//! - drag handle → payload onto the bookmarks bar
//! - click on the card background → toggle the expanded layout; the header
//!   and the code preview keep their clicks

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::actions;
use crate::catalog::SnippetEntry;
use crate::context::use_app;
use crate::drag::{self, DragBinding};
use crate::modal::{self, CopyIcon};
use crate::text;
use crate::toast::{self, BADGE_TIMING, Phase, ToastKind, ToastSlot};

const PULSE_MS: u32 = 300;

/// Clickable parts of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardRegion {
    /// The card itself, outside every other region
    Background,
    /// Title, category, drag handle and buttons
    Header,
    Code,
}

impl CardRegion {
    /// Whether a click here may reach the card's expand toggle
    fn toggles_card(self) -> bool {
        self == Self::Background
    }

    fn contain(self, e: &MouseEvent) {
        if !self.toggles_card() {
            e.stop_propagation();
        }
    }
}
/// Badge sits this far above the pointer
const BADGE_LIFT: f64 = 40.0;

#[component]
pub fn SnippetCard(entry: SnippetEntry) -> Element {
    let ctx = use_app();
    let mut expanded = use_signal(|| false);
    let mut pulsing = use_signal(|| false);
    let badge = use_signal(ToastSlot::new);
    let mut badge_at = use_signal(|| (0.0f64, 0.0f64));
    let mut drag_binding = use_signal(|| None::<DragBinding>);

    let highlighted = text::syntax_highlight(&entry.code);
    let slug = entry.slug.clone();
    let title = entry.display_title().to_string();
    let category = entry.category.clone();
    let card_class = if expanded() { "bookmarklet-card expanded" } else { "bookmarklet-card" };
    let pulse_class = if pulsing() { " pulse" } else { "" };

    // Copy from the pointer position, with the "Copied!" badge on success
    let copy_at = {
        let entry = entry.clone();
        move |x: f64, y: f64| {
            let entry = entry.clone();
            spawn(async move {
                if actions::copy_entry(ctx, &entry).await {
                    badge_at.set((x, y - BADGE_LIFT));
                    toast::present_with(badge, "Copied!", ToastKind::Success, BADGE_TIMING);
                }
            });
        }
    };
    let copy_from_code = copy_at.clone();
    let copy_from_menu = copy_at;

    let copy_entry = entry.clone();
    let info_entry = entry.clone();
    let payload = entry.payload();

    rsx! {
        div {
            class: "{card_class}",
            "data-slug": "{slug}",
            onclick: move |e: MouseEvent| {
                CardRegion::Background.contain(&e);
                expanded.toggle();
            },
            oncontextmenu: move |e: MouseEvent| {
                e.prevent_default();
                let point = e.client_coordinates();
                copy_from_menu(point.x, point.y);
            },

            div { class: "copy-tooltip", "Click to copy" }

            div {
                class: "card-header",
                onclick: move |e: MouseEvent| CardRegion::Header.contain(&e),
                div {
                    class: "drag-handle",
                    draggable: "true",
                    title: "Drag to bookmarks bar",
                    onmounted: move |e: MountedEvent| {
                        if let Some(el) = e.data().downcast::<web_sys::Element>() {
                            drag_binding.set(Some(drag::bind(el, payload.clone())));
                        }
                    },
                    "\u{22ee}\u{22ee}"
                }
                div { class: "card-title", "{title}" }
                if let Some(category) = category {
                    span { class: "card-category", "{category}" }
                }
                button {
                    class: "info-button",
                    title: "View description",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        modal::open_modal(ctx.modal, info_entry.clone());
                    },
                    svg {
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        circle { cx: "12", cy: "12", r: "10" }
                        line { x1: "12", y1: "16", x2: "12", y2: "12" }
                        line { x1: "12", y1: "8", x2: "12.01", y2: "8" }
                    }
                    span { "Description" }
                }
                button {
                    class: "action-button copy-button{pulse_class}",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        let entry = copy_entry.clone();
                        spawn(async move {
                            if actions::copy_entry(ctx, &entry).await {
                                pulsing.set(true);
                                TimeoutFuture::new(PULSE_MS).await;
                                pulsing.set(false);
                            }
                        });
                    },
                    CopyIcon {}
                    "Copy"
                }
            }

            div {
                class: "editor-container",
                div {
                    class: "editor",
                    pre {
                        class: "editor__code",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            CardRegion::Code.contain(&e);
                            let point = e.client_coordinates();
                            copy_from_code(point.x, point.y);
                        },
                        dangerous_inner_html: "{highlighted}",
                    }
                }
            }

            CopyBadge { slot: badge, at: badge_at }
        }
    }
}

#[component]
fn CopyBadge(slot: Signal<ToastSlot>, at: Signal<(f64, f64)>) -> Element {
    let Some(badge) = slot.read().current().cloned() else {
        return rsx! {};
    };
    let (x, y) = at();
    let show = if badge.phase == Phase::Visible { " show" } else { "" };

    rsx! {
        div {
            key: "{badge.id}",
            class: "copy-feedback-mini{show}",
            style: "left: {x}px; top: {y}px;",
            "{badge.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_background_clicks_toggle() {
        assert!(CardRegion::Background.toggles_card());
        assert!(!CardRegion::Header.toggles_card());
        assert!(!CardRegion::Code.toggles_card());
    }
}
