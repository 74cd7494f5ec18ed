//! Toast - transient feedback for user actions
//!
//! One slot, one toast. Showing a new toast evicts the current one on the
//! spot. Lifecycle steps are addressed by id, so a timer that outlives its
//! toast finds nothing to do.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Delay before the enter transition starts, roughly one frame
pub const FRAME_MS: u32 = 16;

/// How long a toast holds and how long its exit transition runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub dwell_ms: u32,
    pub exit_ms: u32,
}

/// Page-level feedback toast
pub const TOAST_TIMING: Timing = Timing { dwell_ms: 2000, exit_ms: 300 };

/// "Copied!" badge next to the pointer
pub const BADGE_TIMING: Timing = Timing { dwell_ms: 1000, exit_ms: 200 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: Phase,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: ToastId,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replace whatever is showing with a fresh toast.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            phase: Phase::Entering,
        });
        id
    }

    pub fn reveal(&mut self, id: ToastId) -> bool {
        self.advance(id, Phase::Entering, Phase::Visible)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.advance(id, Phase::Visible, Phase::Leaving)
            || self.advance(id, Phase::Entering, Phase::Leaving)
    }

    /// Remove toast `id` if it is still the one showing.
    pub fn detach(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    fn advance(&mut self, id: ToastId, from: Phase, to: Phase) -> bool {
        match self.current.as_mut() {
            Some(t) if t.id == id && t.phase == from => {
                t.phase = to;
                true
            }
            _ => false,
        }
    }
}

/// Show a toast and drive it through enter, dwell, exit and detach.
pub fn present(slot: Signal<ToastSlot>, message: impl Into<String>, kind: ToastKind) {
    present_with(slot, message, kind, TOAST_TIMING);
}

pub fn present_with(
    mut slot: Signal<ToastSlot>,
    message: impl Into<String>,
    kind: ToastKind,
    timing: Timing,
) -> ToastId {
    let id = slot.write().show(message, kind);
    spawn_forever(async move {
        TimeoutFuture::new(FRAME_MS).await;
        step(&mut slot, |s| s.reveal(id));
        TimeoutFuture::new(timing.dwell_ms).await;
        if !step(&mut slot, |s| s.dismiss(id)) {
            return;
        }
        TimeoutFuture::new(timing.exit_ms).await;
        step(&mut slot, |s| s.detach(id));
    });
    id
}

/// Apply `f` unless the slot's owner has been dropped in the meantime.
fn step(slot: &mut Signal<ToastSlot>, f: impl FnOnce(&mut ToastSlot) -> bool) -> bool {
    slot.try_write().map(|mut s| f(&mut *s)).unwrap_or(false)
}

#[component]
pub fn ToastHost(slot: Signal<ToastSlot>) -> Element {
    let Some(toast) = slot.read().current().cloned() else {
        return rsx! {};
    };
    let visible = if toast.phase == Phase::Visible { " visible" } else { "" };
    let kind = toast.kind.class();

    rsx! {
        div {
            key: "{toast.id}",
            class: "copy-feedback {kind}{visible}",
            role: "status",
            svg {
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
                polyline { points: "22 4 12 14.01 9 11.01" }
            }
            span { "{toast.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_show_replaces_first() {
        let mut slot = ToastSlot::new();
        let first = slot.show("one", ToastKind::Success);
        let second = slot.show("two", ToastKind::Error);
        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "two");
        assert_eq!(current.kind, ToastKind::Error);
    }

    #[test]
    fn full_lifecycle() {
        let mut slot = ToastSlot::new();
        let id = slot.show("hi", ToastKind::Success);
        assert_eq!(slot.current().unwrap().phase, Phase::Entering);
        assert!(slot.reveal(id));
        assert_eq!(slot.current().unwrap().phase, Phase::Visible);
        assert!(slot.dismiss(id));
        assert_eq!(slot.current().unwrap().phase, Phase::Leaving);
        assert!(slot.detach(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_timers_are_noops() {
        let mut slot = ToastSlot::new();
        let old = slot.show("old", ToastKind::Success);
        let new = slot.show("new", ToastKind::Success);

        assert!(!slot.reveal(old));
        assert!(!slot.dismiss(old));
        assert!(!slot.detach(old));

        let current = slot.current().unwrap();
        assert_eq!(current.id, new);
        assert_eq!(current.phase, Phase::Entering);
    }

    #[test]
    fn detach_after_removal_is_noop() {
        let mut slot = ToastSlot::new();
        let id = slot.show("x", ToastKind::Success);
        assert!(slot.detach(id));
        assert!(!slot.detach(id));
        assert!(!slot.reveal(id));
    }

    #[test]
    fn dismiss_before_reveal_still_leaves() {
        let mut slot = ToastSlot::new();
        let id = slot.show("x", ToastKind::Error);
        assert!(slot.dismiss(id));
        assert!(!slot.reveal(id));
    }
}
