//! Copy and run actions shared by cards and the detail modal
//!
//! The async part (clipboard, execution) stays thin; what happens after it
//! settles lives in `settle_*`, which only needs a store and a clock.

use chrono::{DateTime, Utc};
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use crate::catalog::SnippetEntry;
use crate::clipboard;
use crate::context::AppContext;
use crate::error::Result;
use crate::exec;
use crate::storage::KeyValueStore;
use crate::toast::ToastKind;
use crate::usage::{self, UsageEvent};

pub const COPIED_MESSAGE: &str = "Bookmarklet copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Toast to show once an action has settled
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub kind: ToastKind,
}

impl Feedback {
    fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ToastKind::Success
    }
}

/// Count a successful copy; a failed one leaves the counters alone.
pub fn settle_copy(
    outcome: Result<()>,
    slug: &str,
    store: &mut dyn KeyValueStore,
    now: DateTime<Utc>,
) -> Feedback {
    match outcome {
        Ok(()) => {
            if let Err(err) = usage::record(store, slug, UsageEvent::Copy, now) {
                warn!("could not record copy of {slug}: {err}");
            }
            Feedback::success(COPIED_MESSAGE)
        }
        Err(err) => {
            error!("failed to copy {slug}: {err}");
            Feedback::error(COPY_FAILED_MESSAGE)
        }
    }
}

/// Count a successful run; a failed one reports the thrown message.
pub fn settle_run(
    outcome: Result<()>,
    slug: &str,
    store: &mut dyn KeyValueStore,
    now: DateTime<Utc>,
) -> Feedback {
    match outcome {
        Ok(()) => {
            if let Err(err) = usage::record(store, slug, UsageEvent::Run, now) {
                warn!("could not record run of {slug}: {err}");
            }
            Feedback::success("Bookmarklet executed")
        }
        Err(err) => Feedback::error(format!("Error: {err}")),
    }
}

/// Copy the entry's payload, update its counter and show the toast.
/// Returns whether the copy went through.
pub async fn copy_entry(ctx: AppContext, entry: &SnippetEntry) -> bool {
    let payload = entry.payload();
    let outcome = clipboard::copy_to_clipboard(&payload).await;
    let mut store = ctx.store;
    let feedback = settle_copy(outcome, &entry.slug, &mut **store.write(), Utc::now());
    let copied = feedback.is_success();
    ctx.toast(feedback.message, feedback.kind);
    copied
}

/// Run the entry in this page via [`exec::run_trusted`].
pub fn run_entry(ctx: AppContext, entry: &SnippetEntry) -> bool {
    let outcome = exec::run_trusted(&entry.code);
    let mut store = ctx.store;
    let feedback = settle_run(outcome, &entry.slug, &mut **store.write(), Utc::now());
    let ran = feedback.is_success();
    ctx.toast(feedback.message, feedback.kind);
    ran
}
