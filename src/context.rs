//! AppContext - the explicit application state handed to every handler
//!
//! Built once by the root component on page-ready and provided through the
//! Dioxus context. It lives as long as the page; there is no teardown.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::catalog::SnippetCatalog;
use crate::modal::ModalSlot;
use crate::storage::{self, KeyValueStore};
use crate::theme::{self, Theme};
use crate::toast::{self, ToastKind, ToastSlot};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub catalog: Signal<SnippetCatalog>,
    pub store: Signal<Box<dyn KeyValueStore>>,
    pub theme: Signal<Theme>,
    pub toasts: Signal<ToastSlot>,
    pub modal: Signal<ModalSlot>,
}

impl AppContext {
    /// Open storage, restore the theme and load the catalog.
    pub fn init(catalog: SnippetCatalog) -> Self {
        let mut store = storage::open_store();
        let theme = theme::restore(store.as_mut());
        Self {
            catalog: Signal::new(catalog),
            store: Signal::new(store),
            theme: Signal::new(theme),
            toasts: Signal::new(ToastSlot::new()),
            modal: Signal::new(ModalSlot::new()),
        }
    }

    pub fn toast(&self, message: impl Into<String>, kind: ToastKind) {
        toast::present(self.toasts, message, kind);
    }

    /// Persist the next theme first, then apply it to the page.
    pub fn cycle_theme(mut self) {
        let current = *self.theme.peek();
        let next = theme::cycle(&mut **self.store.write(), current);
        self.theme.set(next);
        if let Err(err) = theme::apply(next, true) {
            warn!("{err}; theme was saved but not applied");
        }
    }
}

/// The context provided by `App`
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
