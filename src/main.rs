mod actions;
mod card;
mod catalog;
mod clipboard;
mod context;
mod drag;
mod error;
mod exec;
mod modal;
mod storage;
mod styles;
mod text;
mod theme;
mod toast;
mod usage;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use card::SnippetCard;
use catalog::SnippetCatalog;
use context::AppContext;
use drag::DRAG_HELPER_ID;
use modal::DetailModal;
use toast::ToastHost;

#[allow(non_snake_case)]
fn App() -> Element {
    let ctx = use_context_provider(|| AppContext::init(SnippetCatalog::with_builtins()));

    // Restore once on page-ready; later changes go through cycle_theme
    use_hook(move || {
        let theme = *ctx.theme.peek();
        info!("gallery starting with theme {theme}");
        if let Err(err) = theme::apply(theme, false) {
            warn!("{err}; theme switching is disabled");
        }
    });

    let theme = (ctx.theme)();
    let catalog = ctx.catalog.read().clone();
    let styles = styles::STYLESHEET;
    let count = catalog.len();

    rsx! {
        style { "{styles}" }

        header {
            class: "app-header",
            div {
                h1 { "Bookmarklets" }
                p { "{count} snippets \u{00b7} click or right-click to copy, drag the handle to your bookmarks bar" }
            }
            button {
                id: "theme-switcher",
                class: "theme-switcher",
                "data-theme": "{theme}",
                title: "Switch theme",
                onclick: move |_| ctx.cycle_theme(),
                "{theme}"
            }
        }

        // Full render: every entry, keyed by slug
        main {
            id: "app-container",
            class: "card-grid",
            for entry in catalog.iter() {
                SnippetCard { key: "{entry.slug}", entry: entry.clone() }
            }
        }

        DetailModal {}
        ToastHost { slot: ctx.toasts }

        div {
            id: "{DRAG_HELPER_ID}",
            class: "drag-helper",
            style: "display: none;",
            "\u{1f516}"
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
