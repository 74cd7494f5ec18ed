//! Text utilities - pure string transforms used while rendering cards
//!
//! - `escape::escape_html()` → safe text for `dangerous_inner_html`
//! - `minify_for_href()` → the payload that gets copied or dragged
//! - `syntax_highlight()` → decorated preview markup, display only

pub mod escape;
pub mod highlight;
pub mod href;

pub use highlight::syntax_highlight;
pub use href::{minify_for_href, strip_scheme};
