//! Last-updated footer.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// Format a moment the way HTTP dates read, e.g. "Mon, 19 Oct 2026 08:00:00 GMT"
fn format_updated(moment: DateTime<Utc>) -> String {
    moment.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// "Last updated" line, stamped once when the page mounts
#[component]
pub fn Timestamp() -> Element {
    let stamp = use_hook(|| format_updated(Utc::now()));

    rsx! {
        div { class: "timestamp", "Last updated: {stamp}" }
    }
}
