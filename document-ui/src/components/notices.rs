use dioxus::prelude::*;
use document_core::NoticeLevel;

use crate::state::{dismiss_notice, NOTICES};

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeStack() -> Element {
    let entries = NOTICES.read().entries().to_vec();
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notice-stack", role: "status",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: notice_class(entry.notice.level),
                    title: entry.raised_at.format("%H:%M:%S").to_string(),
                    span { "{entry.notice.message}" }
                    button {
                        class: "notice-dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| dismiss_notice(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
