use dioxus::prelude::*;
use document_core::markdown::render_to_html;
use document_core::render_markdown;

use crate::components::boundary::BoundaryHandle;
use crate::config::ui_config;

/// Renders a markdown body through the core pipeline. A render failure is
/// reported to the enclosing [`FailureBoundary`](crate::components::FailureBoundary),
/// which replaces the subtree with its fallback. Outside any boundary the
/// escaped source is shown instead.
#[component]
pub fn MarkdownViewer(markdown: String, scope: String) -> Element {
    let boundary = try_use_context::<BoundaryHandle>();
    let config = &ui_config().markdown;

    let html = match &boundary {
        Some(boundary) => {
            let Some(parsed) = boundary.guard(&scope, || render_markdown(&markdown, config)) else {
                return rsx! {};
            };
            if parsed.has_unsafe_html {
                dioxus_logger::tracing::debug!("Neutralized unsafe markup in {}", scope);
            }
            parsed.html
        }
        None => render_to_html(&markdown, config),
    };

    rsx! {
        article {
            class: "markdown-content",
            dangerous_inner_html: "{html}"
        }
    }
}
