use dioxus::prelude::*;
use document_core::projector::locate_document;
use document_core::{DocumentSlot, Projection};
use shared_types::AgentState;

/// Diagnostic panel with the projected agent state and the raw snapshot.
#[component]
pub fn StateDisplay(state: AgentState, projection: Projection) -> Element {
    let messages = state.messages().len();
    let search = state
        .search_results()
        .filter(|search| !search.query.is_empty())
        .map(|search| format!("{} ({} results)", search.query, search.results.len()));
    let unreadable = match locate_document(&state) {
        DocumentSlot::Malformed(reason) => Some(reason.to_string()),
        DocumentSlot::Representation(_) if !projection.has_document() => {
            Some("representation not recognized".to_string())
        }
        _ => None,
    };
    let route = state.route().map(str::to_string);
    let dump = state.pretty();

    rsx! {
        aside { class: "state-panel",
            h3 { "Agent State" }
            if let Some(node) = projection.active_node {
                p { class: "state-panel-line state-panel-line--node", "Node: {node}" }
            }
            if let Some(status) = projection.status {
                p { class: "state-panel-line state-panel-line--status", "Status: {status}" }
            }
            if projection.editing {
                p { class: "state-panel-line state-panel-line--editing", "Currently Editing" }
            }
            if let Some(reason) = unreadable {
                p { class: "state-panel-line", "Document unreadable: {reason}" }
            }
            p { class: "state-panel-line", "Messages: {messages}" }
            if let Some(route) = route {
                p { class: "state-panel-line", "Route: {route}" }
            }
            if let Some(search) = search {
                p { class: "state-panel-line", "Search: {search}" }
            }
            pre { "{dump}" }
        }
    }
}
