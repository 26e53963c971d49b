use dioxus::prelude::*;
use document_core::{project, EditorPhase};
use shared_types::{AgentState, Document};

use super::boundary::FailureBoundary;
use super::document_editor::{DocumentEditorView, SaveFuture};
use super::notices::NoticeStack;
use super::state_display::StateDisplay;
use super::styles::STUDIO_STYLES;
use crate::config::ui_config;

/// Page body: the document editor for the current agent snapshot, the agent
/// state panel and the notice stack.
#[component]
pub fn DocumentStudio(state: AgentState, on_save: Option<Callback<Document, SaveFuture>>) -> Element {
    let mut editing = use_signal(|| false);
    let projection = project(&state).with_editing(editing());
    let document = projection.document.clone();

    rsx! {
        style { {STUDIO_STYLES} }
        FailureBoundary { name: "studio".to_string(),
            main { class: "studio-main",
                if let Some(document) = document {
                    DocumentEditorView {
                        document,
                        on_save,
                        on_phase_change: move |phase: EditorPhase| editing.set(phase.is_editing()),
                    }
                } else {
                    p { class: "studio-empty", "No document yet. Ask the agent to write one." }
                }
            }
            if ui_config().show_state_panel {
                StateDisplay { state: state.clone(), projection }
            }
        }
        NoticeStack {}
    }
}
