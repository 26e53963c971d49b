//! Document editor component
//!
//! Thin host around [`document_core::DocumentEditor`]: button clicks, input
//! events and global shortcuts all become [`EditorCommand`]s fed to one
//! dispatch callback, and the returned effect decides whether to raise a
//! notice or run the save callback.
//!
//! Each markdown surface sits in its own failure boundary, so a body that
//! fails to render never unmounts the editor or its draft.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use document_core::markdown::word_count;
use document_core::{
    DocumentEditor, Draft, EditorCommand, EditorEffect, EditorPhase, SaveError, Surface,
    SHORTCUT_HELP,
};
use futures::future::LocalBoxFuture;
use futures::StreamExt;
use shared_types::Document;

use super::boundary::FailureBoundary;
use crate::interop::KeyboardSubscription;
use crate::state::raise_notice;
use crate::viewers::MarkdownViewer;

/// Future returned by a save callback
pub type SaveFuture = LocalBoxFuture<'static, Result<(), SaveError>>;

#[component]
pub fn DocumentEditorView(
    document: Document,
    on_save: Option<Callback<Document, SaveFuture>>,
    on_phase_change: Option<Callback<EditorPhase>>,
) -> Element {
    let mut editor = use_signal(|| DocumentEditor::new(document.clone()));
    let phase_cell = use_hook(|| Rc::new(Cell::new(EditorPhase::Viewing)));

    // Newer snapshots replace the committed document, never the draft.
    use_effect(use_reactive((&document,), move |(document,)| {
        editor.write().rebase(document);
    }));

    {
        let phase_cell = phase_cell.clone();
        use_effect(move || {
            let phase = editor.read().phase();
            if phase_cell.replace(phase) != phase {
                dioxus_logger::tracing::debug!("Editor phase: {:?}", phase);
            }
            if let Some(on_phase_change) = on_phase_change {
                on_phase_change.call(phase);
            }
        });
    }

    let dispatch = use_callback(move |command: EditorCommand| {
        let effect = editor.write().dispatch(command);
        match effect {
            EditorEffect::None => {}
            EditorEffect::Notify(notice) => raise_notice(notice),
            EditorEffect::Persist(candidate) => {
                let pending = on_save.map(|on_save| on_save.call(candidate));
                spawn(async move {
                    let outcome = match pending {
                        Some(save) => save.await,
                        None => Ok(()),
                    };
                    let notice = editor.write().finish_save(outcome);
                    if let Some(notice) = notice {
                        raise_notice(notice);
                    }
                });
            }
        }
    });

    let keyboard = use_hook(|| {
        let (commands, mut received) = futures::channel::mpsc::unbounded::<EditorCommand>();
        spawn(async move {
            while let Some(command) = received.next().await {
                dispatch.call(command);
            }
        });
        match KeyboardSubscription::attach(phase_cell.clone(), commands) {
            Ok(subscription) => Some(Rc::new(subscription)),
            Err(e) => {
                dioxus_logger::tracing::warn!("Keyboard shortcuts unavailable: {}", e);
                None
            }
        }
    });

    {
        let keyboard = keyboard.clone();
        use_drop(move || {
            if let Some(subscription) = keyboard {
                subscription.detach();
            }
        });
    }

    let snapshot = editor.read().clone();
    let saving = snapshot.is_saving();
    let can_save = snapshot.can_save();

    match snapshot.surface() {
        Surface::Rendered(committed) => render_viewing(committed, dispatch),
        Surface::Source(draft) | Surface::Preview(draft) => {
            render_editing(draft, saving, can_save, dispatch)
        }
    }
}

fn render_viewing(committed: &Document, dispatch: Callback<EditorCommand>) -> Element {
    rsx! {
        article { class: "doc-view",
            div { class: "doc-view-header",
                h1 { class: "doc-view-title", "{committed.title}" }
                button {
                    class: "doc-btn",
                    onclick: move |_| dispatch.call(EditorCommand::BeginEdit),
                    "Edit"
                }
            }
            FailureBoundary { name: "document".to_string(),
                MarkdownViewer { markdown: committed.content.clone(), scope: "document".to_string() }
            }
        }
    }
}

fn render_editing(
    draft: &Draft,
    saving: bool,
    can_save: bool,
    dispatch: Callback<EditorCommand>,
) -> Element {
    let words = word_count(&draft.content);
    let preview_label = if draft.preview { "Edit Mode" } else { "Preview" };

    rsx! {
        div { class: "doc-editor",
            div { class: "doc-editor-toolbar",
                input {
                    class: "doc-title-input",
                    r#type: "text",
                    value: "{draft.title}",
                    placeholder: "Enter title...",
                    readonly: saving,
                    oninput: move |e: FormEvent| dispatch.call(EditorCommand::SetTitle(e.value())),
                }
                div { class: "doc-editor-actions",
                    button {
                        class: "doc-btn",
                        onclick: move |_| dispatch.call(EditorCommand::TogglePreview),
                        "{preview_label}"
                    }
                    button {
                        class: "doc-btn doc-btn--primary",
                        disabled: !can_save,
                        onclick: move |_| dispatch.call(EditorCommand::Save),
                        if saving {
                            span { class: "doc-spinner" }
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                    button {
                        class: "doc-btn",
                        onclick: move |_| dispatch.call(EditorCommand::Cancel),
                        "Cancel"
                    }
                }
            }

            if draft.preview {
                div { class: "doc-preview",
                    FailureBoundary { name: "preview".to_string(),
                        MarkdownViewer { markdown: draft.content.clone(), scope: "preview".to_string() }
                    }
                }
            } else {
                textarea {
                    class: "doc-content-input",
                    value: "{draft.content}",
                    placeholder: "Enter content in markdown...",
                    readonly: saving,
                    oninput: move |e: FormEvent| dispatch.call(EditorCommand::SetContent(e.value())),
                }
            }

            div { class: "doc-editor-footer",
                div { class: "doc-shortcuts",
                    p { "Keyboard shortcuts:" }
                    ul {
                        for (label, keys) in SHORTCUT_HELP {
                            li { "{label}: {keys}" }
                        }
                    }
                }
                span { "{words} words" }
            }
        }
    }
}
