//! End-to-end editor scenarios
//!
//! Drives snapshot → projection → editor → persistence callback the way the
//! UI host does, with an in-test persistence callback.
//!
//! Run with: cargo test -p document-core --test editor_scenarios_test

use std::cell::RefCell;
use std::future::Future;

use document_core::editor::{SAVE_FAILED, SAVE_SUCCEEDED, TITLE_REQUIRED};
use document_core::{
    project, render_markdown, AgentState, Document, DocumentEditor, EditorCommand, EditorEffect,
    EditorPhase, MarkdownConfig, Notice, RenderBoundary, SaveError, Surface,
};
use futures::executor::block_on;
use serde_json::json;

// ====================================================================================
// Host harness
// ====================================================================================

/// Records every notice and every persistence call.
#[derive(Default)]
struct Host {
    notices: RefCell<Vec<Notice>>,
    persisted: RefCell<Vec<Document>>,
}

impl Host {
    /// Dispatch one command and, for a save, await the callback and feed the
    /// outcome back, mirroring the UI's spawn-and-resolve flow.
    async fn dispatch<F, Fut>(&self, editor: &mut DocumentEditor, command: EditorCommand, save: F)
    where
        F: FnOnce(Document) -> Fut,
        Fut: Future<Output = Result<(), SaveError>>,
    {
        match editor.dispatch(command) {
            EditorEffect::None => {}
            EditorEffect::Notify(notice) => self.notices.borrow_mut().push(notice),
            EditorEffect::Persist(document) => {
                self.persisted.borrow_mut().push(document.clone());
                let outcome = save(document).await;
                if let Some(notice) = editor.finish_save(outcome) {
                    self.notices.borrow_mut().push(notice);
                }
            }
        }
    }
}

async fn accept(_document: Document) -> Result<(), SaveError> {
    Ok(())
}

async fn reject(_document: Document) -> Result<(), SaveError> {
    Err(SaveError::Rejected("agent unavailable".to_string()))
}

fn snapshot(repr: &str) -> AgentState {
    AgentState::new(json!({
        "messages": [{"role": "user", "content": "write about rust", "id": "1"}],
        "blog_post": {"lc": 1, "type": "constructor", "id": ["BlogPost"], "repr": repr},
        "route": null,
        "search_results": null
    }))
}

fn editor_for(repr: &str) -> DocumentEditor {
    let document = project(&snapshot(repr)).document.expect("document should project");
    DocumentEditor::new(document)
}

// ====================================================================================
// Scenarios
// ====================================================================================

#[test]
fn scenario_a_snapshot_projects_to_document() {
    let projection = project(&snapshot(r#"BlogPost(title='Intro', content="Line1\nLine2")"#));
    assert_eq!(
        projection.document,
        Some(Document::new("Intro", "Line1\nLine2"))
    );
}

#[test]
fn scenario_b_garbage_projects_to_nothing() {
    let projection = project(&snapshot("garbage"));
    assert_eq!(projection.document, None);
    assert!(!projection.has_document());
}

#[test]
fn scenario_c_successful_save_commits_draft() {
    let host = Host::default();
    let mut editor = editor_for(r#"BlogPost(title='Intro', content="Body")"#);

    block_on(async {
        host.dispatch(&mut editor, EditorCommand::BeginEdit, accept).await;
        host.dispatch(&mut editor, EditorCommand::SetTitle("New Title".into()), accept)
            .await;
        host.dispatch(&mut editor, EditorCommand::Save, accept).await;
    });

    assert_eq!(editor.committed(), &Document::new("New Title", "Body"));
    assert_eq!(editor.phase(), EditorPhase::Viewing);
    assert_eq!(*host.notices.borrow(), vec![Notice::success(SAVE_SUCCEEDED)]);
    assert_eq!(host.persisted.borrow().len(), 1);
}

#[test]
fn scenario_d_rejected_save_keeps_draft() {
    let host = Host::default();
    let mut editor = editor_for(r#"BlogPost(title='Intro', content="Body")"#);

    block_on(async {
        host.dispatch(&mut editor, EditorCommand::BeginEdit, accept).await;
        host.dispatch(&mut editor, EditorCommand::SetTitle("New Title".into()), accept)
            .await;
        host.dispatch(&mut editor, EditorCommand::Save, reject).await;
    });

    assert_eq!(editor.committed(), &Document::new("Intro", "Body"));
    assert_eq!(editor.phase(), EditorPhase::Editing);
    let draft = editor.draft().expect("still editing");
    assert_eq!(draft.title, "New Title");
    assert_eq!(draft.content, "Body");
    assert_eq!(*host.notices.borrow(), vec![Notice::error(SAVE_FAILED)]);
}

#[test]
fn rejected_save_can_be_retried() {
    let host = Host::default();
    let mut editor = editor_for(r#"BlogPost(title='Intro', content="Body")"#);

    block_on(async {
        host.dispatch(&mut editor, EditorCommand::BeginEdit, accept).await;
        host.dispatch(&mut editor, EditorCommand::Save, reject).await;
        host.dispatch(&mut editor, EditorCommand::Save, accept).await;
    });

    assert_eq!(editor.phase(), EditorPhase::Viewing);
    assert_eq!(
        *host.notices.borrow(),
        vec![Notice::error(SAVE_FAILED), Notice::success(SAVE_SUCCEEDED)]
    );
}

// ====================================================================================
// Properties
// ====================================================================================

#[test]
fn committed_save_round_trips_into_next_draft() {
    let host = Host::default();
    let mut editor = DocumentEditor::new(Document::new("Old", "old"));

    block_on(async {
        host.dispatch(&mut editor, EditorCommand::BeginEdit, accept).await;
        host.dispatch(&mut editor, EditorCommand::SetTitle("Hello".into()), accept)
            .await;
        host.dispatch(
            &mut editor,
            EditorCommand::SetContent("Body **bold**".into()),
            accept,
        )
        .await;
        host.dispatch(&mut editor, EditorCommand::Save, accept).await;
        host.dispatch(&mut editor, EditorCommand::BeginEdit, accept).await;
    });

    let draft = editor.draft().expect("editing again");
    assert_eq!(draft.title, "Hello");
    assert_eq!(draft.content, "Body **bold**");
}

#[test]
fn preview_toggle_is_idempotent_in_pairs() {
    let mut editor = DocumentEditor::new(Document::new("T", "C"));
    editor.dispatch(EditorCommand::BeginEdit);
    editor.dispatch(EditorCommand::SetContent("draft body".into()));
    let before = editor.draft().cloned().expect("editing");

    editor.dispatch(EditorCommand::TogglePreview);
    editor.dispatch(EditorCommand::TogglePreview);

    assert_eq!(editor.draft(), Some(&before));
}

#[test]
fn whitespace_title_never_reaches_persistence() {
    let host = Host::default();
    let mut editor = DocumentEditor::new(Document::new("T", "C"));

    block_on(async {
        host.dispatch(&mut editor, EditorCommand::BeginEdit, accept).await;
        host.dispatch(&mut editor, EditorCommand::SetTitle("   ".into()), accept)
            .await;
        host.dispatch(&mut editor, EditorCommand::Save, accept).await;
    });

    assert!(host.persisted.borrow().is_empty());
    assert_eq!(editor.phase(), EditorPhase::Editing);
    assert_eq!(*host.notices.borrow(), vec![Notice::error(TITLE_REQUIRED)]);
}

#[test]
fn cancel_during_save_is_ignored() {
    let mut editor = DocumentEditor::new(Document::new("T", "C"));
    editor.dispatch(EditorCommand::BeginEdit);
    editor.dispatch(EditorCommand::SetTitle("Pending".into()));
    let effect = editor.dispatch(EditorCommand::Save);
    assert!(matches!(effect, EditorEffect::Persist(_)));

    assert_eq!(editor.dispatch(EditorCommand::Cancel), EditorEffect::None);
    assert_eq!(editor.phase(), EditorPhase::Saving);

    editor.finish_save(Ok(()));
    assert_eq!(editor.committed().title, "Pending");
}

#[test]
fn newer_snapshot_rebases_viewer() {
    let mut editor = editor_for(r#"BlogPost(title='v1', content="one")"#);
    let next = project(&snapshot(r#"BlogPost(title='v2', content="two")"#));
    editor.rebase(next.document.expect("document"));
    assert_eq!(editor.committed(), &Document::new("v2", "two"));
}

#[test]
fn failed_preview_render_keeps_draft_and_editor() {
    let config = MarkdownConfig {
        max_input_bytes: 32,
        ..MarkdownConfig::secure()
    };
    let mut editor = DocumentEditor::new(Document::new("T", "C"));
    editor.dispatch(EditorCommand::BeginEdit);
    editor.dispatch(EditorCommand::SetTitle("Kept".into()));
    editor.dispatch(EditorCommand::SetContent("x".repeat(64)));
    editor.dispatch(EditorCommand::TogglePreview);

    // The preview surface owns its own boundary; the editor sits outside it.
    let mut preview = RenderBoundary::new("preview");
    let Surface::Preview(draft) = editor.surface() else {
        panic!("expected preview surface");
    };
    assert!(preview.guard("preview", || render_markdown(&draft.content, &config)).is_none());
    assert!(preview.is_contained());

    assert_eq!(editor.phase(), EditorPhase::Editing);
    assert!(editor.preview_enabled());
    let draft = editor.draft().expect("draft survives render failure");
    assert_eq!(draft.title, "Kept");
    assert_eq!(draft.content.len(), 64);

    // Back to source, shorten, preview again after retry.
    editor.dispatch(EditorCommand::TogglePreview);
    editor.dispatch(EditorCommand::SetContent("short **body**".into()));
    editor.dispatch(EditorCommand::TogglePreview);
    assert!(preview.retry());
    let Surface::Preview(draft) = editor.surface() else {
        panic!("expected preview surface");
    };
    let parsed = preview
        .guard("preview", || render_markdown(&draft.content, &config))
        .expect("shortened draft renders");
    assert!(parsed.html.contains("<strong>body</strong>"));
    assert!(editor.can_save());
}
