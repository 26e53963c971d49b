//! Document core
//!
//! Target-independent logic behind the document UI: recovering a document
//! from the agent's textual representation, projecting agent snapshots, the
//! editor state machine with its keyboard shortcuts, failure containment
//! for render subtrees, and the markdown pipeline.

pub mod boundary;
pub mod editor;
pub mod keymap;
pub mod markdown;
pub mod projector;
pub mod representation;

pub use boundary::{CapturedFailure, RenderBoundary};
pub use editor::{
    DocumentEditor, Draft, EditorCommand, EditorEffect, EditorPhase, Notice, NoticeLevel,
    SaveError, Surface,
};
pub use keymap::{command_for, KeyChord, SHORTCUT_HELP};
pub use markdown::{render_markdown, MarkdownConfig, MarkdownError, ParsedMarkdown};
pub use projector::{project, DocumentSlot, Projection};
pub use representation::{parse, RepresentationError};
pub use shared_types::{AgentState, Document};
