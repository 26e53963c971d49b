//! Document editor state machine
//!
//! `Viewing` ⇄ `Editing`, with a preview flag and a transient saving
//! sub-state inside `Editing`. Every user intent arrives as an
//! [`EditorCommand`] through [`DocumentEditor::dispatch`]; the returned
//! [`EditorEffect`] tells the host what to do next (show a notice, or run
//! the persistence callback and report back through
//! [`DocumentEditor::finish_save`]).
//!
//! While a save is in flight the editor refuses anything that would change
//! the candidate being persisted or leave `Editing`: cancel, toggling edit
//! mode, field edits and repeated saves are ignored. Preview may still be
//! toggled.

use shared_types::Document;

pub const SAVE_SUCCEEDED: &str = "Changes saved successfully";
pub const TITLE_REQUIRED: &str = "Title cannot be empty";
pub const SAVE_FAILED: &str = "Failed to save changes";

/// Failure reported by the persistence callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("save rejected: {0}")]
    Rejected(String),

    #[error("save handler failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-visible, transient feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Coarse state, used for keyboard dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Viewing,
    Editing,
    Saving,
}

impl EditorPhase {
    /// `Saving` is a sub-state of `Editing`.
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing | Self::Saving)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    BeginEdit,
    Cancel,
    TogglePreview,
    ToggleEditMode,
    Save,
    SetTitle(String),
    SetContent(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect {
    None,
    Notify(Notice),
    /// Run the persistence callback with this document, then call
    /// [`DocumentEditor::finish_save`].
    Persist(Document),
}

/// Uncommitted edits; only exists while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub preview: bool,
    pub saving: bool,
}

impl Draft {
    fn seeded_from(document: &Document) -> Self {
        Self {
            title: document.title.clone(),
            content: document.content.clone(),
            preview: false,
            saving: false,
        }
    }

    fn candidate(&self) -> Document {
        Document::new(self.title.clone(), self.content.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Viewing,
    Editing(Draft),
}

/// What the host should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface<'a> {
    /// Committed document through the markdown pipeline
    Rendered(&'a Document),
    /// Raw title and content inputs
    Source(&'a Draft),
    /// Draft content through the markdown pipeline
    Preview(&'a Draft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEditor {
    committed: Document,
    mode: Mode,
}

impl DocumentEditor {
    pub fn new(committed: Document) -> Self {
        Self {
            committed,
            mode: Mode::Viewing,
        }
    }

    pub fn committed(&self) -> &Document {
        &self.committed
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            Mode::Viewing => None,
            Mode::Editing(draft) => Some(draft),
        }
    }

    pub fn phase(&self) -> EditorPhase {
        match &self.mode {
            Mode::Viewing => EditorPhase::Viewing,
            Mode::Editing(draft) if draft.saving => EditorPhase::Saving,
            Mode::Editing(_) => EditorPhase::Editing,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.phase().is_editing()
    }

    pub fn is_saving(&self) -> bool {
        self.phase() == EditorPhase::Saving
    }

    pub fn preview_enabled(&self) -> bool {
        self.draft().is_some_and(|draft| draft.preview)
    }

    /// Whether the save affordance should be enabled.
    pub fn can_save(&self) -> bool {
        self.draft()
            .is_some_and(|draft| !draft.saving && draft.candidate().has_title())
    }

    pub fn surface(&self) -> Surface<'_> {
        match &self.mode {
            Mode::Viewing => Surface::Rendered(&self.committed),
            Mode::Editing(draft) if draft.preview => Surface::Preview(draft),
            Mode::Editing(draft) => Surface::Source(draft),
        }
    }

    /// Accept the document from a newer agent snapshot. An open draft is
    /// left alone; cancelling will revert to the new document.
    pub fn rebase(&mut self, document: Document) {
        if self.committed == document {
            return;
        }
        tracing::debug!(phase = ?self.phase(), "Committed document replaced by agent snapshot");
        self.committed = document;
    }

    pub fn dispatch(&mut self, command: EditorCommand) -> EditorEffect {
        let phase = self.phase();
        match (phase, command) {
            (EditorPhase::Viewing, EditorCommand::BeginEdit | EditorCommand::ToggleEditMode) => {
                self.mode = Mode::Editing(Draft::seeded_from(&self.committed));
                EditorEffect::None
            }
            (EditorPhase::Editing, EditorCommand::Cancel | EditorCommand::ToggleEditMode) => {
                self.mode = Mode::Viewing;
                EditorEffect::None
            }
            (EditorPhase::Editing | EditorPhase::Saving, EditorCommand::TogglePreview) => {
                if let Mode::Editing(draft) = &mut self.mode {
                    draft.preview = !draft.preview;
                }
                EditorEffect::None
            }
            (EditorPhase::Editing, EditorCommand::SetTitle(title)) => {
                if let Mode::Editing(draft) = &mut self.mode {
                    draft.title = title;
                }
                EditorEffect::None
            }
            (EditorPhase::Editing, EditorCommand::SetContent(content)) => {
                if let Mode::Editing(draft) = &mut self.mode {
                    draft.content = content;
                }
                EditorEffect::None
            }
            (EditorPhase::Editing, EditorCommand::Save) => self.begin_save(),
            (phase, command) => {
                tracing::trace!(?phase, ?command, "Editor command inert in current phase");
                EditorEffect::None
            }
        }
    }

    fn begin_save(&mut self) -> EditorEffect {
        let Mode::Editing(draft) = &mut self.mode else {
            return EditorEffect::None;
        };

        let candidate = draft.candidate();
        if !candidate.has_title() {
            return EditorEffect::Notify(Notice::error(TITLE_REQUIRED));
        }

        draft.saving = true;
        EditorEffect::Persist(candidate)
    }

    /// Resolve the saving sub-state with the persistence outcome. Returns
    /// `None` if no save was in flight.
    pub fn finish_save(&mut self, outcome: Result<(), SaveError>) -> Option<Notice> {
        let Mode::Editing(draft) = &mut self.mode else {
            tracing::warn!("Save outcome arrived while not editing");
            return None;
        };
        if !draft.saving {
            tracing::warn!("Save outcome arrived with no save in flight");
            return None;
        }

        match outcome {
            Ok(()) => {
                self.committed = draft.candidate();
                self.mode = Mode::Viewing;
                Some(Notice::success(SAVE_SUCCEEDED))
            }
            Err(err) => {
                tracing::error!(error = %err, "Save error");
                draft.saving = false;
                Some(Notice::error(SAVE_FAILED))
            }
        }
    }
}
