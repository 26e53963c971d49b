pub mod boundary;
pub mod document_editor;
pub mod notices;
pub mod state_display;
pub mod studio;
pub mod styles;

pub use boundary::{BoundaryHandle, FailureBoundary};
pub use document_editor::{DocumentEditorView, SaveFuture};
pub use notices::NoticeStack;
pub use state_display::StateDisplay;
pub use studio::DocumentStudio;
