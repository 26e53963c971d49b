//! Keyboard shortcuts for the document editor.
//!
//! The host forwards every global key press here; a `Some` command means the
//! shortcut fired and the browser default for that key must be suppressed.

use crate::editor::{EditorCommand, EditorPhase};

/// Shortcut labels shown under the editing surface.
pub const SHORTCUT_HELP: [(&str, &str); 3] = [
    ("Save", "Cmd/Ctrl + S"),
    ("Cancel", "Esc"),
    ("Toggle Preview", "Cmd/Ctrl + P"),
];

/// A key press with its modifier state, decoupled from any DOM type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key` value, e.g. `"s"` or `"Escape"`
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }

    fn is_letter(&self, letter: char) -> bool {
        let mut chars = self.key.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&letter))
    }
}

pub fn command_for(chord: &KeyChord, phase: EditorPhase) -> Option<EditorCommand> {
    let editing = phase.is_editing();

    if chord.key == "Escape" {
        return editing.then_some(EditorCommand::Cancel);
    }
    if !chord.primary() {
        return None;
    }

    if chord.is_letter('e') {
        Some(EditorCommand::ToggleEditMode)
    } else if chord.is_letter('s') && editing {
        Some(EditorCommand::Save)
    } else if chord.is_letter('p') && editing {
        Some(EditorCommand::TogglePreview)
    } else {
        None
    }
}
