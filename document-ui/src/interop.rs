use std::cell::Cell;
use std::rc::Rc;

use document_core::{command_for, EditorCommand, EditorPhase, KeyChord};
use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

pub fn chord_from_event(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
    }
}

/// Window-level `keydown` listener for the editor shortcuts.
///
/// Matched shortcuts have their browser default suppressed and are sent on
/// `commands`. The listener is removed on [`KeyboardSubscription::detach`] or
/// drop, whichever comes first.
pub struct KeyboardSubscription {
    window: web_sys::Window,
    listener: Closure<dyn FnMut(KeyboardEvent)>,
    attached: Cell<bool>,
}

impl KeyboardSubscription {
    /// `phase` is read on every key press, so the owner must keep it current.
    pub fn attach(
        phase: Rc<Cell<EditorPhase>>,
        commands: UnboundedSender<EditorCommand>,
    ) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no global `window` exists".to_string())?;

        let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let chord = chord_from_event(&event);
            let Some(command) = command_for(&chord, phase.get()) else {
                return;
            };
            event.prevent_default();
            if commands.unbounded_send(command).is_err() {
                dioxus_logger::tracing::warn!("Shortcut dropped: editor is gone");
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        window
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .map_err(|e| format!("failed to add keydown listener: {e:?}"))?;

        Ok(Self {
            window,
            listener,
            attached: Cell::new(true),
        })
    }

    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("keydown", self.listener.as_ref().unchecked_ref())
        {
            dioxus_logger::tracing::warn!("Failed to remove keydown listener: {:?}", e);
        }
    }
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}
