//! PDF Chat - View Model

use contracts::domain::a001_pdf_chat::controller::SessionStore;
use contracts::domain::a001_pdf_chat::session::ChatSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PdfChatVm {
    pub session: RwSignal<ChatSession>,
}

impl PdfChatVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
        }
    }
}

impl SessionStore for PdfChatVm {
    fn update_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        self.session.try_update(f)
    }
}

/// Нажатие клавиши в поле вопроса
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Enter that confirms an IME candidate
    pub composing: bool,
}

impl KeyPress {
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            shift: ev.shift_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
            composing: ev.is_composing(),
        }
    }

    /// Plain Enter sends the question; with any modifier held it does not.
    pub fn is_submit(&self) -> bool {
        self.key == "Enter"
            && !(self.shift || self.ctrl || self.alt || self.meta || self.composing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter() -> KeyPress {
        KeyPress {
            key: "Enter".to_string(),
            ..KeyPress::default()
        }
    }

    #[test]
    fn test_plain_enter_submits() {
        assert!(enter().is_submit());
    }

    #[test]
    fn test_modified_enter_does_not_submit() {
        assert!(!KeyPress { shift: true, ..enter() }.is_submit());
        assert!(!KeyPress { ctrl: true, ..enter() }.is_submit());
        assert!(!KeyPress { alt: true, ..enter() }.is_submit());
        assert!(!KeyPress { meta: true, ..enter() }.is_submit());
    }

    #[test]
    fn test_ime_enter_does_not_submit() {
        assert!(!KeyPress { composing: true, ..enter() }.is_submit());
    }

    #[test]
    fn test_other_keys_do_not_submit() {
        for key in ["a", "Tab", "NumpadEnter"] {
            let press = KeyPress {
                key: key.to_string(),
                ..KeyPress::default()
            };
            assert!(!press.is_submit());
        }
    }
}
