use iced::event::{self, Status};
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::text_editor::{Binding, KeyPress};
use iced::{Event, Subscription};

use crate::global_constants::{HOTKEY_COPY_IMAGE, LOG_TAG_KEYBOARD};

#[derive(Debug, Clone, PartialEq)]
pub enum CopyChordEvent {
    CopyImagePressed,
}

pub fn is_copy_chord(key: &Key, modifiers: Modifiers) -> bool {
    match key.as_ref() {
        Key::Character(character) => modifiers.command() && character.eq_ignore_ascii_case("c"),
        _ => false,
    }
}

pub struct CopyChordListener;

impl CopyChordListener {
    /// Window-wide listener for the chord. Key presses a widget already
    /// captured (the focused editor) are skipped, so one press copies once.
    pub fn create_subscription() -> Subscription<CopyChordEvent> {
        event::listen_with(|event, status, _window| match (event, status) {
            (Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }), Status::Ignored)
                if is_copy_chord(&key, modifiers) =>
            {
                log::info!("{} {} detected - copying image", LOG_TAG_KEYBOARD, HOTKEY_COPY_IMAGE);
                Some(CopyChordEvent::CopyImagePressed)
            }
            _ => None,
        })
    }

    /// Key binding for the focused editor: the chord publishes `on_copy`
    /// in place of the editor's own text copy; every other key keeps its
    /// default binding.
    pub fn editor_key_binding<Message>(
        on_copy: Message,
    ) -> impl Fn(KeyPress) -> Option<Binding<Message>>
    where
        Message: Clone,
    {
        move |key_press| {
            Self::intercept_copy(&key_press.key, key_press.modifiers, &on_copy)
                .or_else(|| Binding::from_key_press(key_press))
        }
    }

    /// `Some` when the editor must publish `on_copy`; `None` leaves the key
    /// to the editor's default binding.
    fn intercept_copy<Message>(
        key: &Key,
        modifiers: Modifiers,
        on_copy: &Message,
    ) -> Option<Binding<Message>>
    where
        Message: Clone,
    {
        if !is_copy_chord(key, modifiers) {
            return None;
        }

        log::info!(
            "{} {} intercepted in editor - copying image",
            LOG_TAG_KEYBOARD,
            HOTKEY_COPY_IMAGE
        );
        Some(Binding::Custom(on_copy.clone()))
    }
}
