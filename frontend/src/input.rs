//! Default key bindings and the joystick forwarding seam.

use dotmatrix_core::input::{KeyTranslator, keys};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Build the default host-symbol to normalized-code translator.
///
/// Declaration order matters: the first binding for a symbol wins. Digits
/// and lowercase letters are not listed; the translator's ASCII fallback
/// already covers them.
pub fn default_translator() -> KeyTranslator {
    let bindings = [
        (Keycode::Up, keys::UP),
        (Keycode::Down, keys::DOWN),
        (Keycode::Left, keys::LEFT),
        (Keycode::Right, keys::RIGHT),
        (Keycode::Return, keys::ENTER),
        (Keycode::KpEnter, keys::ENTER),
        (Keycode::Escape, keys::ESCAPE),
        (Keycode::Space, keys::SPACE),
        (Keycode::Tab, keys::TAB),
        (Keycode::Backspace, keys::BACKSPACE),
        (Keycode::Insert, keys::INSERT),
        (Keycode::Delete, keys::DELETE),
        (Keycode::Home, keys::HOME),
        (Keycode::End, keys::END),
        (Keycode::PageUp, keys::PAGE_UP),
        (Keycode::PageDown, keys::PAGE_DOWN),
        (Keycode::Pause, keys::PAUSE),
        (Keycode::LShift, keys::SHIFT),
        (Keycode::RShift, keys::SHIFT),
        (Keycode::LCtrl, keys::CTRL),
        (Keycode::RCtrl, keys::CTRL),
        (Keycode::LAlt, keys::ALT),
        (Keycode::RAlt, keys::ALT),
        (Keycode::F1, keys::F1),
        (Keycode::F2, keys::F2),
        (Keycode::F3, keys::F3),
        (Keycode::F4, keys::F4),
        (Keycode::F5, keys::F5),
        (Keycode::F6, keys::F6),
        (Keycode::F7, keys::F7),
        (Keycode::F8, keys::F8),
        (Keycode::F9, keys::F9),
        (Keycode::F10, keys::F10),
        (Keycode::F11, keys::F11),
        (Keycode::F12, keys::F12),
    ];

    let pairs: Vec<(i32, u16)> = bindings
        .iter()
        .map(|&(keycode, code)| (keycode.into_i32(), code))
        .collect();
    KeyTranslator::from_bindings(&pairs)
}

/// Translate one host keycode through the shared machinery.
pub fn translate(translator: &KeyTranslator, keycode: Keycode) -> u16 {
    translator.translate(keycode.into_i32())
}

/// Receives digital controller events exactly as the host reported them.
///
/// The display adapter does not interpret joystick input; whatever owns
/// the emulated controls implements this.
pub trait JoystickHandler {
    fn process(&mut self, event: &Event);
}

/// Handler for sessions with no controller wiring.
pub struct NullJoystick;

impl JoystickHandler for NullJoystick {
    fn process(&mut self, event: &Event) {
        log::trace!("joystick event ignored: {event:?}");
    }
}
