//! The per-frame cycle: drain host events, feed the renderer, present.

use std::time::Duration;

use dotmatrix_core::input::{EventQueue, InputEvent, KeyTranslator};
use dotmatrix_core::video::FrameSource;
use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Mod};

use crate::config::Config;
use crate::input::{self, JoystickHandler};
use crate::video::Video;

/// Drive the adapter until the host asks to quit.
pub fn run(
    video: &mut Video,
    pump: &mut EventPump,
    source: &mut dyn FrameSource,
    joystick: &mut dyn JoystickHandler,
    translator: &KeyTranslator,
    cfg: &Config,
) {
    let mut events = EventQueue::new();

    loop {
        if !poll(video, pump, joystick, translator, cfg, &mut events) {
            log::info!("host requested quit");
            break;
        }

        while let Some(event) = events.poll() {
            source.handle_input(event);
        }

        if let Err(e) = video.frame(pump, |fb| source.render_frame(fb)) {
            // precondition violation, unrecoverable by design
            eprintln!("dotmatrix: cannot present frame: {e}");
            std::process::exit(1);
        }

        // coarse pacing only, so an unthrottled renderer does not spin a
        // core; real frame timing is out of scope
        std::thread::sleep(Duration::from_millis(16));
    }
}

/// Drain every pending host event without blocking. Returns false when
/// the host asked to quit.
fn poll(
    video: &mut Video,
    pump: &mut EventPump,
    joystick: &mut dyn JoystickHandler,
    translator: &KeyTranslator,
    cfg: &Config,
    events: &mut EventQueue,
) -> bool {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => return false,

            Event::Window { win_event, .. } => {
                if let Some(enabled) = enabled_transition(&win_event) {
                    video.set_enabled(enabled);
                }
            }

            // repeat events are synthetic, not host transitions
            Event::KeyDown { keycode: Some(keycode), keymod, repeat: false, .. } => {
                if cfg.alt_enter && is_fullscreen_chord(keycode, keymod) {
                    // a host chord, not an input event
                    video.toggle_fullscreen();
                    continue;
                }
                events.post(InputEvent::press(input::translate(translator, keycode)));
            }

            Event::KeyUp { keycode: Some(keycode), .. } => {
                events.post(InputEvent::release(input::translate(translator, keycode)));
            }

            Event::JoyAxisMotion { .. }
            | Event::JoyHatMotion { .. }
            | Event::JoyButtonDown { .. }
            | Event::JoyButtonUp { .. } => joystick.process(&event),

            _ => {}
        }
    }
    true
}

/// Focus/visibility transitions that gate presentation.
fn enabled_transition(win_event: &WindowEvent) -> Option<bool> {
    match win_event {
        WindowEvent::FocusGained | WindowEvent::Shown | WindowEvent::Restored => Some(true),
        WindowEvent::FocusLost | WindowEvent::Hidden | WindowEvent::Minimized => Some(false),
        _ => None,
    }
}

/// Alt+Enter on key-down toggles fullscreen instead of reaching the
/// translator.
fn is_fullscreen_chord(keycode: Keycode, keymod: Mod) -> bool {
    keycode == Keycode::Return && keymod.intersects(Mod::LALTMOD | Mod::RALTMOD)
}
