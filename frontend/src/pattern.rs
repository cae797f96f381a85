//! A built-in frame source so the binary runs without an emulated system
//! attached: a scrolling gradient that exercises the whole path from
//! format negotiation through the scaled present.

use dotmatrix_core::input::{EventKind, InputEvent, keys};
use dotmatrix_core::video::{FrameBuffer, FrameSource};

/// Scrolling test pattern. Arrow keys change the scroll direction, space
/// pauses; everything else is ignored.
pub struct TestPattern {
    offset: i32,
    step: i32,
    paused: bool,
}

impl TestPattern {
    pub fn new() -> Self {
        Self { offset: 0, step: 1, paused: false }
    }
}

impl Default for TestPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for TestPattern {
    fn render_frame(&mut self, frame: &mut FrameBuffer<'_>) {
        if !self.paused {
            self.offset = self.offset.wrapping_add(self.step);
        }
        let o = self.offset;
        let height = frame.height().max(1);

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.indexed() {
                    // palette ramp set up at startup
                    frame.put_pixel(x, y, ((x as i32 + y as i32 + o) & 0xFF) as u32);
                } else {
                    let r = ((x as i32 + o) & 0xFF) as u8;
                    let g = ((y * 255) / height) as u8;
                    let b = ((x as i32 + y as i32 - o) & 0xFF) as u8;
                    frame.put_rgb(x, y, r, g, b);
                }
            }
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        if event.kind != EventKind::Press {
            return;
        }
        match event.code {
            keys::LEFT => self.step = -1,
            keys::RIGHT => self.step = 1,
            keys::SPACE => self.paused = !self.paused,
            _ => {} // includes unmapped keys (sentinel 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotmatrix_core::video::{PixelLayout, PixelViewMut};

    fn render_once(pattern: &mut TestPattern, bytes: &mut [u8]) {
        let layout = PixelLayout::from_masks(2, 0xF800, 0x07E0, 0x001F);
        let view = PixelViewMut::new(bytes, 8, 8, 16, 2).unwrap();
        let mut frame = FrameBuffer::new(view, layout, true, false);
        pattern.render_frame(&mut frame);
    }

    #[test]
    fn pause_freezes_the_scroll() {
        let mut pattern = TestPattern::new();
        let mut first = [0u8; 8 * 8 * 2];
        let mut second = [0u8; 8 * 8 * 2];

        pattern.handle_input(InputEvent::press(keys::SPACE));
        render_once(&mut pattern, &mut first);
        render_once(&mut pattern, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn releases_and_unknown_codes_are_ignored() {
        let mut pattern = TestPattern::new();
        pattern.handle_input(InputEvent::release(keys::LEFT));
        assert_eq!(pattern.step, 1);
        pattern.handle_input(InputEvent::press(keys::NONE));
        pattern.handle_input(InputEvent::press(u16::from(b'q')));
        assert_eq!(pattern.step, 1);
        assert!(!pattern.paused);

        pattern.handle_input(InputEvent::press(keys::LEFT));
        assert_eq!(pattern.step, -1);
    }
}
