//! The per-frame seam between the presentation layer and the renderer.
//!
//! Once per frame the presentation layer locks the source surface and
//! hands the renderer a [`FrameBuffer`]: the pixel view plus everything
//! the renderer needs to pack pixels without talking to the host.

use crate::input::InputEvent;
use crate::video::format::PixelLayout;
use crate::video::raster::PixelViewMut;

/// The locked source framebuffer, live for the duration of one render
/// call. Pixel memory belongs to the host surface; this view borrows it.
pub struct FrameBuffer<'a> {
    view: PixelViewMut<'a>,
    layout: PixelLayout,
    enabled: bool,
    dirty: bool,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(view: PixelViewMut<'a>, layout: PixelLayout, enabled: bool, dirty: bool) -> Self {
        Self { view, layout, enabled, dirty }
    }

    pub fn width(&self) -> usize {
        self.view.width()
    }

    pub fn height(&self) -> usize {
        self.view.height()
    }

    pub fn pitch(&self) -> usize {
        self.view.pitch()
    }

    pub fn layout(&self) -> &PixelLayout {
        &self.layout
    }

    /// Whether pixels are palette indices (see the palette interface on
    /// the presentation side).
    pub fn indexed(&self) -> bool {
        self.layout.indexed()
    }

    /// Host focus/visibility. Rendering while disabled is allowed; the
    /// presentation layer just skips the flip.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// True on the first frame after the pixel format was (re)negotiated;
    /// palette users should refresh their entries when they see it.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Write an already-packed pixel (or palette index, in indexed mode).
    pub fn put_pixel(&mut self, x: usize, y: usize, value: u32) {
        self.view.put_pixel(x, y, value);
    }

    /// Pack components through the negotiated layout and write the result.
    pub fn put_rgb(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        let value = self.layout.pack(r, g, b);
        self.view.put_pixel(x, y, value);
    }
}

/// Produces the pixels shown on the emulated screen.
///
/// The analog of an emulated machine: the presentation layer is a pure
/// output/input adapter and does not know what it is displaying.
pub trait FrameSource {
    /// Write one frame into the locked framebuffer.
    fn render_frame(&mut self, frame: &mut FrameBuffer<'_>);

    /// Consume one normalized input event.
    ///
    /// Called per event, in FIFO order, between frames. Events carrying
    /// the sentinel code 0 come from unmapped host keys and are safe to
    /// ignore.
    fn handle_input(&mut self, event: InputEvent);
}
