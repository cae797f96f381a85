//! Host window and surface management: the presentation side of the
//! display adapter.
//!
//! `Video` owns the host window, the 160x144 source surface the renderer
//! draws into, and the window-sized target surface the scaler fills.
//! Construction is initialization and drop is close; in between, the
//! `enabled` flag (host focus/visibility) gates the final flip only.

use dotmatrix_core::video::{
    BlitError, FrameBuffer, PixelLayout, PixelView, PixelViewMut, SOURCE_HEIGHT, SOURCE_WIDTH,
    Scaler,
};
use sdl2::EventPump;
use sdl2::VideoSubsystem;
use sdl2::pixels::{Color, Palette, PixelFormatEnum};
use sdl2::surface::Surface;
use sdl2::video::{FullscreenType, Window};

use crate::config::Config;

/// Pick the host pixel format for a configured depth. Anything else is a
/// configuration error and fatal, like every other setup failure.
fn format_for_depth(depth: u32) -> PixelFormatEnum {
    match depth {
        8 => PixelFormatEnum::Index8,
        15 => PixelFormatEnum::RGB555,
        16 => PixelFormatEnum::RGB565,
        32 => PixelFormatEnum::RGB888,
        other => panic!("unsupported color depth {other} (expected 8, 15, 16, or 32)"),
    }
}

/// Derive the packing descriptors from a surface's reported format.
fn negotiate(surface: &Surface<'_>) -> PixelLayout {
    let format = surface.pixel_format_enum();
    let bytes_per_pixel = format.byte_size_per_pixel();
    match format.into_masks() {
        Ok(masks) => {
            PixelLayout::from_masks(bytes_per_pixel, masks.rmask, masks.gmask, masks.bmask)
        }
        // indexed formats report no masks
        Err(_) => PixelLayout::from_masks(bytes_per_pixel, 0, 0, 0),
    }
}

pub struct Video {
    window: Window,
    source: Surface<'static>,
    target: Surface<'static>,
    layout: PixelLayout,
    scaler: Scaler,
    palette: [Color; 256],
    enabled: bool,
    dirty: bool,
}

impl Video {
    /// Create the window and both surfaces and negotiate the pixel layout.
    /// Any host failure here is fatal.
    pub fn new(video: &VideoSubsystem, cfg: &Config) -> Self {
        let (width, height) = cfg.window_size();
        let format = format_for_depth(cfg.video.depth);

        let mut builder = video.window("dotmatrix", width, height);
        builder.position_centered();
        if cfg.fullscreen {
            builder.fullscreen();
        }
        let window = builder.build().expect("failed to create window");

        let source = Surface::new(SOURCE_WIDTH as u32, SOURCE_HEIGHT as u32, format)
            .expect("failed to create source surface");
        let target = Surface::new(width, height, format).expect("failed to create target surface");

        if cfg.hardware_scaling {
            log::warn!("hardware scaling requested but unavailable; using the software scaler");
        }

        let layout = negotiate(&source);
        log::info!(
            "video mode {}x{}x{} ({}), source {}x{}",
            width,
            height,
            cfg.video.depth,
            if layout.indexed() { "indexed" } else { "packed" },
            SOURCE_WIDTH,
            SOURCE_HEIGHT,
        );

        let scaler = Scaler::new(
            (SOURCE_WIDTH, SOURCE_HEIGHT),
            (width as usize, height as usize),
        );

        Self {
            window,
            source,
            target,
            layout,
            scaler,
            palette: [Color::RGB(0, 0, 0); 256],
            enabled: true,
            dirty: true,
        }
    }

    pub fn layout(&self) -> &PixelLayout {
        &self.layout
    }

    pub fn indexed(&self) -> bool {
        self.layout.indexed()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Host focus/visibility gate. While disabled, frames are still
    /// rendered and scaled but never flipped to the display.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("presentation {}", if enabled { "enabled" } else { "disabled" });
            self.enabled = enabled;
        }
    }

    pub fn set_title(&mut self, title: &str) {
        if let Err(e) = self.window.set_title(title) {
            log::warn!("cannot set window title: {e}");
        }
    }

    /// Flip between fullscreen and windowed.
    pub fn toggle_fullscreen(&mut self) {
        let next = match self.window.fullscreen_state() {
            FullscreenType::Off => FullscreenType::True,
            _ => FullscreenType::Off,
        };
        if let Err(e) = self.window.set_fullscreen(next) {
            log::warn!("fullscreen toggle failed: {e}");
        }
    }

    /// Set one palette slot on both owned surfaces. Meaningful in indexed
    /// mode only; packed formats have no palette and the call is ignored.
    pub fn set_palette_entry(&mut self, index: u8, r: u8, g: u8, b: u8) {
        if !self.layout.indexed() {
            return;
        }
        self.palette[index as usize] = Color::RGB(r, g, b);
        let palette = match Palette::with_colors(&self.palette) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("cannot build palette: {e}");
                return;
            }
        };
        if let Err(e) = self.source.set_palette(&palette) {
            log::warn!("cannot set source palette: {e}");
        }
        if let Err(e) = self.target.set_palette(&palette) {
            log::warn!("cannot set target palette: {e}");
        }
    }

    /// Run one frame: hand the locked source surface to `render`, then
    /// scale into the target surface and flip it to the display unless
    /// presentation is disabled.
    ///
    /// The source lock is acquired and released around the render call on
    /// every path; an early return from `render` still unlocks before the
    /// blit runs.
    pub fn frame<F>(&mut self, pump: &EventPump, render: F) -> Result<(), BlitError>
    where
        F: FnOnce(&mut FrameBuffer<'_>),
    {
        let layout = self.layout;
        let enabled = self.enabled;
        let dirty = self.dirty;
        let width = self.source.width() as usize;
        let height = self.source.height() as usize;
        let pitch = self.source.pitch() as usize;

        self.source.with_lock_mut(|pixels| {
            let view = PixelViewMut::new(pixels, width, height, pitch, layout.bytes_per_pixel)
                .expect("source surface geometry");
            let mut fb = FrameBuffer::new(view, layout, enabled, dirty);
            render(&mut fb);
        });
        self.dirty = false;

        self.present(pump)
    }

    /// Scale the source into the target, then flip if enabled. The copy
    /// always runs so the target stays current while hidden.
    fn present(&mut self, pump: &EventPump) -> Result<(), BlitError> {
        let bytes_per_pixel = self.layout.bytes_per_pixel;
        let source = &self.source;
        let target = &mut self.target;
        let scaler = &self.scaler;

        let (sw, sh) = (source.width() as usize, source.height() as usize);
        let s_pitch = source.pitch() as usize;
        let (tw, th) = (target.width() as usize, target.height() as usize);
        let t_pitch = target.pitch() as usize;

        target.with_lock_mut(|dst_bytes| {
            source.with_lock(|src_bytes| {
                let src = PixelView::new(src_bytes, sw, sh, s_pitch, bytes_per_pixel)
                    .expect("source surface geometry");
                let mut dst = PixelViewMut::new(dst_bytes, tw, th, t_pitch, bytes_per_pixel)
                    .expect("target surface geometry");
                scaler.blit(&src, &mut dst)
            })
        })?;

        if self.enabled {
            let mut host = self
                .window
                .surface(pump)
                .expect("failed to acquire window surface");
            self.target
                .blit(None, &mut host, None)
                .expect("failed to copy to window surface");
            host.update_window()
                .expect("failed to present window surface");
        }

        Ok(())
    }
}
