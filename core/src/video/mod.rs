pub mod format;
pub mod frame;
pub mod raster;
pub mod scale;

pub use format::{ChannelLayout, PixelLayout};
pub use frame::{FrameBuffer, FrameSource};
pub use raster::{PixelView, PixelViewMut, RasterError};
pub use scale::{BlitError, ScaleTable, Scaler};

/// Native resolution of the emulated screen.
pub const SOURCE_WIDTH: usize = 160;
pub const SOURCE_HEIGHT: usize = 144;
