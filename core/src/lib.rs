pub mod input;
pub mod video;

pub mod prelude {
    pub use crate::input::{EventKind, EventQueue, InputEvent, KeyTranslator, keys};
    pub use crate::video::{
        BlitError, ChannelLayout, FrameBuffer, FrameSource, PixelLayout, PixelView, PixelViewMut,
        RasterError, SOURCE_HEIGHT, SOURCE_WIDTH, ScaleTable, Scaler,
    };
}
