//! Precomputed coordinate mapping and the scaling blit engine.
//!
//! Scaling is nearest-neighbor driven by per-axis lookup tables computed
//! once at startup, never per frame. Each source coordinate owns a span of
//! one or two target cells; the blit writes the source pixel into every
//! cell of its span, which keeps the mapped rectangle gap-free for any
//! ratio between 1 and 2.

use std::fmt;

use crate::video::raster::{PixelView, PixelViewMut};

/// Map from source coordinates to target offsets along one axis.
///
/// `offset(i) = i * target / source` in integer arithmetic; a 160-to-240
/// axis reproduces the classic dot-doubling table
/// `0, 1, 3, 4, 6, 7, ...` exactly. Offsets are nondecreasing, and
/// consecutive offsets differ by 1 or 2 whenever the ratio lies in [1, 2].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTable {
    offsets: Vec<usize>,
    target: usize,
}

impl ScaleTable {
    pub fn new(source: usize, target: usize) -> Self {
        assert!(source > 0, "source dimension must be nonzero");
        let offsets = (0..source).map(|i| i * target / source).collect();
        Self { offsets, target }
    }

    /// Number of source coordinates covered.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Extent of the mapped region on the target axis.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Target offset owned by source coordinate `i`.
    pub fn offset(&self, i: usize) -> usize {
        self.offsets[i]
    }

    /// Width of the target span owned by source coordinate `i`.
    ///
    /// The span runs to the next coordinate's offset, or to the end of the
    /// mapped region for the last coordinate.
    pub fn span(&self, i: usize) -> usize {
        let next = self.offsets.get(i + 1).copied().unwrap_or(self.target);
        next - self.offsets[i]
    }
}

/// Errors from the scaling blit engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitError {
    /// The engine operates on 16-bit packed pixels only.
    UnsupportedDepth { bytes_per_pixel: usize },
    /// The source is smaller than the coordinate tables cover.
    SourceTooSmall { required: (usize, usize), actual: (usize, usize) },
    /// The target cannot hold the mapped rectangle.
    TargetTooSmall { required: (usize, usize), actual: (usize, usize) },
}

impl fmt::Display for BlitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDepth { bytes_per_pixel } => write!(
                f,
                "scaled blit requires 16-bit pixels, surface has {} bytes/pixel",
                bytes_per_pixel
            ),
            Self::SourceTooSmall { required, actual } => write!(
                f,
                "source is {}x{}, scale tables cover {}x{}",
                actual.0, actual.1, required.0, required.1
            ),
            Self::TargetTooSmall { required, actual } => write!(
                f,
                "target is {}x{}, mapped rectangle needs {}x{}",
                actual.0, actual.1, required.0, required.1
            ),
        }
    }
}

impl std::error::Error for BlitError {}

/// Nearest-neighbor scaler with precomputed per-axis tables.
///
/// Both axes share the horizontal ratio; the vertical map is centered on
/// the target, which puts a 160x144 source twelve rows down on a 240x240
/// display.
pub struct Scaler {
    x_map: ScaleTable,
    y_map: ScaleTable,
    y_offset: usize,
}

impl Scaler {
    pub fn new(source: (usize, usize), target: (usize, usize)) -> Self {
        let (sw, sh) = source;
        let (tw, th) = target;
        let scaled_h = sh * tw / sw;
        Self {
            x_map: ScaleTable::new(sw, tw),
            y_map: ScaleTable::new(sh, scaled_h),
            y_offset: th.saturating_sub(scaled_h) / 2,
        }
    }

    pub fn x_map(&self) -> &ScaleTable {
        &self.x_map
    }

    pub fn y_map(&self) -> &ScaleTable {
        &self.y_map
    }

    /// Rows of letterbox above the mapped rectangle.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Scale-copy the whole source into the target.
    ///
    /// Overwrites every target pixel inside the mapped rectangle and
    /// nothing outside it; letterbox bands keep whatever the caller put
    /// there. Both views must hold 16-bit pixels.
    pub fn blit(&self, src: &PixelView<'_>, dst: &mut PixelViewMut<'_>) -> Result<(), BlitError> {
        if src.bytes_per_pixel() != 2 {
            return Err(BlitError::UnsupportedDepth { bytes_per_pixel: src.bytes_per_pixel() });
        }
        if dst.bytes_per_pixel() != 2 {
            return Err(BlitError::UnsupportedDepth { bytes_per_pixel: dst.bytes_per_pixel() });
        }

        let required_src = (self.x_map.len(), self.y_map.len());
        if src.width() < required_src.0 || src.height() < required_src.1 {
            return Err(BlitError::SourceTooSmall {
                required: required_src,
                actual: (src.width(), src.height()),
            });
        }

        let required_dst = (self.x_map.target(), self.y_offset + self.y_map.target());
        if dst.width() < required_dst.0 || dst.height() < required_dst.1 {
            return Err(BlitError::TargetTooSmall {
                required: required_dst,
                actual: (dst.width(), dst.height()),
            });
        }

        for y in 0..self.y_map.len() {
            let ny = self.y_offset + self.y_map.offset(y);
            let rows = self.y_map.span(y);
            for x in 0..self.x_map.len() {
                let pixel = src.pixel(x, y);
                let nx = self.x_map.offset(x);
                let cols = self.x_map.span(x);
                for dy in 0..rows {
                    for dx in 0..cols {
                        dst.put_pixel(nx + dx, ny + dy, pixel);
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The historical 160-column table the construction rule must
    /// reproduce bit for bit.
    const CLASSIC_TABLE: [usize; 160] = [
        0, 1, 3, 4, 6, 7, 9, 10, 12, 13, 15, 16, 18, 19, 21, 22, 24, 25, 27, 28, 30, 31, 33, 34,
        36, 37, 39, 40, 42, 43, 45, 46, 48, 49, 51, 52, 54, 55, 57, 58, 60, 61, 63, 64, 66, 67,
        69, 70, 72, 73, 75, 76, 78, 79, 81, 82, 84, 85, 87, 88, 90, 91, 93, 94, 96, 97, 99, 100,
        102, 103, 105, 106, 108, 109, 111, 112, 114, 115, 117, 118, 120, 121, 123, 124, 126, 127,
        129, 130, 132, 133, 135, 136, 138, 139, 141, 142, 144, 145, 147, 148, 150, 151, 153, 154,
        156, 157, 159, 160, 162, 163, 165, 166, 168, 169, 171, 172, 174, 175, 177, 178, 180, 181,
        183, 184, 186, 187, 189, 190, 192, 193, 195, 196, 198, 199, 201, 202, 204, 205, 207, 208,
        210, 211, 213, 214, 216, 217, 219, 220, 222, 223, 225, 226, 228, 229, 231, 232, 234, 235,
        237, 238,
    ];

    #[test]
    fn reproduces_classic_table() {
        let table = ScaleTable::new(160, 240);
        assert_eq!(table.len(), 160);
        for (i, &expected) in CLASSIC_TABLE.iter().enumerate() {
            assert_eq!(table.offset(i), expected, "offset {i}");
        }
    }

    #[test]
    fn offsets_are_monotonic_with_small_steps() {
        let table = ScaleTable::new(160, 240);
        for i in 0..table.len() - 1 {
            let step = table.offset(i + 1) - table.offset(i);
            assert!((1..=2).contains(&step), "step {step} at {i}");
        }
    }

    #[test]
    fn offsets_are_bounded() {
        let table = ScaleTable::new(160, 240);
        assert_eq!(table.offset(0), 0);
        assert!(table.offset(159) < 240);
    }

    #[test]
    fn spans_double_odd_coordinates() {
        // the classic duplication rule: odd source columns own two cells
        let table = ScaleTable::new(160, 240);
        for i in 0..table.len() {
            let expected = if i % 2 == 1 { 2 } else { 1 };
            assert_eq!(table.span(i), expected, "span {i}");
        }
    }

    #[test]
    fn spans_cover_exact_doubling() {
        let table = ScaleTable::new(160, 320);
        for i in 0..table.len() {
            assert_eq!(table.offset(i), 2 * i);
            assert_eq!(table.span(i), 2);
        }
    }

    #[test]
    fn identity_table_is_one_to_one() {
        let table = ScaleTable::new(160, 160);
        for i in 0..table.len() {
            assert_eq!(table.offset(i), i);
            assert_eq!(table.span(i), 1);
        }
    }

    #[test]
    fn scaler_centers_the_classic_mode() {
        let scaler = Scaler::new((160, 144), (240, 240));
        assert_eq!(scaler.y_offset(), 12);
        assert_eq!(scaler.y_map().target(), 216);
        assert_eq!(scaler.x_map().target(), 240);
        // vertical offsets follow the same 1.5x rule as horizontal ones
        for i in 0..144 {
            assert_eq!(scaler.y_map().offset(i), scaler.x_map().offset(i));
        }
    }

    #[test]
    fn blit_rejects_non_16bit_views() {
        let scaler = Scaler::new((2, 2), (3, 3));
        let src_bytes = [0u8; 2 * 2 * 4];
        let mut dst_bytes = [0u8; 3 * 3 * 2];
        let src = PixelView::new(&src_bytes, 2, 2, 8, 4).unwrap();
        let mut dst = PixelViewMut::new(&mut dst_bytes, 3, 3, 6, 2).unwrap();
        assert_eq!(
            scaler.blit(&src, &mut dst),
            Err(BlitError::UnsupportedDepth { bytes_per_pixel: 4 })
        );
    }

    #[test]
    fn blit_rejects_small_target() {
        let scaler = Scaler::new((4, 4), (6, 6));
        let src_bytes = [0u8; 4 * 4 * 2];
        let mut dst_bytes = [0u8; 4 * 4 * 2];
        let src = PixelView::new(&src_bytes, 4, 4, 8, 2).unwrap();
        let mut dst = PixelViewMut::new(&mut dst_bytes, 4, 4, 8, 2).unwrap();
        assert_eq!(
            scaler.blit(&src, &mut dst),
            Err(BlitError::TargetTooSmall { required: (6, 6), actual: (4, 4) })
        );
    }

    #[test]
    fn blit_rejects_small_source() {
        let scaler = Scaler::new((4, 4), (6, 6));
        let src_bytes = [0u8; 2 * 2 * 2];
        let mut dst_bytes = [0u8; 6 * 6 * 2];
        let src = PixelView::new(&src_bytes, 2, 2, 4, 2).unwrap();
        let mut dst = PixelViewMut::new(&mut dst_bytes, 6, 6, 12, 2).unwrap();
        assert_eq!(
            scaler.blit(&src, &mut dst),
            Err(BlitError::SourceTooSmall { required: (4, 4), actual: (2, 2) })
        );
    }
}
