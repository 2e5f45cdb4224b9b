//! Drawing surface abstraction.
//!
//! *The engine never touches a pixel buffer directly.* It issues a handful
//! of primitives (vertical spans, filled rectangles, image blits) against a
//! type implementing [`Renderer`], then hands the finished frame to the
//! window through `end_frame`.

pub mod image;
pub mod software;

pub use image::{Image, ImageBank, ImageError, ImageId, SpriteSheet};
pub use software::Software;

/// Pixel format of the frame-buffer (0xAARRGGBB). Alpha 0 = transparent.
pub type Rgba = u32;

/// Pack an opaque colour.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Screen- or image-space rectangle. May extend past the target; every
/// primitive clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// A renderer that owns an internal scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Fill column `x` from row `y0` to `y1`, both inclusive.
    fn draw_vertical_segment(&mut self, x: i32, y0: i32, y1: i32, colour: Rgba);

    fn fill_rect(&mut self, rect: Rect, colour: Rgba);

    /// Copy `src` (whole image when `None`) of `image` scaled into `dst`,
    /// skipping transparent texels.
    fn blit(&mut self, image: &Image, src: Option<Rect>, dst: Rect);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}
