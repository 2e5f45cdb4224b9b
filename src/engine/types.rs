/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_w: i32, // pre-derived for speed
    pub half_h: i32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_w: w as i32 / 2,
            half_h: h as i32 / 2,
        }
    }

    /// Camera-space offset of column `x`: −1 at the left edge, 0 in the
    /// middle, approaching +1 at the right edge.
    #[inline]
    pub fn camera_x(&self, x: usize) -> f32 {
        2.0 * x as f32 / self.w as f32 - 1.0
    }
}
