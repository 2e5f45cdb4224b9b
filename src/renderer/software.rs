//! ---------------------------------------------------------------------------
//! Software (CPU) framebuffer back-end
//!
//! * Fills a `Vec<u32>` in **0xAARRGGBB** format.
//! * Every primitive is clipped to the framebuffer, so callers may pass
//!   spans and rectangles that hang off the screen.
//! ---------------------------------------------------------------------------

use crate::renderer::{Image, Rect, Renderer, Rgba};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.scratch[y * self.width + x]
    }

    /// Intersect `r` with the framebuffer: (x0, y0, x1, y1), ends exclusive.
    fn clip(&self, r: Rect) -> Option<(i32, i32, i32, i32)> {
        let x0 = r.x.max(0);
        let y0 = r.y.max(0);
        let x1 = r.x.saturating_add(r.w).min(self.width as i32);
        let y1 = r.y.saturating_add(r.h).min(self.height as i32);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(0xFF_000000);
    }

    fn draw_vertical_segment(&mut self, x: i32, y0: i32, y1: i32, colour: Rgba) {
        if x < 0 || x >= self.width as i32 {
            return;
        }
        let top = y0.min(y1).max(0);
        let bot = y0.max(y1).min(self.height as i32 - 1);
        for y in top..=bot {
            self.scratch[y as usize * self.width + x as usize] = colour;
        }
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = y as usize * self.width;
            self.scratch[row + x0 as usize..row + x1 as usize].fill(colour);
        }
    }

    fn blit(&mut self, image: &Image, src: Option<Rect>, dst: Rect) {
        let src = src.unwrap_or(Rect::new(0, 0, image.w as i32, image.h as i32));
        if src.is_empty() || dst.is_empty() {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(dst) else {
            return;
        };

        /* nearest-neighbour: dst pixel → src texel, integer maths */
        for y in y0..y1 {
            let v = src.y as i64 + (y as i64 - dst.y as i64) * src.h as i64 / dst.h as i64;
            if v < 0 || v >= image.h as i64 {
                continue;
            }
            let row = y as usize * self.width;
            for x in x0..x1 {
                let u = src.x as i64 + (x as i64 - dst.x as i64) * src.w as i64 / dst.w as i64;
                if u < 0 || u >= image.w as i64 {
                    continue;
                }
                let texel = image.pixels[v as usize * image.w + u as usize];
                if texel >> 24 != 0 {
                    self.scratch[row + x as usize] = texel;
                }
            }
        }
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::rgb;

    const RED: Rgba = 0xFF_FF0000;
    const BLUE: Rgba = 0xFF_0000FF;

    /* tiny helpers ---------------------------------------------------*/
    fn frame(w: usize, h: usize) -> Software {
        let mut sw = Software::default();
        sw.begin_frame(w, h);
        sw
    }

    fn checker_2x2() -> Image {
        Image {
            name: "CHECK".into(),
            w: 2,
            h: 2,
            pixels: vec![RED, 0, 0, BLUE], // top-right & bottom-left transparent
        }
    }

    #[test]
    fn vertical_segment_is_clipped() {
        let mut sw = frame(4, 4);
        sw.draw_vertical_segment(1, -5, 10, RED);
        sw.draw_vertical_segment(9, 0, 3, BLUE); // off-screen: ignored
        for y in 0..4 {
            assert_eq!(sw.pixel(1, y), RED);
            assert_eq!(sw.pixel(0, y), 0xFF_000000);
        }
    }

    #[test]
    fn fill_rect_partial_overlap() {
        let mut sw = frame(4, 4);
        sw.fill_rect(Rect::new(-2, 2, 4, 10), rgb(1, 2, 3));
        assert_eq!(sw.pixel(0, 2), rgb(1, 2, 3));
        assert_eq!(sw.pixel(1, 3), rgb(1, 2, 3));
        assert_eq!(sw.pixel(2, 2), 0xFF_000000);
        assert_eq!(sw.pixel(0, 1), 0xFF_000000);
    }

    #[test]
    fn blit_scales_and_keys_transparency() {
        let mut sw = frame(8, 8);
        sw.fill_rect(Rect::new(0, 0, 8, 8), rgb(9, 9, 9));
        sw.blit(&checker_2x2(), None, Rect::new(0, 0, 4, 4));
        assert_eq!(sw.pixel(0, 0), RED);
        assert_eq!(sw.pixel(1, 1), RED);
        assert_eq!(sw.pixel(3, 3), BLUE);
        assert_eq!(sw.pixel(3, 0), rgb(9, 9, 9)); // transparent texel
        assert_eq!(sw.pixel(5, 5), rgb(9, 9, 9)); // outside dst
    }

    #[test]
    fn blit_single_source_column() {
        let mut sw = frame(4, 4);
        // right column of the checker is [transparent, BLUE]
        sw.blit(&checker_2x2(), Some(Rect::new(1, 0, 1, 2)), Rect::new(2, -2, 1, 8));
        assert_eq!(sw.pixel(2, 0), 0xFF_000000);
        assert_eq!(sw.pixel(2, 3), BLUE);
    }

    #[test]
    fn end_frame_loans_buffer() {
        let mut sw = frame(3, 2);
        let (len, w, h) = sw.end_frame(|fb, w, h| (fb.len(), w, h));
        assert_eq!((len, w, h), (6, 3, 2));
    }
}
