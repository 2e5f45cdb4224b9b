//! Billboard projection for the monster and bullets.
//!
//! A sprite is moved into camera space with the inverse of the
//! `[plane dir]` basis, scaled by 1 / depth and centred on the horizon.
//! Occlusion is per screen column against the wall depth buffer only;
//! sprites never test against each other.

use glam::Vec2;

use super::types::Screen;
use crate::renderer::Rect;
use crate::world::Camera;

/// Screen-space footprint of one billboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteProjection {
    pub depth: f32,    // camera-space forward distance
    pub screen_x: i32, // centre column
    pub w: i32,
    pub h: i32,
}

/// Project a billboard standing at `pos`.
///
/// * `aspect` – image width / height; the projected height is `H / depth`.
/// * `shrink` – integer divisor applied to the projected size (bullets
///   render at a quarter of the monster's scale).
///
/// Returns `None` for sprites on or behind the camera plane.
pub fn project(
    camera: &Camera,
    pos: Vec2,
    screen: &Screen,
    aspect: f32,
    shrink: i32,
) -> Option<SpriteProjection> {
    let t = camera.to_cam(pos);
    if t.y <= 0.0 {
        return None;
    }

    let screen_x = (screen.half_w as f32 * (1.0 + t.x / t.y)) as i32;
    let h = (screen.h as f32 / t.y) as i32 / shrink;
    let w = (h as f32 * aspect) as i32;

    Some(SpriteProjection {
        depth: t.y,
        screen_x,
        w,
        h,
    })
}

impl SpriteProjection {
    #[inline]
    pub fn left(&self) -> i32 {
        self.screen_x.saturating_sub(self.w / 2)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.screen_x.saturating_add(self.w / 2)
    }

    // Near-plane sprites saturate to i32 extremes, hence the saturating maths.

    /// Unclipped destination rectangle, vertically centred on the horizon.
    pub fn rect(&self, screen: &Screen) -> Rect {
        Rect::new(self.left(), screen.half_h - self.h / 2, self.w, self.h)
    }

    /// Visible `(screen column, source column)` pairs for an image
    /// `image_w` texels wide.
    ///
    /// A column is kept only if the sprite is nearer than the wall already
    /// drawn there; source columns advance linearly across the width.
    pub fn columns<'a>(
        &'a self,
        depth_buffer: &'a [f32],
        image_w: usize,
    ) -> impl Iterator<Item = (i32, i32)> + 'a {
        let left = self.left();
        let start = left.max(0);
        let end = self.right().min(depth_buffer.len() as i32);

        (start..end)
            .filter(move |&x| self.depth < depth_buffer[x as usize])
            .map(move |x| {
                let u = (x as i64 - left as i64) * image_w as i64 / self.w.max(1) as i64;
                (x, (u as i32).min(image_w as i32 - 1))
            })
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
