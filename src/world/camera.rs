use glam::Vec2;

/// Player view-point in world space.
///
/// * `dir` is the unit facing vector on the X-Y plane.
/// * `plane` is the camera plane, perpendicular to `dir`; its length sets
///   the horizontal FoV (0.66 ≈ 66°).
/// * Turning rotates both by the same matrix, so the FoV never drifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
}

impl Camera {
    pub fn new(pos: Vec2, dir: Vec2, plane: Vec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Rotate facing and camera plane by `angle` radians (positive = CCW).
    pub fn rotate(&mut self, angle: f32) {
        let rot = Vec2::from_angle(angle);
        self.dir = rot.rotate(self.dir);
        self.plane = rot.rotate(self.plane);
    }

    /// Ray direction through the camera-space offset `camera_x ∈ [-1, 1]`.
    #[inline]
    pub fn ray_dir(&self, camera_x: f32) -> Vec2 {
        self.dir + self.plane * camera_x
    }

    /// Transform a world point into camera space:
    ///  .x = lateral offset along the camera plane
    ///  .y = depth along `dir`
    ///
    /// Inverse of the `[plane dir]` basis matrix.
    #[inline]
    pub fn to_cam(&self, p: Vec2) -> Vec2 {
        let s = p - self.pos;
        let inv_det = 1.0 / (self.plane.x * self.dir.y - self.dir.x * self.plane.y);
        Vec2::new(
            inv_det * (self.dir.y * s.x - self.dir.x * s.y),
            inv_det * (-self.plane.y * s.x + self.plane.x * s.y),
        )
    }
}

impl Default for Camera {
    /// Spawn pose: top-left corridor, looking west.
    fn default() -> Self {
        Self::new(Vec2::new(1.5, 1.5), Vec2::new(-1.0, 0.0), Vec2::new(0.0, 0.66))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
