//! Fixed-capacity projectile arena.
//!
//! Slots are tagged active/inactive and reused by index; nothing is
//! allocated when a shot is fired.

use glam::Vec2;

use super::Bullet;

pub const MAX_BULLETS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct BulletPool {
    slots: [Bullet; MAX_BULLETS],
}

impl BulletPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the first free slot. Returns its index, or `None` when
    /// every slot is in flight.
    pub fn fire(&mut self, pos: Vec2, vel: Vec2, lifetime: i32) -> Option<usize> {
        let (idx, slot) = self.slots.iter_mut().enumerate().find(|(_, b)| !b.active)?;
        *slot = Bullet {
            pos,
            vel,
            active: true,
            lifetime,
            anim_frame: 0,
        };
        Some(idx)
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    /// Live bullets in slot order.
    pub fn active(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter().filter(|b| b.active)
    }

    #[inline]
    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }

    #[inline]
    pub fn slots_mut(&mut self) -> &mut [Bullet] {
        &mut self.slots
    }
}
