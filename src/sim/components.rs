use bitflags::bitflags;
use glam::Vec2;

/// The monster. One per match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub alive: bool,
    pub health: i32,
}

impl Enemy {
    pub fn spawn(pos: Vec2, health: i32) -> Self {
        Self {
            pos,
            alive: true,
            health,
        }
    }
}

/// One projectile slot in the [`BulletPool`](super::BulletPool).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
    pub lifetime: i32, // tics left
    pub anim_frame: u8, // 0 | 1
}

bitflags! {
    /// Keys held (or, for `FIRE`, pressed) this frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Keys: u8 {
        const LEFT    = 0b0000_0001;
        const RIGHT   = 0b0000_0010;
        const FORWARD = 0b0000_0100;
        const BACK    = 0b0000_1000;
        const FIRE    = 0b0001_0000;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub turn: f32,    // –1 … +1  (right / left)
    pub fire: bool,   // Space, edge-triggered
}

impl InputCmd {
    /// Fold a key set into one command. Opposing keys cancel.
    pub fn from_keys(keys: Keys) -> Self {
        let mut cmd = Self::default();
        if keys.contains(Keys::FORWARD) {
            cmd.forward += 1.0;
        }
        if keys.contains(Keys::BACK) {
            cmd.forward -= 1.0;
        }
        if keys.contains(Keys::LEFT) {
            cmd.turn += 1.0;
        }
        if keys.contains(Keys::RIGHT) {
            cmd.turn -= 1.0;
        }
        cmd.fire = keys.contains(Keys::FIRE);
        cmd
    }
}
