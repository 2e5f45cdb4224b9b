use glam::Vec2;
use log::{debug, info, trace};

use super::collision::try_move;
use super::{BulletPool, Enemy, Events, InputCmd, SimEvent};
use crate::config::GameConfig;
use crate::world::{Camera, Cell, Map};

/* ── Player ───────────────────────────────────────────────────────── */

/// Apply one tic of input: fire, then turn, then walk.
pub fn player_input(
    map: &Map,
    player: &mut Camera,
    bullets: &mut BulletPool,
    cfg: &GameConfig,
    cmd: InputCmd,
    events: &mut Events,
) {
    if cmd.fire {
        match bullets.fire(player.pos, player.dir * cfg.bullet_speed, cfg.bullet_lifetime) {
            Some(slot) => {
                debug!("bullet fired from slot {slot}");
                events.push(SimEvent::Fired { slot });
            }
            None => trace!("fire ignored, all bullets in flight"),
        }
    }

    if cmd.turn != 0.0 {
        player.rotate(cmd.turn * cfg.turn_speed);
    }

    if cmd.forward != 0.0 {
        player.pos = try_move(map, player.pos, player.dir * (cmd.forward * cfg.move_speed));
    }
}

/* ── Monster ──────────────────────────────────────────────────────── */

/// Move a live monster one step toward `target` if it is within the aggro
/// radius. Returns the distance measured *before* the step.
pub fn enemy_pursuit(map: &Map, enemy: &mut Enemy, target: Vec2, cfg: &GameConfig) -> f32 {
    let to_player = target - enemy.pos;
    let dist = to_player.length();

    if dist < cfg.aggro_radius {
        let angle = to_player.y.atan2(to_player.x);
        let step = Vec2::from_angle(angle) * cfg.enemy_speed;
        enemy.pos = try_move(map, enemy.pos, step);
    }
    dist
}

/// Rate limiter for the proximity heartbeat: the closer the monster, the
/// shorter the gap between beats, never below `heartbeat_min_ms`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeartbeatGate {
    last_ms: u64,
}

impl HeartbeatGate {
    pub fn interval_ms(dist: f32, cfg: &GameConfig) -> u64 {
        ((dist * cfg.heartbeat_ms_per_cell) as u64).max(cfg.heartbeat_min_ms)
    }

    /// `true` if a beat is due at `now_ms`; arms the next interval.
    pub fn poll(&mut self, dist: f32, now_ms: u64, cfg: &GameConfig) -> bool {
        if now_ms > self.last_ms + Self::interval_ms(dist, cfg) {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/* ── Bullets ──────────────────────────────────────────────────────── */

/// Advance every live bullet one tic. Returns `true` when a hit killed the
/// monster; the remaining bullets are left untouched in that case.
pub fn update_bullets(
    map: &Map,
    bullets: &mut BulletPool,
    enemy: &mut Enemy,
    flip_frame: bool,
    cfg: &GameConfig,
    events: &mut Events,
) -> bool {
    for b in bullets.slots_mut().iter_mut().filter(|b| b.active) {
        b.pos += b.vel;
        if flip_frame {
            b.anim_frame = 1 - b.anim_frame;
        }

        let cell = Map::cell_of(b.pos);
        if map.cell_at(cell.x, cell.y) == Cell::Wall {
            b.active = false;
        }

        b.lifetime -= 1;
        if b.lifetime <= 0 {
            b.active = false;
        }

        // A bullet retired this tic can still land a hit.
        if enemy.alive && b.pos.distance(enemy.pos) < cfg.hit_radius {
            b.active = false;
            enemy.health -= 1;
            debug!("monster hit, {} health left", enemy.health);
            events.push(SimEvent::EnemyHit {
                health: enemy.health,
            });

            if enemy.health <= 0 {
                enemy.alive = false;
                info!("monster destroyed");
                events.push(SimEvent::EnemyKilled);
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Map {
        Map::from_ascii(&[
            "##########", //
            "#........#",
            "##########",
        ])
        .unwrap()
    }

    #[test]
    fn heartbeat_interval_scales_and_clamps() {
        let cfg = GameConfig::default();
        assert_eq!(HeartbeatGate::interval_ms(5.0, &cfg), 500);
        assert_eq!(HeartbeatGate::interval_ms(0.2, &cfg), 50);

        let mut gate = HeartbeatGate::default();
        assert!(gate.poll(5.0, 501, &cfg));
        assert!(!gate.poll(5.0, 1000, &cfg));
        assert!(!gate.poll(5.0, 1001, &cfg));
        assert!(gate.poll(5.0, 1002, &cfg));
    }

    #[test]
    fn far_monster_stays_put() {
        let cfg = GameConfig::default();
        let map = Map::default_maze();
        let mut enemy = Enemy::spawn(Vec2::new(14.5, 13.5), 3);
        let dist = enemy_pursuit(&map, &mut enemy, Vec2::new(1.5, 1.5), &cfg);
        assert!(dist > cfg.aggro_radius);
        assert_eq!(enemy.pos, Vec2::new(14.5, 13.5));
    }

    #[test]
    fn near_monster_closes_in() {
        let cfg = GameConfig::default();
        let mut enemy = Enemy::spawn(Vec2::new(6.5, 1.5), 3);
        let target = Vec2::new(2.5, 1.5);
        let before = enemy.pos.distance(target);
        enemy_pursuit(&corridor(), &mut enemy, target, &cfg);
        let after = enemy.pos.distance(target);
        assert!((before - after - cfg.enemy_speed).abs() < 1e-5);
    }

    #[test]
    fn bullet_hitting_wall_retires_same_tic() {
        let cfg = GameConfig::default();
        let map = corridor();
        let mut pool = BulletPool::new();
        pool.fire(Vec2::new(1.05, 1.5), Vec2::new(-0.1, 0.0), 100);
        let mut enemy = Enemy::spawn(Vec2::new(8.5, 1.5), 3);
        let mut events = Events::new();

        update_bullets(&map, &mut pool, &mut enemy, false, &cfg, &mut events);
        assert_eq!(pool.active_count(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn bullet_expires_in_open_space() {
        let cfg = GameConfig::default();
        let map = corridor();
        let mut pool = BulletPool::new();
        pool.fire(Vec2::new(1.5, 1.5), Vec2::ZERO, 2);
        let mut enemy = Enemy::spawn(Vec2::new(8.5, 1.5), 3);
        let mut events = Events::new();

        update_bullets(&map, &mut pool, &mut enemy, false, &cfg, &mut events);
        assert_eq!(pool.active_count(), 1);
        update_bullets(&map, &mut pool, &mut enemy, false, &cfg, &mut events);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn frame_flip_toggles_live_bullets() {
        let cfg = GameConfig::default();
        let mut pool = BulletPool::new();
        pool.fire(Vec2::new(1.5, 1.5), Vec2::ZERO, 100);
        let mut enemy = Enemy::spawn(Vec2::new(8.5, 1.5), 3);
        let mut events = Events::new();

        update_bullets(&corridor(), &mut pool, &mut enemy, true, &cfg, &mut events);
        assert_eq!(pool.slots()[0].anim_frame, 1);
        update_bullets(&corridor(), &mut pool, &mut enemy, true, &cfg, &mut events);
        assert_eq!(pool.slots()[0].anim_frame, 0);
    }

    #[test]
    fn player_fire_turn_walk() {
        let cfg = GameConfig::default();
        let map = corridor();
        let mut player = Camera::new(Vec2::new(4.5, 1.5), Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.66));
        let mut pool = BulletPool::new();
        let mut events = Events::new();

        let cmd = InputCmd {
            forward: 1.0,
            turn: 0.0,
            fire: true,
        };
        player_input(&map, &mut player, &mut pool, &cfg, cmd, &mut events);
        assert!((player.pos.x - 4.55).abs() < 1e-5);
        assert_eq!(events.as_slice(), &[SimEvent::Fired { slot: 0 }]);
        let b = pool.slots()[0];
        assert_eq!(b.pos, Vec2::new(4.5, 1.5));
        assert!((b.vel - Vec2::new(0.1, 0.0)).length() < 1e-6);
        assert_eq!(b.lifetime, cfg.bullet_lifetime);

        let back = InputCmd {
            forward: -1.0,
            turn: 1.0,
            fire: false,
        };
        let dir0 = player.dir;
        player_input(&map, &mut player, &mut pool, &cfg, back, &mut events);
        assert!(player.dir.angle_to(dir0).abs() > 0.02);
    }
}
