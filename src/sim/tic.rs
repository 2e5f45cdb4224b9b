use log::info;
use smallvec::SmallVec;

use super::systems::{self, HeartbeatGate};
use super::{BulletPool, Enemy, InputCmd};
use crate::config::GameConfig;
use crate::world::{Camera, Map};

/// Match progression. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    Won,
    Lost,
}

impl MatchState {
    #[inline]
    pub fn is_over(self) -> bool {
        self != MatchState::Playing
    }
}

/// Things that happened during one tic, for audio and HUD consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Fired { slot: usize },
    Heartbeat,
    EnemyHit { health: i32 },
    EnemyKilled,
    PlayerCaught,
}

pub type Events = SmallVec<[SimEvent; 4]>;

/// Result of [`Simulation::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub state: MatchState,
    pub events: Events,
}

/// Owns every piece of mutable game state and advances it one tic at a time.
pub struct Simulation {
    cfg: GameConfig,
    map: Map,
    player: Camera,
    enemy: Enemy,
    bullets: BulletPool,
    heartbeat: HeartbeatGate,
    anim_tic: u32,
    state: MatchState,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Map::default_maze())
    }
}

impl Simulation {
    pub fn new(map: Map) -> Self {
        Self::with_config(map, GameConfig::default())
    }

    pub fn with_config(map: Map, cfg: GameConfig) -> Self {
        let player = Camera::new(cfg.player_spawn, cfg.player_dir, cfg.camera_plane);
        let enemy = Enemy::spawn(cfg.enemy_spawn, cfg.enemy_health);
        info!(
            "match start: player at {}, monster at {} ({} hp)",
            player.pos, enemy.pos, enemy.health
        );
        Self {
            cfg,
            map,
            player,
            enemy,
            bullets: BulletPool::new(),
            heartbeat: HeartbeatGate::default(),
            anim_tic: 0,
            state: MatchState::Playing,
        }
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn player(&self) -> &Camera {
        &self.player
    }

    #[inline]
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    #[inline]
    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    #[inline]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }

    #[cfg(test)]
    pub(crate) fn bullets_mut(&mut self) -> &mut BulletPool {
        &mut self.bullets
    }

    /// Apply `cmd` to the player, then run one world step.
    /// A finished match ignores further tics.
    pub fn tick(&mut self, cmd: InputCmd, now_ms: u64) -> Tick {
        let mut events = Events::new();
        if !self.state.is_over() {
            systems::player_input(
                &self.map,
                &mut self.player,
                &mut self.bullets,
                &self.cfg,
                cmd,
                &mut events,
            );
            self.step(now_ms, &mut events);
        }
        Tick {
            state: self.state,
            events,
        }
    }

    /* ---------------------------------------------------------------- */
    /* internal: monster, heartbeat, bullets                             */
    /* ---------------------------------------------------------------- */
    fn step(&mut self, now_ms: u64, events: &mut Events) {
        if self.enemy.alive {
            let dist =
                systems::enemy_pursuit(&self.map, &mut self.enemy, self.player.pos, &self.cfg);

            if self.heartbeat.poll(dist, now_ms, &self.cfg) {
                events.push(SimEvent::Heartbeat);
            }

            if dist < self.cfg.catch_radius {
                info!("player caught by the monster");
                events.push(SimEvent::PlayerCaught);
                self.state = MatchState::Lost;
                return;
            }
        }

        self.anim_tic += 1;
        if self.anim_tic >= self.cfg.anim_period {
            self.anim_tic = 0;
        }

        let killed = systems::update_bullets(
            &self.map,
            &mut self.bullets,
            &mut self.enemy,
            self.anim_tic == 0,
            &self.cfg,
            events,
        );
        if killed {
            self.state = MatchState::Won;
        }
    }
}
