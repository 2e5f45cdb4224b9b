mod bullets;
mod collision;
mod components;
mod systems;
mod tic;

pub use bullets::{BulletPool, MAX_BULLETS};
pub use collision::try_move;
pub use components::{Bullet, Enemy, InputCmd, Keys};
pub use systems::HeartbeatGate;
pub use tic::{Events, MatchState, SimEvent, Simulation, Tick};
