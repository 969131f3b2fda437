//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per `tick`
//! - Randomness only through an injected `RandomSource`
//! - Stable formation order (row by row, column by column)
//! - No rendering or platform dependencies

pub mod collision;
pub mod formation;
pub mod input;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{HitBox, bullet_tip};
pub use formation::{edge_contact, formation_extent, front_line};
pub use input::{InputLatch, Key, KeySet};
pub use rng::{RandomSource, ScriptedRandom};
pub use snapshot::{Snapshot, SpriteInstance, bullet_sprite, character_sprite};
pub use state::{BulletVariant, Character, EnemyBullet, Invaders, Point, RoundPhase, Species};
pub use tick::TickInput;
