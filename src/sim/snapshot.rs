//! Read-only view of the simulation for hosts
//!
//! Animation frames are computed here from the tick counter; entities never
//! store which frame they are showing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BulletVariant, Invaders, Species};
use crate::consts::*;
use crate::sprites::SpriteId;

/// Sprite to draw for a character of `species` at tick `step`
pub fn character_sprite(species: Species, step: u64, dying: u8) -> SpriteId {
    if dying != 0 {
        return SpriteId::Explosion;
    }
    let alt = (step / FORMATION_FRAME_TICKS) % 2 == 1;
    match (species, alt) {
        (Species::Squid, false) => SpriteId::Squid0,
        (Species::Squid, true) => SpriteId::Squid1,
        (Species::Crab, false) => SpriteId::Crab0,
        (Species::Crab, true) => SpriteId::Crab1,
        (Species::Octopus, false) => SpriteId::Octopus0,
        (Species::Octopus, true) => SpriteId::Octopus1,
        (Species::Shooter, _) => SpriteId::Shooter,
    }
}

/// Sprite to draw for an enemy bullet at tick `step`
pub fn bullet_sprite(variant: BulletVariant, step: u64) -> SpriteId {
    match variant {
        BulletVariant::Zap if (step / ENEMY_BULLET_FRAME_TICKS) % 2 == 1 => SpriteId::Zap1,
        BulletVariant::Zap => SpriteId::Zap0,
        BulletVariant::Cross => SpriteId::Cross,
    }
}

/// A positioned sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteInstance {
    pub pos: Vec2,
    pub sprite: SpriteId,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub step: u64,
    pub player: SpriteInstance,
    pub player_alive: bool,
    /// Live formation members in formation order
    pub formation: Vec<SpriteInstance>,
    /// Player bullet origin; the visible streak starts `BULLET_OFFSET` to the right
    pub player_bullet: Option<Vec2>,
    pub enemy_bullets: Vec<SpriteInstance>,
    /// Draw the red arena border shown while waiting to respawn
    pub death_border: bool,
}

impl Invaders {
    /// Capture the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        let step = self.step;
        let dead = self.is_player_dead();

        Snapshot {
            step,
            player: SpriteInstance {
                pos: self.shooter.pos,
                sprite: character_sprite(self.shooter.species, step, self.shooter.dying),
            },
            player_alive: !dead,
            formation: self
                .enemies
                .iter()
                .map(|e| SpriteInstance {
                    pos: e.pos,
                    sprite: character_sprite(e.species, step, e.dying),
                })
                .collect(),
            player_bullet: self.bullet.map(|b| Vec2::new(b.x, b.y)),
            enemy_bullets: self
                .enemy_bullets
                .iter()
                .map(|b| SpriteInstance {
                    pos: b.pos,
                    sprite: bullet_sprite(b.variant, step),
                })
                .collect(),
            death_border: dead,
        }
    }
}
