//! Game state and core simulation types
//!
//! Everything a round needs lives in `Invaders`; there is no global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputLatch;
use crate::consts::*;
use crate::enemy_position;

/// Formation member species, fixed per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Squid,
    Crab,
    Octopus,
    /// The player's ship
    Shooter,
}

impl Species {
    /// Species populating formation row `row`
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => Species::Squid,
            1 | 2 => Species::Crab,
            _ => Species::Octopus,
        }
    }
}

/// A formation member or the player ship
///
/// The player has no grid cell; its `row` and `col` are always 0 and carry no
/// meaning. Only `pos`, `species` and `dying` apply to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Grid row (formation members only)
    pub row: usize,
    /// Grid column (formation members only)
    pub col: usize,
    pub pos: Vec2,
    pub species: Species,
    /// 0 = alive, >0 = playing the death animation
    pub dying: u8,
}

impl Character {
    /// Formation member at its round-start grid cell
    pub fn formation_member(col: usize, row: usize) -> Self {
        Self {
            row,
            col,
            pos: enemy_position(col, row),
            species: Species::for_row(row),
            dying: 0,
        }
    }

    /// Player ship at its round-start position
    pub fn shooter() -> Self {
        Self {
            // Unused for the player
            row: 0,
            col: 0,
            pos: Vec2::new(
                (PIXELS_WIDTH / 2 - CHARACTER_WIDTH / 2) as f32,
                enemy_position(0, CHARACTER_ROWS).y,
            ),
            species: Species::Shooter,
            dying: 0,
        }
    }

    pub fn is_dying(&self) -> bool {
        self.dying != 0
    }
}

/// Player bullet position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Enemy bullet glyph family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletVariant {
    Zap,
    Cross,
}

impl BulletVariant {
    pub const ALL: [BulletVariant; 2] = [BulletVariant::Zap, BulletVariant::Cross];
}

/// A bullet dropped by the formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    /// Downward speed (pixels/tick)
    pub velo: f32,
    pub variant: BulletVariant,
}

/// Round lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Normal play
    Playing,
    /// Player was hit; counts ticks until the round resets
    PlayerDead { wait_ticks: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invaders {
    /// Simulation tick counter (advances only while playing)
    pub step: u64,
    pub latch: InputLatch,
    /// At most one live player bullet
    pub bullet: Option<Point>,
    /// Live formation members in column-within-row insertion order
    pub enemies: Vec<Character>,
    /// Horizontal formation velocity, one of -2, 0, +2
    pub enemy_velo: f32,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub shooter: Character,
    pub phase: RoundPhase,
}

impl Default for Invaders {
    fn default() -> Self {
        Self::new()
    }
}

impl Invaders {
    /// Create a simulation at round start
    pub fn new() -> Self {
        let enemies = (0..FORMATION_ROWS)
            .flat_map(|row| {
                (0..CHARACTER_COLS).map(move |col| Character::formation_member(col, row))
            })
            .collect();

        Self {
            step: 0,
            latch: InputLatch::default(),
            bullet: None,
            enemies,
            enemy_velo: FORMATION_SPEED,
            enemy_bullets: Vec::new(),
            shooter: Character::shooter(),
            phase: RoundPhase::Playing,
        }
    }

    /// Reinitialize everything to round-start values
    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!(
            "Round start: {} formation members, arena {}x{}",
            self.enemies.len(),
            PIXELS_WIDTH,
            PIXELS_HEIGHT
        );
    }

    pub fn is_player_dead(&self) -> bool {
        matches!(self.phase, RoundPhase::PlayerDead { .. })
    }
}
