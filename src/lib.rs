//! Invaders - a fixed-formation shooting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation, bullets, collisions, round cycle)
//! - `sprites`: Logical sprite identifiers and their glyph bitmaps
//! - `settings`: Host configuration for the headless runner

pub mod settings;
pub mod sim;
pub mod sprites;

pub use settings::Settings;
pub use sim::{Invaders, Snapshot, TickInput};

use glam::Vec2;

/// Game configuration constants
///
/// All geometry is in logical pixels. The arena size is derived from the
/// formation grid and never changes at runtime.
pub mod consts {
    /// Horizontal margin between the arena edge and the formation grid
    pub const PADDING_X: u32 = 22;
    /// Vertical margin above the formation grid
    pub const PADDING_Y: u32 = 5;
    /// Horizontal gap between formation cells
    pub const SPACE_X: u32 = 4;
    /// Vertical gap between formation cells
    pub const SPACE_Y: u32 = 8;
    /// Logical pixel to screen pixel factor used by hosts
    pub const SCALE: u32 = 4;

    /// Formation grid columns
    pub const CHARACTER_COLS: usize = 11;
    /// Grid rows spanned by the arena (the player sits on the last one)
    pub const CHARACTER_ROWS: usize = 10;
    /// Rows actually populated by the formation
    pub const FORMATION_ROWS: usize = 5;

    /// Formation member cell size
    pub const CHARACTER_WIDTH: u32 = 12;
    pub const CHARACTER_HEIGHT: u32 = 8;
    /// Width of the shooter glyph, used for the movement clamp
    pub const SHOOTER_WIDTH: u32 = 15;

    /// Arena dimensions (logical pixels)
    pub const PIXELS_WIDTH: u32 =
        PADDING_X * 2 + CHARACTER_COLS as u32 * (CHARACTER_WIDTH + SPACE_X) - SPACE_X;
    pub const PIXELS_HEIGHT: u32 =
        PADDING_Y * 2 + CHARACTER_ROWS as u32 * (CHARACTER_HEIGHT + 1 + SPACE_Y);
    pub const ARENA_WIDTH: f32 = PIXELS_WIDTH as f32;
    pub const ARENA_HEIGHT: f32 = PIXELS_HEIGHT as f32;

    /// Player horizontal speed (pixels/tick)
    pub const SHOOTER_SPEED: f32 = 1.0;
    /// Player bullet upward speed (pixels/tick)
    pub const BULLET_SPEED: f32 = 4.0;
    /// Horizontal offset from the shooter origin to its muzzle
    pub const BULLET_OFFSET: f32 = 7.0;

    /// Enemy bullet downward speeds (pixels/tick)
    pub const ENEMY_BULLET_SPEED: f32 = 1.33;
    pub const ENEMY_BULLET_SPEED_FAST: f32 = 1.66;
    /// Live formation size at or below which enemy bullets use the fast speed
    pub const FAST_BULLET_THRESHOLD: usize = 8;
    /// Enemy bullet spawn offset from the firing member's origin
    pub const ENEMY_BULLET_OFFSET_X: f32 = 4.0;
    pub const ENEMY_BULLET_OFFSET_Y: f32 = 16.0;
    /// Spawn cadence is `SPAWN_PER_ENEMY * live + SPAWN_BASE` ticks
    pub const SPAWN_PER_ENEMY: u64 = 2;
    pub const SPAWN_BASE: u64 = 20;

    /// Formation steps (and death animations advance) every N ticks
    pub const FORMATION_STEP_TICKS: u64 = 30;
    /// Formation sprite frames flip every N ticks
    pub const FORMATION_FRAME_TICKS: u64 = 30;
    /// Enemy bullet sprite frames flip every N ticks
    pub const ENEMY_BULLET_FRAME_TICKS: u64 = 20;
    /// Horizontal formation speed while marching
    pub const FORMATION_SPEED: f32 = 2.0;
    /// Distance the formation drops when it stops at an edge
    pub const FORMATION_DROP: f32 = 8.0;
    /// Formation overhang past the padding at which an edge counts as touched
    pub const EDGE_BOUNCE: f32 = -16.0;

    /// Dying counter value at which a member is removed
    pub const DYING_FINISHED: u8 = 2;
    /// Ticks between player death and round reset
    pub const RESPAWN_DELAY_TICKS: u32 = 120;
}

use consts::*;

/// Origin of the formation cell at (`col`, `row`)
///
/// Rows past the formation are still valid; the player spawns on row
/// `CHARACTER_ROWS`.
#[inline]
pub fn enemy_position(col: usize, row: usize) -> Vec2 {
    Vec2::new(
        (PADDING_X + col as u32 * (CHARACTER_WIDTH + SPACE_X)) as f32,
        (PADDING_Y + row as u32 * (CHARACTER_HEIGHT + SPACE_Y)) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_dimensions() {
        assert_eq!(PIXELS_WIDTH, 216);
        assert_eq!(PIXELS_HEIGHT, 180);
    }

    #[test]
    fn test_enemy_position_grid() {
        assert_eq!(enemy_position(0, 0), Vec2::new(22.0, 5.0));
        assert_eq!(enemy_position(10, 4), Vec2::new(182.0, 69.0));
        assert_eq!(enemy_position(0, CHARACTER_ROWS).y, 165.0);
    }
}
