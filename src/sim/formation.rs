//! Formation controller
//!
//! The formation marches sideways one step every `FORMATION_STEP_TICKS`.
//! Touching an edge first stops it and drops a rank; the next contact with
//! the same edge starts it marching the other way.

use super::state::{Character, Invaders};
use crate::consts::*;

/// Horizontal extent of the live formation: (min x, max x + width)
pub fn formation_extent(enemies: &[Character]) -> Option<(f32, f32)> {
    enemies.iter().fold(None, |acc, e| {
        let left = e.pos.x;
        let right = e.pos.x + CHARACTER_WIDTH as f32;
        Some(match acc {
            None => (left, right),
            Some((min, max)) => (min.min(left), max.max(right)),
        })
    })
}

/// Which arena edges the formation is touching: (left, right)
pub fn edge_contact(min: f32, max: f32) -> (bool, bool) {
    let padding = PADDING_X as f32;
    let most_left = min - padding == EDGE_BOUNCE;
    let most_right = ARENA_WIDTH - padding - max == EDGE_BOUNCE;
    (most_left, most_right)
}

/// Velocity after touching an edge: stop if moving, else march away from it
fn toggle_velocity(velo: f32, away: f32) -> f32 {
    if velo == 0.0 { away } else { 0.0 }
}

/// Indices of the front-line members: per column, the one with the greatest
/// row. Columns are visited left to right; empty columns contribute nothing.
pub fn front_line(enemies: &[Character]) -> Vec<usize> {
    let mut lowest: [Option<usize>; CHARACTER_COLS] = [None; CHARACTER_COLS];
    for (i, enemy) in enemies.iter().enumerate() {
        let Some(slot) = lowest.get_mut(enemy.col) else {
            continue;
        };
        let replace = match *slot {
            Some(j) => enemies[j].row < enemy.row,
            None => true,
        };
        if replace {
            *slot = Some(i);
        }
    }
    lowest.into_iter().flatten().collect()
}

impl Invaders {
    /// Step the formation on formation ticks; no-op otherwise
    pub(crate) fn move_enemies(&mut self) {
        if self.step % FORMATION_STEP_TICKS != 0 {
            return;
        }

        let (most_left, most_right) = formation_extent(&self.enemies)
            .map(|(min, max)| edge_contact(min, max))
            .unwrap_or((false, false));

        if most_left {
            self.enemy_velo = toggle_velocity(self.enemy_velo, FORMATION_SPEED);
        }
        if most_right {
            self.enemy_velo = toggle_velocity(self.enemy_velo, -FORMATION_SPEED);
        }
        if most_left || most_right {
            log::debug!(
                "Formation edge contact at tick {} (left={}, right={}), velocity now {}",
                self.step,
                most_left,
                most_right,
                self.enemy_velo
            );
        }

        let drop_rank = (most_left || most_right) && self.enemy_velo == 0.0;
        for enemy in &mut self.enemies {
            enemy.pos.x += self.enemy_velo;
            if drop_rank {
                enemy.pos.y += FORMATION_DROP;
            }
        }
    }
}
