//! Collision detection and resolution
//!
//! Hits are point-in-box tests: a bullet is a point, a character is the
//! closed rectangle of its cell.

use glam::Vec2;

use super::state::{Character, Invaders, Point};
use crate::consts::*;

/// Closed axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitBox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Edges count as inside
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl Character {
    /// Cell rectangle used for hit tests (player included)
    pub fn hit_box(&self) -> HitBox {
        HitBox::new(
            self.pos,
            self.pos + Vec2::new(CHARACTER_WIDTH as f32, CHARACTER_HEIGHT as f32),
        )
    }

    pub fn inside(&self, p: Vec2) -> bool {
        self.hit_box().contains(p)
    }
}

/// Point a player bullet hits with (its muzzle-offset x)
#[inline]
pub fn bullet_tip(bullet: Point) -> Vec2 {
    Vec2::new(bullet.x + BULLET_OFFSET, bullet.y)
}

impl Invaders {
    /// Advance death animations, drop finished members, and test the player
    /// bullet against members that are still alive.
    ///
    /// A dying member can't be hit again, so a bullet passes over it.
    pub(crate) fn update_collisions(&mut self) {
        let formation_tick = self.step % FORMATION_STEP_TICKS == 0;
        let step = self.step;
        let mut bullet = self.bullet;

        self.enemies.retain_mut(|enemy| {
            if enemy.dying == DYING_FINISHED {
                log::trace!("Member ({}, {}) removed at tick {}", enemy.col, enemy.row, step);
                return false;
            }
            if enemy.dying > 0 {
                if formation_tick {
                    enemy.dying += 1;
                }
                return true;
            }
            if let Some(b) = bullet {
                if enemy.inside(bullet_tip(b)) {
                    log::debug!("Member ({}, {}) hit at tick {}", enemy.col, enemy.row, step);
                    bullet = None;
                    enemy.dying = 1;
                }
            }
            true
        });

        self.bullet = bullet;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_box_scenario() {
        let hit = HitBox::new(Vec2::new(95.0, 45.0), Vec2::new(113.0, 61.0));
        let miss = HitBox::new(Vec2::new(120.0, 45.0), Vec2::new(140.0, 61.0));
        let p = Vec2::new(100.0, 50.0);
        assert!(hit.contains(p));
        assert!(!miss.contains(p));
    }

    #[test]
    fn test_hit_box_edges_inclusive() {
        let b = HitBox::new(Vec2::new(0.0, 0.0), Vec2::new(12.0, 8.0));
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(12.0, 8.0)));
        assert!(!b.contains(Vec2::new(12.01, 4.0)));
        assert!(!b.contains(Vec2::new(4.0, -0.01)));
    }

    /// Bullet origin that lands its tip inside member `idx`
    fn aim_at(inv: &Invaders, idx: usize) -> Point {
        let e = &inv.enemies[idx];
        Point {
            x: e.pos.x + 2.0 - BULLET_OFFSET,
            y: e.pos.y + 4.0,
        }
    }

    #[test]
    fn test_hit_marks_dying_and_consumes_bullet() {
        let mut inv = Invaders::new();
        inv.step = 5;
        inv.bullet = Some(aim_at(&inv, 50));
        inv.update_collisions();

        assert!(inv.bullet.is_none());
        assert_eq!(inv.enemies.len(), 55);
        assert_eq!(inv.enemies[50].dying, 1);
        assert_eq!(inv.enemies.iter().filter(|e| e.is_dying()).count(), 1);
    }

    #[test]
    fn test_dying_member_not_hit_again() {
        let mut inv = Invaders::new();
        inv.step = 5;
        inv.enemies[50].dying = 1;
        let b = aim_at(&inv, 50);
        inv.bullet = Some(b);
        inv.update_collisions();

        assert_eq!(inv.bullet, Some(b));
        assert_eq!(inv.enemies[50].dying, 1);
    }

    #[test]
    fn test_dying_advances_on_formation_tick_then_removed() {
        let mut inv = Invaders::new();
        inv.enemies[0].dying = 1;

        inv.step = 31;
        inv.update_collisions();
        assert_eq!(inv.enemies[0].dying, 1);

        inv.step = 60;
        inv.update_collisions();
        assert_eq!(inv.enemies[0].dying, DYING_FINISHED);
        assert_eq!(inv.enemies.len(), 55);

        inv.step = 61;
        inv.update_collisions();
        assert_eq!(inv.enemies.len(), 54);
        assert_eq!((inv.enemies[0].col, inv.enemies[0].row), (1, 0));
    }

    #[test]
    fn test_one_bullet_kills_one_member() {
        let mut inv = Invaders::new();
        // Stack a second member on the same cell
        let mut twin = inv.enemies[0].clone();
        twin.col = 0;
        inv.enemies.insert(1, twin);
        inv.bullet = Some(aim_at(&inv, 0));
        inv.step = 1;
        inv.update_collisions();

        assert_eq!(inv.enemies[0].dying, 1);
        assert_eq!(inv.enemies[1].dying, 0);
    }
}
