//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one step. Subsystems run in a fixed
//! order: input, player, player bullet, formation, collisions, enemy bullets.

use glam::Vec2;

use super::formation::front_line;
use super::input::{Key, KeySet};
use super::rng::RandomSource;
use super::state::{BulletVariant, EnemyBullet, Invaders, Point, RoundPhase};
use crate::consts::*;

/// Key edges observed by the host since the previous tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub just_pressed: KeySet,
    pub just_released: KeySet,
}

impl TickInput {
    pub fn press(keys: &[Key]) -> Self {
        Self {
            just_pressed: KeySet::of(keys),
            ..Default::default()
        }
    }

    pub fn release(keys: &[Key]) -> Self {
        Self {
            just_released: KeySet::of(keys),
            ..Default::default()
        }
    }

    /// Edges for a host that polls held keys instead of receiving events
    pub fn transition(prev: KeySet, now: KeySet) -> Self {
        let mut input = Self::default();
        for key in Key::ALL {
            match (prev.contains(key), now.contains(key)) {
                (false, true) => input.just_pressed.insert(key),
                (true, false) => input.just_released.insert(key),
                _ => {}
            }
        }
        input
    }
}

impl Invaders {
    /// Advance the game by one step
    pub fn tick(&mut self, input: &TickInput, rng: &mut impl RandomSource) {
        if let RoundPhase::PlayerDead { wait_ticks } = &mut self.phase {
            *wait_ticks += 1;
            if *wait_ticks >= RESPAWN_DELAY_TICKS {
                self.reset();
            }
            return;
        }

        self.step += 1;
        self.latch.apply(input.just_pressed, input.just_released);
        self.update_shooter();
        self.launch_bullet();
        self.move_bullets();
        self.move_enemies();
        self.update_collisions();

        if self.update_enemy_bullets(rng) {
            log::info!(
                "Player hit at tick {} ({} formation members left)",
                self.step,
                self.enemies.len()
            );
            self.phase = RoundPhase::PlayerDead { wait_ticks: 0 };
        }
    }

    /// Move the shooter; left and right both apply when both are held
    fn update_shooter(&mut self) {
        if self.latch.is_held(Key::MoveLeft) {
            self.shooter.pos.x -= SHOOTER_SPEED;
        }
        if self.latch.is_held(Key::MoveRight) {
            self.shooter.pos.x += SHOOTER_SPEED;
        }
        let max_x = (PIXELS_WIDTH - SHOOTER_WIDTH) as f32;
        self.shooter.pos.x = self.shooter.pos.x.clamp(0.0, max_x);
    }

    /// Fire if the trigger is held and no bullet is in flight
    fn launch_bullet(&mut self) {
        if self.latch.is_held(Key::Fire) && self.bullet.is_none() {
            self.bullet = Some(Point {
                x: self.shooter.pos.x,
                y: self.shooter.pos.y,
            });
        }
    }

    /// Drop a bullet already past the top, otherwise move it up
    fn move_bullets(&mut self) {
        self.bullet = self.bullet.and_then(|b| {
            if b.y < 0.0 {
                None
            } else {
                Some(Point {
                    x: b.x,
                    y: b.y - BULLET_SPEED,
                })
            }
        });
    }

    /// Spawn, move and cull enemy bullets. Returns true if one hit the player.
    fn update_enemy_bullets(&mut self, rng: &mut impl RandomSource) -> bool {
        let live = self.enemies.len();
        let cadence = (live as u64 * SPAWN_PER_ENEMY + SPAWN_BASE).max(1);

        if self.step % cadence == 0 {
            let front = front_line(&self.enemies);
            if !front.is_empty() {
                let shooter = &self.enemies[front[rng.below(front.len())]];
                let velo = if live <= FAST_BULLET_THRESHOLD {
                    ENEMY_BULLET_SPEED_FAST
                } else {
                    ENEMY_BULLET_SPEED
                };
                let variant = BulletVariant::ALL[rng.below(BulletVariant::ALL.len())];
                let pos = shooter.pos + Vec2::new(ENEMY_BULLET_OFFSET_X, ENEMY_BULLET_OFFSET_Y);

                log::debug!(
                    "Enemy bullet from ({}, {}) at tick {} ({:?}, speed {})",
                    shooter.col,
                    shooter.row,
                    self.step,
                    variant,
                    velo
                );
                self.enemy_bullets.push(EnemyBullet { pos, velo, variant });
            }
        }

        for bullet in &mut self.enemy_bullets {
            bullet.pos.y += bullet.velo;
        }
        self.enemy_bullets.retain(|b| b.pos.y <= ARENA_HEIGHT);

        self.enemy_bullets.iter().any(|b| self.shooter.inside(b.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_transition_edges() {
        let prev = KeySet::of(&[Key::MoveLeft, Key::Fire]);
        let now = KeySet::of(&[Key::Fire, Key::MoveRight]);
        let input = TickInput::transition(prev, now);
        assert_eq!(input.just_pressed, KeySet::of(&[Key::MoveRight]));
        assert_eq!(input.just_released, KeySet::of(&[Key::MoveLeft]));
    }

    #[test]
    fn test_tick_advances_step() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::zeros();
        inv.tick(&idle(), &mut rng);
        assert_eq!(inv.step, 1);
    }

    #[test]
    fn test_shooter_moves_while_held() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::zeros();
        let x0 = inv.shooter.pos.x;

        inv.tick(&TickInput::press(&[Key::MoveLeft]), &mut rng);
        inv.tick(&idle(), &mut rng);
        assert_eq!(inv.shooter.pos.x, x0 - 2.0);

        inv.tick(&TickInput::release(&[Key::MoveLeft]), &mut rng);
        assert_eq!(inv.shooter.pos.x, x0 - 2.0);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::zeros();
        let x0 = inv.shooter.pos.x;
        inv.tick(&TickInput::press(&[Key::MoveLeft, Key::MoveRight]), &mut rng);
        assert_eq!(inv.shooter.pos.x, x0);
    }

    #[test]
    fn test_shooter_clamped() {
        let mut inv = Invaders::new();
        inv.shooter.pos.x = 0.5;
        inv.latch.apply(KeySet::of(&[Key::MoveLeft]), KeySet::EMPTY);
        inv.update_shooter();
        assert_eq!(inv.shooter.pos.x, 0.0);

        inv.shooter.pos.x = 200.5;
        inv.latch.apply(KeySet::of(&[Key::MoveRight]), KeySet::of(&[Key::MoveLeft]));
        inv.update_shooter();
        assert_eq!(inv.shooter.pos.x, 201.0);
    }

    #[test]
    fn test_launch_and_move_bullet() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::zeros();
        inv.tick(&TickInput::press(&[Key::Fire]), &mut rng);

        let b = inv.bullet.expect("bullet launched");
        assert_eq!(b.x, inv.shooter.pos.x);
        assert_eq!(b.y, inv.shooter.pos.y - BULLET_SPEED);

        // Holding fire does not replace the bullet in flight
        inv.tick(&idle(), &mut rng);
        assert_eq!(inv.bullet.map(|b| b.y), Some(inv.shooter.pos.y - 2.0 * BULLET_SPEED));
    }

    #[test]
    fn test_bullet_removed_above_top() {
        let mut inv = Invaders::new();
        inv.bullet = Some(Point { x: 0.0, y: 2.0 });
        inv.move_bullets();
        assert_eq!(inv.bullet.map(|b| b.y), Some(-2.0));
        inv.move_bullets();
        assert!(inv.bullet.is_none());
    }

    #[test]
    fn test_enemy_bullet_cadence_and_spawn() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::new(vec![0, 1]);

        inv.step = 129;
        assert!(!inv.update_enemy_bullets(&mut rng));
        assert!(inv.enemy_bullets.is_empty());

        inv.step = 130;
        inv.update_enemy_bullets(&mut rng);
        assert_eq!(inv.enemy_bullets.len(), 1);

        // First front-line member is column 0, row 4
        let b = &inv.enemy_bullets[0];
        let mut expected = inv.enemies[44].pos + Vec2::new(4.0, 16.0);
        expected.y += ENEMY_BULLET_SPEED;
        assert_eq!(b.pos, expected);
        assert_eq!(b.velo, ENEMY_BULLET_SPEED);
        assert_eq!(b.variant, BulletVariant::Cross);
    }

    #[test]
    fn test_fast_bullets_when_formation_thin() {
        let mut inv = Invaders::new();
        inv.enemies.retain(|e| e.row == 4 && e.col < 8);
        let mut rng = ScriptedRandom::zeros();
        // cadence = 8 * 2 + 20
        inv.step = 36;
        inv.update_enemy_bullets(&mut rng);
        assert_eq!(inv.enemy_bullets[0].velo, ENEMY_BULLET_SPEED_FAST);
    }

    #[test]
    fn test_no_spawn_without_formation() {
        let mut inv = Invaders::new();
        inv.enemies.clear();
        let mut rng = ScriptedRandom::zeros();
        inv.step = 20;
        assert!(!inv.update_enemy_bullets(&mut rng));
        assert!(inv.enemy_bullets.is_empty());
    }

    #[test]
    fn test_enemy_bullets_culled_below_arena() {
        let mut inv = Invaders::new();
        inv.step = 1;
        inv.enemy_bullets.push(EnemyBullet {
            pos: Vec2::new(0.0, ARENA_HEIGHT - 1.0),
            velo: ENEMY_BULLET_SPEED,
            variant: BulletVariant::Zap,
        });
        inv.update_enemy_bullets(&mut ScriptedRandom::zeros());
        assert!(inv.enemy_bullets.is_empty());
    }

    #[test]
    fn test_enemy_bullet_kills_player() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::zeros();
        let target = inv.shooter.pos + Vec2::new(3.0, 0.0);
        inv.enemy_bullets.push(EnemyBullet {
            pos: target,
            velo: 1.0,
            variant: BulletVariant::Zap,
        });
        inv.enemy_bullets.push(EnemyBullet {
            pos: target,
            velo: 2.0,
            variant: BulletVariant::Cross,
        });

        inv.tick(&idle(), &mut rng);
        assert_eq!(inv.phase, RoundPhase::PlayerDead { wait_ticks: 0 });
        assert!(inv.is_player_dead());
    }

    #[test]
    fn test_dead_player_ignores_input() {
        let mut inv = Invaders::new();
        let mut rng = ScriptedRandom::zeros();
        // On a formation tick and a spawn tick, with a bullet in flight
        inv.step = 129;
        inv.enemies[7].dying = 1;
        inv.enemy_bullets.push(EnemyBullet {
            pos: Vec2::new(40.0, 100.0),
            velo: ENEMY_BULLET_SPEED,
            variant: BulletVariant::Cross,
        });
        inv.phase = RoundPhase::PlayerDead { wait_ticks: 0 };
        let before = inv.clone();

        for wait in 1..=30 {
            inv.tick(&TickInput::press(&[Key::MoveLeft, Key::Fire]), &mut rng);
            assert_eq!(inv.phase, RoundPhase::PlayerDead { wait_ticks: wait });
        }
        assert_eq!(inv.step, before.step);
        assert_eq!(inv.shooter, before.shooter);
        assert_eq!(inv.latch, before.latch);
        assert!(inv.bullet.is_none());
        assert_eq!(inv.enemies, before.enemies);
        assert_eq!(inv.enemy_velo, before.enemy_velo);
        assert_eq!(inv.enemy_bullets, before.enemy_bullets);
    }
}
