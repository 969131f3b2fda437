//! Invaders headless runner
//!
//! Drives the simulation at a fixed step without a window. Input comes from
//! a simple built-in pilot; output is logging plus optional JSON snapshots
//! and ASCII frames on stdout.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use invaders::consts::*;
use invaders::sim::{Invaders, Key, KeySet, Snapshot, TickInput};
use invaders::sprites::SpriteId;
use invaders::Settings;

/// ASCII frame downsampling (logical pixels per character cell)
const ASCII_CELL_W: usize = 2;
const ASCII_CELL_H: usize = 4;

/// Held keys for the next tick: line up under the nearest live member,
/// sidestep bullets about to land, and keep the trigger down.
fn pilot(snap: &Snapshot) -> KeySet {
    let mut held = KeySet::EMPTY.with(Key::Fire);
    if !snap.player_alive {
        return held;
    }

    let player = snap.player.pos;
    let threat = snap.enemy_bullets.iter().find(|b| {
        let dx = b.pos.x - (player.x + SHOOTER_WIDTH as f32 / 2.0);
        dx.abs() < 12.0 && player.y - b.pos.y < 40.0 && b.pos.y < player.y
    });
    if let Some(b) = threat {
        let dodge = if b.pos.x > player.x + SHOOTER_WIDTH as f32 / 2.0 {
            Key::MoveLeft
        } else {
            Key::MoveRight
        };
        held.insert(dodge);
        return held;
    }

    let target = snap
        .formation
        .iter()
        .filter(|m| m.sprite != SpriteId::Explosion)
        .map(|m| m.pos.x + CHARACTER_WIDTH as f32 / 2.0 - BULLET_OFFSET)
        .min_by(|a, b| {
            (a - player.x)
                .abs()
                .partial_cmp(&(b - player.x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some(x) = target {
        if x < player.x - 0.5 {
            held.insert(Key::MoveLeft);
        } else if x > player.x + 0.5 {
            held.insert(Key::MoveRight);
        }
    }
    held
}

/// Rasterize a snapshot into text, one character per `ASCII_CELL_W` x
/// `ASCII_CELL_H` block of logical pixels.
fn ascii_frame(snap: &Snapshot) -> String {
    let cols = PIXELS_WIDTH as usize / ASCII_CELL_W;
    let rows = PIXELS_HEIGHT as usize / ASCII_CELL_H;
    let mut grid = vec![vec![' '; cols]; rows];

    let mut plot = |x: f32, y: f32, c: char| {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (cx, cy) = (x as usize / ASCII_CELL_W, y as usize / ASCII_CELL_H);
        if let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) {
            *cell = c;
        }
    };

    let sprites = snap
        .formation
        .iter()
        .map(|s| (s, '#'))
        .chain(snap.enemy_bullets.iter().map(|s| (s, '|')))
        .chain(std::iter::once((&snap.player, '^')));
    for (inst, c) in sprites {
        let (ox, oy) = (inst.pos.x.floor(), inst.pos.y.floor());
        for (px, py) in inst.sprite.lit_pixels() {
            plot(ox + px as f32, oy + py as f32, c);
        }
    }
    if let Some(b) = snap.player_bullet {
        for dy in 0..4 {
            plot(b.x.floor() + BULLET_OFFSET, b.y.floor() + dy as f32, '!');
        }
    }

    let border = if snap.death_border { 'X' } else { '-' };
    let edge: String = std::iter::repeat_n(border, cols + 2).collect();
    let mut out = String::with_capacity((cols + 3) * (rows + 2));
    out.push_str(&edge);
    out.push('\n');
    for row in grid {
        out.push(if snap.death_border { 'X' } else { '|' });
        out.extend(row);
        out.push(if snap.death_border { 'X' } else { '|' });
        out.push('\n');
    }
    out.push_str(&edge);
    out.push('\n');
    out
}

fn run(settings: &Settings) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let mut game = Invaders::new();
    let mut held = KeySet::EMPTY;

    let mut round = 1u32;
    let mut kills = 0usize;
    let mut was_dead = false;

    for t in 1..=settings.max_ticks {
        let before = game.snapshot();
        let now = if settings.autopilot { pilot(&before) } else { KeySet::EMPTY };
        game.tick(&TickInput::transition(held, now), &mut rng);
        held = game.latch.held();

        let snap = game.snapshot();
        kills += before.formation.len().saturating_sub(snap.formation.len());

        if snap.death_border && !was_dead {
            log::info!("Round {} over at step {} ({} members destroyed)", round, snap.step, kills);
        }
        if was_dead && !snap.death_border {
            round += 1;
            kills = 0;
            log::info!("Round {} begins", round);
        }
        if snap.formation.is_empty() && !before.formation.is_empty() {
            log::info!("Formation wiped out at step {}", snap.step);
        }
        was_dead = snap.death_border;

        if settings.snapshot_every > 0 && t % settings.snapshot_every == 0 {
            serde_json::to_writer(&mut out, &snap)?;
            writeln!(out)?;
        }
        if settings.ascii_every > 0 && t % settings.ascii_every == 0 {
            write!(out, "{}", ascii_frame(&snap))?;
        }
    }

    out.flush()?;
    log::info!("Stopped after {} ticks in round {}", settings.max_ticks, round);
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Invaders (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    log::debug!("{:?}", settings);

    run(&settings)
}
