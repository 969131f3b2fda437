//! Input latch
//!
//! Hosts report key edges (just pressed / just released); the latch turns
//! them into a held flag per tracked key that persists across ticks.

use serde::{Deserialize, Serialize};

/// Keys the simulation listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Key {
    pub const ALL: [Key; 3] = [Key::MoveLeft, Key::MoveRight, Key::Fire];

    fn bit(self) -> u8 {
        match self {
            Key::MoveLeft => 1 << 0,
            Key::MoveRight => 1 << 1,
            Key::Fire => 1 << 2,
        }
    }
}

/// A set of tracked keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySet(u8);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub fn of(keys: &[Key]) -> Self {
        keys.iter().fold(Self::EMPTY, |set, &k| set.with(k))
    }

    pub fn with(mut self, key: Key) -> Self {
        self.insert(key);
        self
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Key> {
        Key::ALL.into_iter().filter(move |&k| self.contains(k))
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, k| set.with(k))
    }
}

/// Held/not-held flag per tracked key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLatch {
    held: KeySet,
}

impl InputLatch {
    /// Apply one tick's worth of edges
    ///
    /// A key both pressed and released within the same tick ends up released.
    pub fn apply(&mut self, just_pressed: KeySet, just_released: KeySet) {
        for key in Key::ALL {
            if just_pressed.contains(key) {
                self.held.insert(key);
            }
            if just_released.contains(key) {
                self.held.remove(key);
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(key)
    }

    pub fn held(&self) -> KeySet {
        self.held
    }
}
