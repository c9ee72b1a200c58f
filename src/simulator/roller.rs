//! Sources of die faces.
//!
//! The runner never touches a global RNG; callers hand it a [`DieRoller`],
//! which lets tests substitute a scripted sequence of faces.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Something that can roll a single die.
pub trait DieRoller {
    /// Roll a die with `sides` faces, returning a face in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<T: DieRoller + ?Sized> DieRoller for &mut T {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// Uniform rolls backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomRoller<R> {
    rng: R,
}

impl<R: Rng> RandomRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRoller<ChaCha8Rng> {
    /// Reproducible roller for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> DieRoller for RandomRoller<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides)
    }
}

/// Replays a fixed list of faces, wrapping around when it runs out.
///
/// Faces are returned as-is, without checking them against `sides`.
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Panics if `faces` is empty.
    pub fn new(faces: Vec<u32>) -> Self {
        assert!(!faces.is_empty(), "ScriptedRoller needs at least one face");
        Self { faces, cursor: 0 }
    }

    /// `1, 2, ..., sides, 1, 2, ...`
    pub fn cycle(sides: u32) -> Self {
        Self::new((1..=sides).collect())
    }

    /// Number of faces handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for ScriptedRoller {
    fn roll(&mut self, _sides: u32) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
