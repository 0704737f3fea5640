// src/combat/src/dice.rs

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Injected randomness capability for the resolver.
///
/// Every roll in a fight flows through this trait; the resolver never
/// reaches for a global generator.
pub trait DiceRoller {
    /// Uniform draw in `[0, 1)`.
    fn roll_unit(&mut self) -> f64;
}

/// Compute attack damage from the roller and the attacker's strength.
///
/// The draw is continuous-uniform dressed as a die roll (`r*6 + 1`), not a
/// true d6, and is kept that way for compatibility with the original
/// balance. The `-0.5` offset centers the effective multiplier at
/// `str * [0.5, 6.5)`; truncation means a very low strength can whiff for 0.
pub fn damage_roll<D: DiceRoller + ?Sized>(dice: &mut D, strength: u32) -> u32 {
    let roll = dice.roll_unit() * 6.0 + 1.0;
    ((roll - 0.5) * strength as f64).floor() as u32
}

/// Entropy-backed roller for normal play.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadDice;

impl DiceRoller for ThreadDice {
    fn roll_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic roller: same seed, same fight.
#[derive(Clone, Debug)]
pub struct SeededDice {
    rng: Pcg32,
    seed: u64,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the sequence for the current seed.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }
}

impl DiceRoller for SeededDice {
    fn roll_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Roller that always returns the same draw. Test scaffolding, also handy
/// for worked examples downstream.
#[derive(Clone, Copy, Debug)]
pub struct FixedDice(pub f64);

impl DiceRoller for FixedDice {
    fn roll_unit(&mut self) -> f64 {
        self.0
    }
}
