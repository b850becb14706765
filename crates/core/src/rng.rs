//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds with equal probability, independent of history, so
//! repeats and droughts are possible. The generator keeps a single piece of lookahead for the
//! "next" preview.
//!
//! Randomness comes from a small LCG so a seed fully determines the piece sequence.

use crate::types::PieceKind;

/// 32-bit linear congruential generator (Numerical Recipes multiplier and increment).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    const MUL: u32 = 1_664_525;
    const INC: u32 = 1_013_904_223;

    /// Seed 0 is treated as 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::MUL).wrapping_add(Self::INC);
        self.state
    }

    /// Uniform value in `0..max`.
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

/// Uniform piece generator with one-piece lookahead.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
    next: PieceKind,
}

impl PieceGenerator {
    /// Create a generator; the first `peek()` is already decided.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::random_type(&mut rng);
        Self {
            rng,
            seed: seed.max(1),
            next,
        }
    }

    fn random_type(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// The kind the next `draw()` will return.
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the pending kind and roll a fresh one behind it.
    pub fn draw(&mut self) -> PieceKind {
        let piece = self.next;
        self.next = Self::random_type(&mut self.rng);
        piece
    }

    /// Discard the pending kind and roll a new one.
    pub fn reroll(&mut self) -> PieceKind {
        self.next = Self::random_type(&mut self.rng);
        self.next
    }

    /// Replace the pending kind without touching the RNG stream.
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = kind;
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
