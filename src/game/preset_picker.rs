use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Chooses which preset a lights-out reset starts from.
pub trait PresetPicker {
    /// Returns an index below `n_presets`; `n_presets` is never zero.
    fn pick(&mut self, n_presets: usize) -> usize;
}

impl<F> PresetPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, n_presets: usize) -> usize {
        self(n_presets)
    }
}

/// Uniform choice from a seeded generator; the same seed replays the same
/// sequence of starting layouts.
#[derive(Debug, Clone)]
pub struct SeededPresetPicker {
    rng: StdRng,
    seed: u64,
}

impl SeededPresetPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PresetPicker for SeededPresetPicker {
    fn pick(&mut self, n_presets: usize) -> usize {
        if n_presets <= 1 {
            return 0;
        }
        self.rng.random_range(0..n_presets)
    }
}

/// Always the same preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPresetPicker {
    index: usize,
}

impl FixedPresetPicker {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl PresetPicker for FixedPresetPicker {
    fn pick(&mut self, n_presets: usize) -> usize {
        self.index % n_presets.max(1)
    }
}
