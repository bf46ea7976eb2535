//! RNG module - deterministic mine placement
//!
//! Mines are placed by shuffling every cell index and taking the first `n`.
//! The shuffle is driven by a small LCG so that a seed always produces the
//! same field, which keeps tests and replays reproducible.

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// Not suitable for anything but reproducible game setup.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 behaves like seed 1.
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish value in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below((i + 1) as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Pick `mines` distinct indices out of `0..cells`, sorted ascending.
///
/// `mines` is clamped to `cells`.
pub fn mine_indices(seed: u32, cells: usize, mines: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..cells).collect();
    SimpleRng::new(seed).shuffle(&mut indices);
    indices.truncate(mines.min(cells));
    indices.sort_unstable();
    indices
}
