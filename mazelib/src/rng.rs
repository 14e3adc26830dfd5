const MODULUS_MASK: u32 = 0x7fff_ffff;
const MULTIPLIER: u32 = 1103515245;
const INCREMENT: u32 = 12345;

/// Linear-congruential source of reproducible floats.
///
/// Every placement decision in chunk generation draws from one of these,
/// seeded from the chunk coordinate, so the draw sequence (and therefore
/// the chunk) is identical across processes. The call order is part of
/// the generation contract.
pub struct ChunkRng {
    state: u32,
}

impl ChunkRng {
    pub fn new(seed: i32) -> Self {
        Self {
            state: seed as u32 & MODULUS_MASK,
        }
    }

    /// Next value in [0, 1].
    pub fn next(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        self.state as f64 / MODULUS_MASK as f64
    }
}
