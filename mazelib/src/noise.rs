use crate::rng::ChunkRng;

const TABLE_SIZE: usize = 256;

// Octave frequencies and weights for the combined layout signal.
const OCTAVES: [(f64, f64); 3] = [(0.05, 0.5), (0.1, 0.3), (0.2, 0.2)];

/// 2D value noise over a permutation table shuffled from a [`ChunkRng`].
///
/// Construction consumes a fixed number of PRNG draws, so a generator can
/// build the field and keep using the same rng for placement draws without
/// losing reproducibility.
pub struct NoiseField {
    perm: [u8; TABLE_SIZE * 2],
}

impl NoiseField {
    pub fn new(rng: &mut ChunkRng) -> Self {
        let mut table: [u8; TABLE_SIZE] = [0; TABLE_SIZE];
        for (i, v) in table.iter_mut().enumerate() {
            *v = i as u8;
        }
        // Fisher-Yates, always exactly TABLE_SIZE - 1 draws.
        for i in (1..TABLE_SIZE).rev() {
            let j = (rng.next() * (i + 1) as f64) as usize % (i + 1);
            table.swap(i, j);
        }
        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(&table);
        perm[TABLE_SIZE..].copy_from_slice(&table);
        Self { perm }
    }

    fn lattice(&self, xi: i64, zi: i64) -> f64 {
        let xw = (xi & 255) as usize;
        let zw = (zi & 255) as usize;
        let h = self.perm[self.perm[xw] as usize + zw];
        h as f64 / 127.5 - 1.0
    }

    /// Smooth scalar field in [-1, 1], defined for any real (x, z).
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        let xf = x.floor();
        let zf = z.floor();
        let xi = xf as i64;
        let zi = zf as i64;
        let tx = fade(x - xf);
        let tz = fade(z - zf);
        let v00 = self.lattice(xi, zi);
        let v10 = self.lattice(xi + 1, zi);
        let v01 = self.lattice(xi, zi + 1);
        let v11 = self.lattice(xi + 1, zi + 1);
        let a = lerp(v00, v10, tx);
        let b = lerp(v01, v11, tx);
        lerp(a, b, tz)
    }

    /// Multi-octave combination used for wall/pillar layout. The coarse
    /// band dominates so corridors meander instead of forming a lattice.
    pub fn layout_signal(&self, x: f64, z: f64) -> f64 {
        OCTAVES
            .iter()
            .map(|(freq, weight)| weight * self.sample(x * freq, z * freq))
            .sum()
    }
}

fn fade(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
