use crate::chunk::Chunk;
use crate::chunk::ChunkCoordinate;
use crate::chunk::Element;
use crate::chunk::LightIntensity;
use crate::chunk::Rotation;
use crate::config::WorldConfig;
use crate::hash;
use crate::noise::NoiseField;
use crate::rng::ChunkRng;

/// Seam for swapping generation strategies; implementations must be pure
/// functions of (coordinate, config) so chunks can be rebuilt anywhere.
/// `Send + Sync` so a worker pool can run generation off-thread if a host
/// ever wants to.
pub trait ChunkGenerator: Send + Sync {
    fn generate_chunk(&self, coord: ChunkCoordinate, config: &WorldConfig) -> Chunk;
}

// Cells per chunk axis for wall/pillar layout.
const GRID: usize = 4;
// World-unit spacing of the ceiling light lattice.
const LIGHT_SPACING: f64 = 8.0;

const PILLAR_GATE: f64 = 0.92;
const LIGHT_SKIP_CHANCE: f64 = 0.15;
const LIGHT_DIM_CHANCE: f64 = 0.10;

/// Signal cutoff above which a cell spawns a wall. Drops with distance from
/// the world origin so the maze tightens the farther out an observer walks,
/// bottoming out at -0.05.
pub fn wall_threshold(distance_from_origin: f64) -> f64 {
    0.1 - (distance_from_origin * 0.02).min(0.15)
}

/// Noise-driven maze layout: open rooms near the origin, denser walls and
/// pillars farther out, lights on a regular lattice with occasional gaps.
#[derive(Debug)]
pub struct MazeGenerator {}

impl MazeGenerator {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkGenerator for MazeGenerator {
    // Draw order is part of the contract: noise table first, then the
    // row-major cell sweep (wall draws, pillar gate, pillar position),
    // then the light sweep. Reordering draws changes every chunk.
    fn generate_chunk(&self, coord: ChunkCoordinate, config: &WorldConfig) -> Chunk {
        let chunk_seed = hash::chunk_hash(coord.x, coord.z, config.seed);
        let mut rng = ChunkRng::new(chunk_seed);
        let noise = NoiseField::new(&mut rng);

        let size = config.chunk_size;
        let (origin_x, origin_z) = coord.world_origin(size);
        let cell = size / GRID as f64;

        let mut elements = Vec::new();
        elements.push(Element::Floor { size });
        elements.push(Element::Ceiling {
            size,
            height: config.wall_height,
        });

        for gx in 0..GRID {
            for gz in 0..GRID {
                let local_x = (gx as f64 + 0.5) * cell;
                let local_z = (gz as f64 + 0.5) * cell;
                let world_x = origin_x + local_x;
                let world_z = origin_z + local_z;

                let signal = noise.layout_signal(world_x, world_z);
                let distance = (world_x * world_x + world_z * world_z).sqrt();
                if signal > wall_threshold(distance) {
                    let length = (0.5 + rng.next() * 0.5) * cell;
                    let rotation = if rng.next() > 0.5 {
                        Rotation::Deg90
                    } else {
                        Rotation::Deg0
                    };
                    elements.push(Element::Wall {
                        x: local_x,
                        z: local_z,
                        length,
                        height: config.wall_height,
                        rotation,
                    });
                }

                if rng.next() > PILLAR_GATE {
                    let px = gx as f64 * cell + rng.next() * cell;
                    let pz = gz as f64 * cell + rng.next() * cell;
                    elements.push(Element::Pillar {
                        x: px,
                        z: pz,
                        height: config.wall_height,
                    });
                }
            }
        }

        // Light lattice at half-spacing offset; some fixtures are burnt out.
        let mut lx = LIGHT_SPACING / 2.0;
        while lx < size {
            let mut lz = LIGHT_SPACING / 2.0;
            while lz < size {
                if rng.next() >= LIGHT_SKIP_CHANCE {
                    let intensity = if rng.next() < LIGHT_DIM_CHANCE {
                        LightIntensity::Dim
                    } else {
                        LightIntensity::Normal
                    };
                    elements.push(Element::Light {
                        x: lx,
                        z: lz,
                        intensity,
                    });
                }
                lz += LIGHT_SPACING;
            }
            lx += LIGHT_SPACING;
        }

        Chunk::new(coord, elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WorldConfig {
        WorldConfig::default()
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = MazeGenerator::new();
        for (x, z) in [(0, 0), (1, 0), (-3, 7), (100, -250)] {
            let coord = ChunkCoordinate::new(x, z);
            let a = generator.generate_chunk(coord, &config());
            let b = generator.generate_chunk(coord, &config());
            assert_eq!(a, b, "chunk ({}, {}) not reproducible", x, z);
        }
    }

    #[test]
    fn test_two_generators_agree() {
        // Two independent observers must derive bit-identical geometry.
        let coord = ChunkCoordinate::new(-12, 34);
        let a = MazeGenerator::new().generate_chunk(coord, &config());
        let b = MazeGenerator::new().generate_chunk(coord, &config());
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_layout() {
        let coord = ChunkCoordinate::new(2, 3);
        let mut other = config();
        other.seed = 43;
        let a = MazeGenerator::new().generate_chunk(coord, &config());
        let b = MazeGenerator::new().generate_chunk(coord, &other);
        assert_ne!(a, b);
    }

    #[test]
    fn test_floor_and_ceiling_come_first() {
        let chunk = MazeGenerator::new().generate_chunk(ChunkCoordinate::new(5, -5), &config());
        match chunk.elements() {
            [Element::Floor { size }, Element::Ceiling { height, .. }, ..] => {
                assert_eq!(*size, 32.0);
                assert_eq!(*height, 3.0);
            }
            other => panic!("expected floor then ceiling, got {:?}", &other[..2]),
        }
    }

    #[test]
    fn test_threshold_is_monotonic_in_distance() {
        let mut prev = wall_threshold(0.0);
        for step in 1..200 {
            let t = wall_threshold(step as f64 * 0.5);
            assert!(t <= prev, "threshold rose with distance");
            prev = t;
        }
    }

    #[test]
    fn test_threshold_clamps_at_floor() {
        assert_eq!(wall_threshold(0.0), 0.1);
        assert_eq!(wall_threshold(10_000.0), -0.05);
    }

    #[test]
    fn test_light_lattice_is_bounded() {
        let chunk = MazeGenerator::new().generate_chunk(ChunkCoordinate::new(0, 0), &config());
        let lights = chunk
            .elements()
            .iter()
            .filter(|e| matches!(e, Element::Light { .. }))
            .count();
        // 32 / 8 = 4 lattice points per axis, minus burnt-out fixtures.
        assert!(lights <= 16);
    }

    #[test]
    fn test_wall_lengths_within_cell_bounds() {
        let generator = MazeGenerator::new();
        for x in -5..5 {
            for z in -5..5 {
                let chunk = generator.generate_chunk(ChunkCoordinate::new(x, z), &config());
                for e in chunk.elements() {
                    if let Element::Wall { length, .. } = e {
                        assert!((4.0..=8.0).contains(length), "wall length {}", length);
                    }
                }
            }
        }
    }
}
