use serde::Deserialize;
use serde::Serialize;

/// Integer index of a chunk in chunk-space, distinct from continuous world
/// coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoordinate {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoordinate {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the given world-space position.
    pub fn from_world(x: f64, z: f64, chunk_size: f64) -> Self {
        Self {
            x: (x / chunk_size).floor() as i32,
            z: (z / chunk_size).floor() as i32,
        }
    }

    /// World-space position of this chunk's minimum corner.
    pub fn world_origin(&self, chunk_size: f64) -> (f64, f64) {
        (self.x as f64 * chunk_size, self.z as f64 * chunk_size)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightIntensity {
    Normal,
    Dim,
}

/// One structural element of a chunk. Positions are chunk-local.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Element {
    Floor {
        size: f64,
    },
    Ceiling {
        size: f64,
        height: f64,
    },
    Wall {
        x: f64,
        z: f64,
        length: f64,
        height: f64,
        rotation: Rotation,
    },
    Pillar {
        x: f64,
        z: f64,
        height: f64,
    },
    Light {
        x: f64,
        z: f64,
        intensity: LightIntensity,
    },
}

/// A generated chunk: coordinate plus its ordered structural elements.
/// Built exactly once per load and immutable afterwards; the chunk map
/// exclusively owns it between load and unload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chunk {
    coord: ChunkCoordinate,
    elements: Vec<Element>,
}

impl Chunk {
    pub fn new(coord: ChunkCoordinate, elements: Vec<Element>) -> Self {
        Self { coord, elements }
    }

    pub fn coord(&self) -> ChunkCoordinate {
        self.coord
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
