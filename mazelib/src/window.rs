use crate::chunk::ChunkCoordinate;

/// Tracks the observer's current chunk and decides when the active window
/// must be recomputed. Sub-chunk movement never triggers work; only a
/// boundary crossing does.
pub struct WindowManager {
    view_distance: u32,
    // None doubles as the startup sentinel: it differs from every real
    // coordinate, so the next observe() always reports a crossing.
    current: Option<ChunkCoordinate>,
}

impl WindowManager {
    pub fn new(view_distance: u32) -> Self {
        Self {
            view_distance,
            current: None,
        }
    }

    pub fn view_distance(&self) -> u32 {
        self.view_distance
    }

    pub fn current_chunk(&self) -> Option<ChunkCoordinate> {
        self.current
    }

    /// Records the observer position. Returns the new chunk coordinate when
    /// the observer crossed a chunk boundary (or on the first call after
    /// construction or `force_update`), otherwise `None`.
    pub fn observe(&mut self, x: f64, z: f64, chunk_size: f64) -> Option<ChunkCoordinate> {
        let coord = ChunkCoordinate::from_world(x, z, chunk_size);
        if self.current == Some(coord) {
            return None;
        }
        self.current = Some(coord);
        Some(coord)
    }

    /// Forgets the remembered chunk so the next `observe` reports a
    /// crossing and the full window is reloaded. Used at startup.
    pub fn force_update(&mut self) {
        self.current = None;
    }

    /// The exact coordinate set that must be resident: the square of side
    /// 2 * view_distance + 1 centered on `center` (Chebyshev radius).
    pub fn window(&self, center: ChunkCoordinate) -> Vec<ChunkCoordinate> {
        let r = self.view_distance as i32;
        let mut coords = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
        for x in center.x - r..=center.x + r {
            for z in center.z - r..=center.z + r {
                coords.push(ChunkCoordinate::new(x, z));
            }
        }
        coords
    }
}
