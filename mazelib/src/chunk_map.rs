use std::collections::HashMap;
use std::collections::HashSet;

use crate::chunk::Chunk;
use crate::chunk::ChunkCoordinate;
use crate::chunk_generator::ChunkGenerator;
use crate::config::WorldConfig;

/// Sole owner of all live chunks, keyed by coordinate. All mutation goes
/// through `load`/`unload`; nothing else holds a chunk between those calls.
pub struct ChunkMap {
    chunks: HashMap<ChunkCoordinate, Chunk>,
}

impl ChunkMap {
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
        }
    }

    /// Returns the chunk for `coord`, generating it only if absent. The
    /// bool is true when generation actually ran; a resident chunk is
    /// returned unchanged, never rebuilt.
    pub fn load(
        &mut self,
        coord: ChunkCoordinate,
        generator: &dyn ChunkGenerator,
        config: &WorldConfig,
    ) -> (&Chunk, bool) {
        match self.chunks.entry(coord) {
            std::collections::hash_map::Entry::Occupied(entry) => (entry.into_mut(), false),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let chunk = generator.generate_chunk(coord, config);
                (entry.insert(chunk), true)
            }
        }
    }

    /// Removes and returns the chunk at `coord`. Unloading an absent
    /// coordinate is a no-op, not an error.
    pub fn unload(&mut self, coord: ChunkCoordinate) -> Option<Chunk> {
        self.chunks.remove(&coord)
    }

    pub fn get(&self, coord: ChunkCoordinate) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains(&self, coord: ChunkCoordinate) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Coordinates currently resident.
    pub fn snapshot(&self) -> HashSet<ChunkCoordinate> {
        self.chunks.keys().copied().collect()
    }
}

impl Default for ChunkMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl ChunkGenerator for CountingGenerator {
        fn generate_chunk(&self, coord: ChunkCoordinate, _config: &WorldConfig) -> Chunk {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Chunk::new(coord, Vec::new())
        }
    }

    fn counting() -> CountingGenerator {
        CountingGenerator {
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_load_generates_once_per_coordinate() {
        let generator = counting();
        let config = WorldConfig::default();
        let mut map = ChunkMap::new();
        let coord = ChunkCoordinate::new(4, -4);
        let (_, fresh) = map.load(coord, &generator, &config);
        assert!(fresh);
        let (_, fresh) = map.load(coord, &generator, &config);
        assert!(!fresh);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unload_is_idempotent() {
        let generator = counting();
        let config = WorldConfig::default();
        let mut map = ChunkMap::new();
        let coord = ChunkCoordinate::new(0, 0);
        map.load(coord, &generator, &config);
        assert!(map.unload(coord).is_some());
        assert!(map.unload(coord).is_none());
        assert!(map.unload(ChunkCoordinate::new(9, 9)).is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_snapshot_tracks_residency() {
        let generator = counting();
        let config = WorldConfig::default();
        let mut map = ChunkMap::new();
        for x in 0..3 {
            map.load(ChunkCoordinate::new(x, 0), &generator, &config);
        }
        assert_eq!(map.len(), 3);
        assert!(map.contains(ChunkCoordinate::new(2, 0)));
        map.unload(ChunkCoordinate::new(1, 0));
        let snap = map.snapshot();
        assert_eq!(snap.len(), 2);
        assert!(!snap.contains(&ChunkCoordinate::new(1, 0)));
    }
}
