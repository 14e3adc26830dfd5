use tracing::debug;

use crate::chunk::Chunk;
use crate::chunk::ChunkCoordinate;
use crate::chunk_generator::ChunkGenerator;
use crate::chunk_generator::MazeGenerator;
use crate::chunk_map::ChunkMap;
use crate::config::ConfigError;
use crate::config::WorldConfig;
use crate::window::WindowManager;

/// Boundary to the rendering collaborator. Loaded geometry is handed over
/// here; on unload the collaborator must drop every display resource it
/// created for that coordinate.
pub trait ChunkObserver {
    fn chunk_loaded(&mut self, chunk: &Chunk);
    fn chunk_unloaded(&mut self, coord: ChunkCoordinate);
}

/// No-op observer for hosts that only want the store side effects.
impl ChunkObserver for () {
    fn chunk_loaded(&mut self, _chunk: &Chunk) {}
    fn chunk_unloaded(&mut self, _coord: ChunkCoordinate) {}
}

/// One world session: config, generator, the owning chunk map and the
/// window manager that drives streaming. Single-threaded by design; a
/// render loop calls `update` once per frame.
pub struct GameWorld {
    config: WorldConfig,
    generator: Box<dyn ChunkGenerator>,
    chunks: ChunkMap,
    window: WindowManager,
}

pub struct GameWorldBuilder {
    config: WorldConfig,
    generator: Box<dyn ChunkGenerator>,
}

impl GameWorldBuilder {
    pub fn new() -> Self {
        Self {
            config: WorldConfig::default(),
            generator: Box::new(MazeGenerator::new()),
        }
    }

    pub fn with_config(mut self, config: WorldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_generator(mut self, generator: Box<dyn ChunkGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Validates the config here so generation never has to.
    pub fn build(self) -> Result<GameWorld, ConfigError> {
        self.config.validate()?;
        let window = WindowManager::new(self.config.view_distance);
        Ok(GameWorld {
            config: self.config,
            generator: self.generator,
            chunks: ChunkMap::new(),
            window,
        })
    }
}

impl Default for GameWorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameWorld {
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn chunk_map(&self) -> &ChunkMap {
        &self.chunks
    }

    pub fn current_chunk(&self) -> Option<ChunkCoordinate> {
        self.window.current_chunk()
    }

    /// Guarantees the next `update` call performs a full window load,
    /// regardless of where the observer was last seen.
    pub fn force_update(&mut self) {
        self.window.force_update();
    }

    /// Per-frame entry point. Diffs the required window against residency
    /// only when the observer's chunk coordinate changed; loads every
    /// missing coordinate, then unloads every resident coordinate that
    /// fell outside the window. Afterwards the resident set equals the
    /// active window exactly.
    pub fn update(&mut self, x: f64, z: f64, observer: &mut dyn ChunkObserver) {
        let center = match self.window.observe(x, z, self.config.chunk_size) {
            Some(center) => center,
            None => return,
        };
        debug!("observer entered chunk ({}, {})", center.x, center.z);

        let required = self.window.window(center);
        for coord in &required {
            let (chunk, fresh) = self.chunks.load(*coord, self.generator.as_ref(), &self.config);
            if fresh {
                observer.chunk_loaded(chunk);
            }
        }

        let resident = self.chunks.snapshot();
        for coord in resident {
            if !required.contains(&coord) {
                if self.chunks.unload(coord).is_some() {
                    observer.chunk_unloaded(coord);
                }
            }
        }
    }
}
