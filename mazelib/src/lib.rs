pub mod chunk;
pub mod chunk_generator;
pub mod chunk_map;
pub mod config;
pub mod game_world;
pub mod hash;
pub mod noise;
pub mod relay_protocol;
pub mod rng;
pub mod window;
