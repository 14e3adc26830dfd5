use clap::Parser;
use mazelib::chunk::Chunk;
use mazelib::chunk::ChunkCoordinate;
use mazelib::config::WorldConfig;
use mazelib::game_world::ChunkObserver;
use mazelib::game_world::GameWorldBuilder;
use mazelib::relay_protocol::PlayerPosition;
use mazelib::relay_protocol::SPAWN_Y;
use tracing::info;
use tracing::warn;
mod args;
mod connection;

/// Stand-in for the rendering collaborator: logs what it would add to and
/// remove from the scene graph.
#[derive(Default)]
struct LoggingObserver {
    loads: u64,
    unloads: u64,
}

impl ChunkObserver for LoggingObserver {
    fn chunk_loaded(&mut self, chunk: &Chunk) {
        self.loads += 1;
        let c = chunk.coord();
        info!(
            "loaded chunk ({}, {}) with {} elements",
            c.x,
            c.z,
            chunk.elements().len()
        );
    }
    fn chunk_unloaded(&mut self, coord: ChunkCoordinate) {
        self.unloads += 1;
        info!("unloaded chunk ({}, {})", coord.x, coord.z);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = args::Args::parse();

    let config = WorldConfig {
        seed: args.seed,
        view_distance: args.view_distance,
        ..WorldConfig::default()
    };
    let mut world = GameWorldBuilder::new().with_config(config).build()?;
    let mut observer = LoggingObserver::default();

    let mut relay = if args.local_only {
        connection::Connection::new_dont_start()
    } else {
        let url = format!("ws://{}:{}", args.ip, args.port);
        match connection::Connection::new(&url).await {
            Ok(conn) => {
                info!("connected to relay at {}", url);
                conn
            }
            Err(e) => {
                // Streaming never depends on the relay being up.
                warn!("relay unreachable ({}), running local-only", e);
                connection::Connection::new_dont_start()
            }
        }
    };

    if !relay.is_connected() {
        info!("no relay link, peers will not see this observer");
    }

    world.force_update();
    let mut x = 0.0;
    for _ in 0..args.frames {
        world.update(x, 0.0, &mut observer);
        relay
            .send_move(
                PlayerPosition {
                    x,
                    y: SPAWN_Y,
                    z: 0.0,
                },
                0.0,
            )
            .await;
        for event in relay.drain_events().await {
            info!("relay event: {:?}", event);
        }
        x += args.step;
        tokio::time::sleep(std::time::Duration::from_millis(args.frame_ms)).await;
    }

    info!(
        "walked {:.1} units: {} loads, {} unloads, {} chunks resident",
        x,
        observer.loads,
        observer.unloads,
        world.chunk_map().len()
    );
    Ok(())
}
