use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use futures::StreamExt;
use mazelib::relay_protocol::PlayerId;
use mazelib::relay_protocol::RelayEvent;
use mazelib::relay_protocol::RelayRequest;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::sync::RwLock;
use tokio::task;
use tokio_tungstenite::tungstenite::Message;
use tracing::info;
use tracing::warn;

use crate::args;
use crate::connection::Connection;
use crate::registry::SessionRegistry;

/// Interval of the unconditional full-roster resync broadcast.
const ROSTER_RESYNC_INTERVAL: Duration = Duration::from_secs(5);

pub struct Server {
    listen_url: String,
    registry: Arc<RwLock<SessionRegistry>>,
    connections: Arc<RwLock<HashMap<PlayerId, Connection>>>,
}

impl Server {
    pub fn new(args: &args::Args) -> Self {
        Self {
            listen_url: format!("{}:{}", args.ip, args.port),
            registry: Arc::new(RwLock::new(SessionRegistry::new())),
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_url).await?;
        info!("relay listening on {}", self.listen_url);
        let sv = Arc::new(self);
        task::spawn(Self::roster_resync_task(sv.clone()));
        loop {
            let (stream, addr) = listener.accept().await?;
            info!("incoming connection from {}", addr);
            let sv = sv.clone();
            task::spawn(async move {
                Self::handle_connection(sv, stream).await;
            });
        }
    }

    /// Periodic `players` broadcast so clients that missed throttled moves
    /// reconverge. Skipped entirely while nobody is connected.
    async fn roster_resync_task(sv: Arc<Self>) {
        loop {
            tokio::time::sleep(ROSTER_RESYNC_INTERVAL).await;
            let roster = {
                let lk = sv.registry.read().await;
                if lk.is_empty() {
                    continue;
                }
                lk.roster()
            };
            sv.broadcast(None, &RelayEvent::Players { players: roster })
                .await;
        }
    }

    /// Sends an event to every connection except `skip`. A failed send is
    /// logged and left for that connection's own read loop to tear down.
    async fn broadcast(&self, skip: Option<PlayerId>, event: &RelayEvent) {
        let targets: Vec<(PlayerId, Connection)> = {
            let lk = self.connections.read().await;
            lk.iter()
                .filter(|(id, _)| Some(**id) != skip)
                .map(|(id, conn)| (*id, conn.clone()))
                .collect()
        };
        for (id, conn) in targets {
            if let Err(e) = conn.send(event).await {
                warn!("failed to send to player {}: {}", id, e);
            }
        }
    }

    async fn handle_connection(sv: Arc<Self>, stream: TcpStream) {
        let ws = match tokio_tungstenite::accept_async(stream).await {
            Ok(ws) => ws,
            Err(e) => {
                warn!("websocket handshake failed: {}", e);
                return;
            }
        };
        let (wsw, mut wsr) = ws.split();
        let conn = Connection::new(wsw);

        let player = sv.registry.write().await.connect();
        let id = player.id;
        info!("player {} joined", id);

        // The roster must be the newcomer's first event, so it goes out
        // before the connection becomes a broadcast target.
        let roster = sv.registry.read().await.roster();
        if let Err(e) = conn.send(&RelayEvent::Players { players: roster }).await {
            warn!("failed to send roster to player {}: {}", id, e);
        }
        sv.connections.write().await.insert(id, conn.clone());
        sv.broadcast(Some(id), &RelayEvent::PlayerJoined { player }).await;

        // Read loop until the peer goes away.
        while let Some(msg) = wsr.next().await {
            match msg {
                Ok(Message::Text(txt)) => match serde_json::from_str::<RelayRequest>(&txt) {
                    Ok(RelayRequest::Move { position, rotation }) => {
                        let (moved, claimed) = {
                            let mut lk = sv.registry.write().await;
                            let moved = lk.update_position(id, position, rotation);
                            let claimed = lk.try_claim_move_broadcast(Instant::now());
                            (moved, claimed)
                        };
                        if let Some(player) = moved {
                            if claimed {
                                sv.broadcast(Some(id), &RelayEvent::PlayerMoved { player })
                                    .await;
                            }
                        }
                    }
                    Err(e) => {
                        warn!("player {} sent an unparseable frame: {}", id, e);
                    }
                },
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("player {} connection error: {}", id, e);
                    break;
                }
            }
        }

        sv.registry.write().await.disconnect(id);
        sv.connections.write().await.remove(&id);
        sv.broadcast(None, &RelayEvent::PlayerLeft { id }).await;
        info!("player {} left", id);
    }
}
