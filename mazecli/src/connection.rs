use futures::FutureExt;
use futures::SinkExt;
use futures::StreamExt;
use mazelib::relay_protocol::PlayerPosition;
use mazelib::relay_protocol::RelayEvent;
use mazelib::relay_protocol::RelayRequest;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use tracing::warn;

/// Best-effort relay link. `None` means local-only mode: every operation
/// becomes a no-op and chunk streaming carries on without it.
pub struct Connection {
    ws: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

impl Connection {
    pub async fn new(url: &str) -> Result<Self, tokio_tungstenite::tungstenite::Error> {
        Ok(Self {
            ws: Some(tokio_tungstenite::connect_async(url).await?.0),
        })
    }

    pub fn new_dont_start() -> Self {
        Self { ws: None }
    }

    pub fn is_connected(&self) -> bool {
        self.ws.is_some()
    }

    /// Reports the observer position. A send failure downgrades to
    /// local-only instead of propagating.
    pub async fn send_move(&mut self, position: PlayerPosition, rotation: f64) {
        let Some(ws) = self.ws.as_mut() else {
            return;
        };
        let req = RelayRequest::Move { position, rotation };
        let txt = serde_json::to_string(&req).expect("relay requests always serialize");
        if let Err(e) = ws.send(Message::Text(txt)).await {
            warn!("relay send failed ({}), continuing local-only", e);
            self.ws = None;
        }
    }

    /// Drains whatever events are already buffered without blocking
    /// the frame loop.
    pub async fn drain_events(&mut self) -> Vec<RelayEvent> {
        let mut events = Vec::new();
        let Some(ws) = self.ws.as_mut() else {
            return events;
        };
        loop {
            match ws.next().now_or_never() {
                Some(Some(Ok(Message::Text(txt)))) => {
                    match serde_json::from_str::<RelayEvent>(&txt) {
                        Ok(event) => events.push(event),
                        Err(e) => warn!("unparseable relay event: {}", e),
                    }
                }
                Some(Some(Ok(_))) => {}
                Some(Some(Err(e))) => {
                    warn!("relay read failed ({}), continuing local-only", e);
                    self.ws = None;
                    break;
                }
                Some(None) => {
                    warn!("relay closed the connection, continuing local-only");
                    self.ws = None;
                    break;
                }
                None => break,
            }
        }
        events
    }
}
