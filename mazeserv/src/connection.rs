use std::sync::Arc;

use futures::stream::SplitSink;
use futures::SinkExt;
use mazelib::relay_protocol::RelayEvent;
use tokio::net::TcpStream;
use tokio::sync::RwLock;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;

/// Write half of one client's websocket. Multiple tasks may send on a
/// connection (the owning read loop, broadcasts, the roster timer), so the
/// sink lives behind a lock.
#[derive(Clone)]
pub struct Connection {
    sink: Arc<RwLock<SplitSink<WebSocketStream<TcpStream>, Message>>>,
}

impl Connection {
    pub fn new(sink: SplitSink<WebSocketStream<TcpStream>, Message>) -> Self {
        Self {
            sink: Arc::new(RwLock::new(sink)),
        }
    }

    pub async fn send(
        &self,
        event: &RelayEvent,
    ) -> Result<(), tokio_tungstenite::tungstenite::Error> {
        let txt = serde_json::to_string(event)
            .expect("relay events always serialize");
        let mut lk = self.sink.write().await;
        lk.send(Message::Text(txt)).await
    }
}
