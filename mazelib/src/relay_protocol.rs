//! Wire contract of the position relay. The channel carries observer
//! positions only, never world or chunk data; deterministic generation
//! makes world synchronization unnecessary.

use serde::Deserialize;
use serde::Serialize;

/// Connection-assigned identifier.
pub type PlayerId = u64;

pub const SPAWN_Y: f64 = 1.6;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub id: PlayerId,
    pub position: PlayerPosition,
    /// Yaw in radians; the relay carries no pitch or roll.
    pub rotation: f64,
}

impl PlayerState {
    /// State every connection starts from.
    pub fn spawn(id: PlayerId) -> Self {
        Self {
            id,
            position: PlayerPosition {
                x: 0.0,
                y: SPAWN_Y,
                z: 0.0,
            },
            rotation: 0.0,
        }
    }
}

/// Client -> server messages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayRequest {
    Move {
        position: PlayerPosition,
        rotation: f64,
    },
}

/// Server -> client messages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayEvent {
    /// Full roster; sent on connect and periodically for resync.
    Players { players: Vec<PlayerState> },
    PlayerJoined { player: PlayerState },
    PlayerMoved { player: PlayerState },
    PlayerLeft { id: PlayerId },
}
