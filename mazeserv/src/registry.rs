use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

use mazelib::relay_protocol::PlayerId;
use mazelib::relay_protocol::PlayerPosition;
use mazelib::relay_protocol::PlayerState;

/// Minimum gap between outbound `player_moved` broadcasts. One shared
/// timestamp for the whole server, not per connection.
pub const MOVE_BROADCAST_INTERVAL: Duration = Duration::from_millis(50);

/// Explicit per-server session state: every live connection's player state,
/// the id allocator, and the shared move-broadcast throttle. Created once
/// at server start and passed around; holds no sockets so it can be tested
/// with injected instants.
pub struct SessionRegistry {
    players: HashMap<PlayerId, PlayerState>,
    next_id: PlayerId,
    last_move_broadcast: Option<Instant>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
            next_id: 1,
            last_move_broadcast: None,
        }
    }

    /// Registers a new connection and returns its spawn state.
    pub fn connect(&mut self) -> PlayerState {
        let id = self.next_id;
        self.next_id += 1;
        let state = PlayerState::spawn(id);
        self.players.insert(id, state.clone());
        state
    }

    /// Stores the reported position unconditionally; whether it gets
    /// broadcast is a separate throttle decision.
    pub fn update_position(
        &mut self,
        id: PlayerId,
        position: PlayerPosition,
        rotation: f64,
    ) -> Option<PlayerState> {
        let state = self.players.get_mut(&id)?;
        state.position = position;
        state.rotation = rotation;
        Some(state.clone())
    }

    /// Claims the shared move-broadcast slot. Returns true and stamps the
    /// throttle when enough time has passed since the last claim; a move
    /// arriving inside the window updates state but sends nothing.
    pub fn try_claim_move_broadcast(&mut self, now: Instant) -> bool {
        match self.last_move_broadcast {
            Some(last) if now.duration_since(last) < MOVE_BROADCAST_INTERVAL => false,
            _ => {
                self.last_move_broadcast = Some(now);
                true
            }
        }
    }

    pub fn disconnect(&mut self, id: PlayerId) -> bool {
        self.players.remove(&id).is_some()
    }

    /// Full roster in id order, for `players` events.
    pub fn roster(&self) -> Vec<PlayerState> {
        let mut players: Vec<PlayerState> = self.players.values().cloned().collect();
        players.sort_by_key(|p| p.id);
        players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_assigns_distinct_ids_and_spawn_state() {
        let mut reg = SessionRegistry::new();
        let a = reg.connect();
        let b = reg.connect();
        assert_ne!(a.id, b.id);
        assert_eq!((a.position.x, a.position.y, a.position.z), (0.0, 1.6, 0.0));
        assert_eq!(a.rotation, 0.0);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_update_position_is_unconditional() {
        let mut reg = SessionRegistry::new();
        let p = reg.connect();
        let moved = reg
            .update_position(
                p.id,
                PlayerPosition {
                    x: 10.0,
                    y: 1.6,
                    z: -3.0,
                },
                1.2,
            )
            .unwrap();
        assert_eq!(moved.position.x, 10.0);
        assert_eq!(moved.rotation, 1.2);
        assert_eq!(reg.roster()[0], moved);
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let mut reg = SessionRegistry::new();
        assert!(reg
            .update_position(
                99,
                PlayerPosition {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0
                },
                0.0
            )
            .is_none());
    }

    #[test]
    fn test_move_broadcast_throttle_is_shared() {
        let mut reg = SessionRegistry::new();
        let t0 = Instant::now();
        assert!(reg.try_claim_move_broadcast(t0));
        // Inside the window: state updates would proceed, broadcast denied,
        // regardless of which connection asks.
        assert!(!reg.try_claim_move_broadcast(t0 + Duration::from_millis(10)));
        assert!(!reg.try_claim_move_broadcast(t0 + Duration::from_millis(49)));
        assert!(reg.try_claim_move_broadcast(t0 + Duration::from_millis(50)));
        assert!(!reg.try_claim_move_broadcast(t0 + Duration::from_millis(70)));
    }

    #[test]
    fn test_disconnect_removes_state() {
        let mut reg = SessionRegistry::new();
        let p = reg.connect();
        assert!(reg.disconnect(p.id));
        assert!(!reg.disconnect(p.id));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_roster_is_id_ordered() {
        let mut reg = SessionRegistry::new();
        let a = reg.connect();
        let b = reg.connect();
        let c = reg.connect();
        reg.disconnect(b.id);
        let ids: Vec<_> = reg.roster().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_empty_registry_has_no_roster_to_send() {
        // Guard used by the periodic resync task: no connections, no
        // `players` broadcast.
        let reg = SessionRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.roster().is_empty());
    }
}
