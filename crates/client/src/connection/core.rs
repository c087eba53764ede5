//! Platform-agnostic core logic for the connection manager.
//!
//! This is deliberately free of any runtime dependencies (tokio,
//! tungstenite). The socket client owns the actual transport and calls
//! into this core for the state transitions and the outbound queue, so
//! the ordering and reconnect rules can be tested without a socket.

use std::collections::VecDeque;

use mashdash_protocol::ClientIntent;

/// Transport connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// A connection attempt is in flight
    Connecting,
    /// Connected; sends go straight to the transport
    Open,
    /// No connection
    #[default]
    Closed,
}

/// What the caller should do with an intent handed to [`ConnectionCore::accept`].
#[derive(Debug, Clone, PartialEq)]
pub enum SendDisposition {
    /// Connection is open: serialize and transmit now
    Transmit(ClientIntent),
    /// Connection is down: the intent was queued for the next flush
    Queued,
}

/// Connection state plus the outbound FIFO queue.
///
/// Invariants:
/// - queued intents are flushed in the exact order they were accepted
/// - `requires_reconnect` is true from the moment a connection drops or
///   an attempt fails until the next attempt succeeds
#[derive(Debug, Default)]
pub struct ConnectionCore {
    state: ConnectionState,
    requires_reconnect: bool,
    queue: VecDeque<ClientIntent>,
}

impl ConnectionCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn requires_reconnect(&self) -> bool {
        self.requires_reconnect
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// A connection attempt has started.
    pub fn begin_connect(&mut self) {
        self.state = ConnectionState::Connecting;
    }

    /// The connection is up. Returns the queued intents to flush, in
    /// FIFO order, one transport send per element.
    #[must_use]
    pub fn opened(&mut self) -> Vec<ClientIntent> {
        self.state = ConnectionState::Open;
        self.requires_reconnect = false;
        self.queue.drain(..).collect()
    }

    /// The connection dropped or an attempt failed.
    pub fn closed(&mut self) {
        self.state = ConnectionState::Closed;
        self.requires_reconnect = true;
    }

    /// Route an outbound intent: transmit when open, queue otherwise.
    ///
    /// A `re-join` supersedes any already-queued `re-join`: each failed
    /// reconnect cycle issues a fresh one, and replaying a stack of
    /// stale re-joins on recovery would be wrong as well as noisy.
    pub fn accept(&mut self, intent: ClientIntent) -> SendDisposition {
        match self.state {
            ConnectionState::Open => SendDisposition::Transmit(intent),
            ConnectionState::Connecting | ConnectionState::Closed => {
                if matches!(intent, ClientIntent::ReJoin(_)) {
                    self.queue
                        .retain(|queued| !matches!(queued, ClientIntent::ReJoin(_)));
                }
                self.queue.push_back(intent);
                SendDisposition::Queued
            }
        }
    }
}
