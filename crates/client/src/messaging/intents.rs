//! Intent API: the single entry point for user/application intents.
//!
//! A thin façade over the [`MessageBus`]; everything that wants the
//! server to do something goes through here, so the bus sees intents in
//! the order they were issued.

use mashdash_protocol::{ClientIntent, ServerEvent};

use super::bus::{AppMessage, MessageBus};

/// Translates intents into bus posts.
#[derive(Clone)]
pub struct IntentApi {
    bus: MessageBus,
}

impl IntentApi {
    pub fn new(bus: MessageBus) -> Self {
        Self { bus }
    }

    /// Send an intent to the server (queued while disconnected).
    pub fn send_data(&self, intent: ClientIntent) {
        self.bus.post(&AppMessage::SendData(intent));
    }

    /// Inject an event as if the server had sent it.
    ///
    /// Used to replay the `next` event chained onto a `re-joined`
    /// acknowledgment, and by tests.
    pub fn mock_data(&self, event: ServerEvent) {
        self.bus.post(&AppMessage::MockData(event));
    }

    /// Re-open the transport connection and re-announce the cached
    /// identity once it is up.
    pub fn reconnect(&self, player_id: Option<String>) {
        self.bus.post(&AppMessage::Reconnect(player_id));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recording_api() -> (IntentApi, Arc<Mutex<Vec<AppMessage>>>) {
        let bus = MessageBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = Arc::clone(&log);
        bus.register(move |msg| {
            log_clone.lock().expect("lock").push(msg.clone());
            Ok(())
        });
        (IntentApi::new(bus), log)
    }

    #[test]
    fn send_data_posts_a_send_message() {
        let (api, log) = recording_api();
        api.send_data(ClientIntent::Identify("miriam".into()));
        assert_eq!(
            log.lock().expect("lock").as_slice(),
            &[AppMessage::SendData(ClientIntent::Identify(
                "miriam".into()
            ))]
        );
    }

    #[test]
    fn reconnect_carries_the_cached_identity() {
        let (api, log) = recording_api();
        api.reconnect(Some("abc-123".into()));
        assert_eq!(
            log.lock().expect("lock").as_slice(),
            &[AppMessage::Reconnect(Some("abc-123".into()))]
        );
    }
}
