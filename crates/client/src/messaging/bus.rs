//! Message Bus: synchronous, ordered publish/subscribe.
//!
//! Every intent in the system flows through [`MessageBus::post`], which
//! delivers the message to all registered handlers in registration
//! order before returning control to the poster. Delivery is strictly
//! sequential; a failing handler is logged and does not prevent
//! delivery to the handlers after it.
//!
//! Handlers must not post to the bus from inside their own invocation;
//! the handler list is locked for the duration of a `post`.

use std::sync::{Arc, Mutex};

use mashdash_protocol::{ClientIntent, ServerEvent};

/// A message travelling over the bus: a user/application intent.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// Serialize and transmit an intent to the server (queued while
    /// the connection is down)
    SendData(ClientIntent),
    /// Feed an event into the client as if the server had sent it;
    /// used for the `re-joined` chained `next` replay and for tests
    MockData(ServerEvent),
    /// Re-open the transport connection; the payload is the cached
    /// identity token to re-announce once the connection is up
    Reconnect(Option<String>),
}

/// Identifier returned by [`MessageBus::register`].
///
/// Handlers are never auto-removed; the id exists so consumers can
/// assert registration order.
pub type HandlerId = usize;

type Handler = Box<dyn FnMut(&AppMessage) -> anyhow::Result<()> + Send>;

/// Synchronous ordered publish/subscribe router.
///
/// Cheap to clone and share; all clones deliver to the same handlers.
#[derive(Clone, Default)]
pub struct MessageBus {
    handlers: Arc<Mutex<Vec<Handler>>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler. Handlers receive every subsequent post, in the
    /// order they were registered.
    pub fn register(
        &self,
        handler: impl FnMut(&AppMessage) -> anyhow::Result<()> + Send + 'static,
    ) -> HandlerId {
        let mut handlers = match self.handlers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        handlers.push(Box::new(handler));
        handlers.len() - 1
    }

    /// Deliver `message` to every registered handler, then return.
    ///
    /// A handler error is surfaced as a log line only; the poster never
    /// observes it and later handlers still run.
    pub fn post(&self, message: &AppMessage) {
        let mut handlers = match self.handlers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (id, handler) in handlers.iter_mut().enumerate() {
            if let Err(e) = handler(message) {
                tracing::warn!(handler = id, "bus handler failed: {:#}", e);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().map(|g| g.len()).unwrap_or(0)
    }
}
