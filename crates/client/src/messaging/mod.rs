//! Intent routing: the Message Bus and the Intent API façade.

pub mod bus;
pub mod intents;

pub use bus::{AppMessage, HandlerId, MessageBus};
pub use intents::IntentApi;
