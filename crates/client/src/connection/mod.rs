//! Connection manager: transport lifecycle, outbound queue, signals.
//!
//! `core` holds the runtime-agnostic state and queue rules; `client`
//! owns the actual WebSocket and drives the core.

pub mod client;
pub mod core;

pub use client::{ConnectionManager, ConnectionSignal, RETRY_NOTIFY_DELAY_MS};
pub use core::{ConnectionCore, ConnectionState, SendDisposition};
