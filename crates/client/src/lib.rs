//! Client synchronization engine for a party word game.
//!
//! The engine sits between a WebSocket game server and a presentation
//! layer. Four parts cooperate:
//!
//! - [`messaging`]: an ordered in-process message bus plus the intent
//!   API everything posts through
//! - [`connection`]: a task owning the WebSocket, with queue-while-
//!   disconnected and consumer-driven reconnect
//! - [`stage`]: the game-stage state machine publishing `(Stage,
//!   GameSnapshot)` views over a watch channel
//! - [`storage`]: the small persistent cache for the identity token and
//!   the draft answer
//!
//! [`app::App`] is the composition root tying them together.

pub mod app;
pub mod config;
pub mod connection;
pub mod error;
pub mod messaging;
pub mod stage;
pub mod storage;

pub use app::App;
pub use config::ClientConfig;
pub use error::ClientError;
pub use stage::{GameSnapshot, Stage, StageView};
