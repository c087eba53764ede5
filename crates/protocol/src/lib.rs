//! Mashdash Protocol - shared types for server and client communication
//!
//! This crate contains all types exchanged over the game's WebSocket
//! connection: the intent/event envelopes and their payload records.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **One canonical envelope** - every frame is `{action, payload}`;
//!    frames using other shapes are rejected as malformed

pub mod messages;
pub mod types;

// =============================================================================
// WebSocket Message Types
// =============================================================================
pub use messages::{decode_event, encode_intent, ClientIntent, ErrorReason, ServerEvent, WireError};

pub use types::{AnswerSheet, PlayerAnswer, PromptDetails, RejoinSnapshot, ScoreDetail, VoteBallot};
