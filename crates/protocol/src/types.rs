//! Payload records carried inside the wire envelopes.
//!
//! Field names are camelCase on the wire (the server speaks the
//! browser convention); structs here stay snake_case.

use serde::{Deserialize, Serialize};

use crate::messages::ServerEvent;

// =============================================================================
// Rejoin & Round Types
// =============================================================================

/// Full game snapshot sent in acknowledgment of a `re-join` intent.
///
/// `next` optionally carries a queued state update the server wants the
/// client to apply atomically with the rejoin acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejoinSnapshot {
    pub name: String,
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub creator: bool,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub responses_received: Option<u32>,
    #[serde(default)]
    pub next: Option<Box<ServerEvent>>,
}

/// Round details accompanying the `dasher` and `pls-answer` events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDetails {
    /// Whether the server already holds an answer from this player
    #[serde(default)]
    pub answer_received: bool,
    /// How many answers the server has collected so far (dasher view)
    #[serde(default)]
    pub responses_received: Option<u32>,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// =============================================================================
// Reading & Scoring Types
// =============================================================================

/// One collected answer with the names of the players who voted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnswer {
    pub name: String,
    pub answer: String,
    #[serde(default)]
    pub votes: Vec<String>,
}

/// Everything the dasher needs for the reading stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSheet {
    #[serde(default)]
    pub answers: Vec<PlayerAnswer>,
    /// Players who have not voted yet
    #[serde(default)]
    pub yet_to_vote: Vec<String>,
}

/// Per-player score breakdown for the scoring stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetail {
    pub name: String,
    pub points: i32,
    #[serde(default)]
    pub details: Vec<String>,
}

/// A vote recorded by the dasher: `who` voted for `voted_for`'s answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteBallot {
    pub who: String,
    pub voted_for: String,
}
