//! WebSocket message types for server-client communication
//!
//! This module contains the two message alphabets exchanged over the
//! WebSocket connection: `ClientIntent` (client -> server) and
//! `ServerEvent` (server -> client). Both use the same envelope shape
//! on the wire:
//!
//! ```json
//! { "action": "<kebab-case tag>", "payload": <tag-specific payload> }
//! ```
//!
//! Intents with no payload omit the `payload` field entirely.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Removing or renaming variants is a breaking change
//! - Unknown `error` reasons deserialize to `ErrorReason::Unknown`

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AnswerSheet, PromptDetails, RejoinSnapshot, ScoreDetail, VoteBallot};

/// Error produced when a wire frame cannot be encoded or decoded.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// Client Intents (Client -> Server)
// =============================================================================

/// Intents from the client to the game server.
///
/// An intent is a request for the server to perform a game action; the
/// server answers with one or more [`ServerEvent`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "kebab-case")]
pub enum ClientIntent {
    /// Re-announce a previously assigned identity after a reconnect
    ReJoin(String),
    /// Introduce this player by name; the server replies with `got-name`
    Identify(String),
    /// Create a new game, making this player the creator
    Create,
    /// Join an existing game by its code
    Join(String),
    /// Start the game (creator only); doubles as "next round"
    Start,
    /// Submit or revise the player's answer for the current round
    Answer(String),
    /// Leave the current game
    Leave,
    /// Dasher changed the round category
    CategoryChange(String),
    /// Dasher changed the round clue
    ClueChange(String),
    /// Dasher records a vote for an answer
    AddVote(VoteBallot),
    /// Dasher withdraws a player's vote
    RemoveVote(String),
    /// End the round and ask the server to compute scores
    CalculateScores,
}

// =============================================================================
// Server Events (Server -> Client)
// =============================================================================

/// Events from the game server driving client state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A request could not be honored; the payload names the reason
    Error(ErrorReason),
    /// Acknowledges `re-join` with a full game snapshot; may carry a
    /// chained follow-up event in `next`
    ReJoined(RejoinSnapshot),
    /// Acknowledges `identify`; the payload is the durable player id
    GotName(String),
    /// Acknowledges `create`; the payload is the new game code
    Created(String),
    /// Roster changed; payload is the full player list
    Joined(Vec<String>),
    /// Entered (or re-entered) the pre-game lobby; payload is the roster
    Waiting(Vec<String>),
    /// This player is the dasher for the new round
    Dasher(PromptDetails),
    /// This player must answer the dasher's prompt
    PlsAnswer(PromptDetails),
    /// The server holds an answer from this player
    GotAnswer,
    /// Another player submitted an answer; payload is the running count
    PlayerSentAnswer(u32),
    /// Dasher should read the collected answers aloud and record votes
    ReadAnswers(AnswerSheet),
    /// Non-dasher players listen to the reading and vote verbally
    ListenToReading,
    /// Round finished; payload is the per-player score breakdown
    ShowScores(Vec<ScoreDetail>),
    /// Dasher edited the category (ambient co-author visibility)
    CategoryChange(Option<String>),
    /// Dasher edited the clue (ambient co-author visibility)
    ClueChange(Option<String>),
    /// Number of votes this player's answer has received so far
    VotesForMe(u32),
}

/// Reason codes carried by [`ServerEvent::Error`].
///
/// On the wire this is a bare kebab-case string. Reasons this client
/// does not know map to [`ErrorReason::Unknown`] rather than failing
/// the whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorReason {
    /// The supplied game code does not match a running game
    GameNotFound,
    /// The identity token is not known to the server
    PlayerNotFound,
    /// The game has already started and cannot be joined
    GameInProgress,
    /// The game creator left, ending the game for everyone
    CreatorLeft,
    /// Forward compatibility: a reason this client does not know
    Unknown,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::GameNotFound => "game-not-found",
            ErrorReason::PlayerNotFound => "player-not-found",
            ErrorReason::GameInProgress => "game-in-progress",
            ErrorReason::CreatorLeft => "creator-left",
            ErrorReason::Unknown => "unknown",
        }
    }
}

impl From<String> for ErrorReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "game-not-found" => ErrorReason::GameNotFound,
            "player-not-found" => ErrorReason::PlayerNotFound,
            "game-in-progress" => ErrorReason::GameInProgress,
            "creator-left" => ErrorReason::CreatorLeft,
            _ => ErrorReason::Unknown,
        }
    }
}

impl From<ErrorReason> for String {
    fn from(value: ErrorReason) -> Self {
        value.as_str().to_string()
    }
}

// =============================================================================
// Frame Helpers
// =============================================================================

/// Serialize an intent into its wire frame.
pub fn encode_intent(intent: &ClientIntent) -> Result<String, WireError> {
    Ok(serde_json::to_string(intent)?)
}

/// Parse a wire frame into a server event.
pub fn decode_event(frame: &str) -> Result<ServerEvent, WireError> {
    Ok(serde_json::from_str(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_envelope_uses_action_and_payload() {
        let frame = encode_intent(&ClientIntent::Identify("miriam".into())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["action"], "identify");
        assert_eq!(value["payload"], "miriam");
    }

    #[test]
    fn payloadless_intent_omits_payload_field() {
        let frame = encode_intent(&ClientIntent::CalculateScores).unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["action"], "calculate-scores");
        assert!(value.get("payload").is_none());
    }

    #[test]
    fn vote_ballot_uses_camel_case_fields() {
        let frame = encode_intent(&ClientIntent::AddVote(VoteBallot {
            who: "ann".into(),
            voted_for: "bob".into(),
        }))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["payload"]["who"], "ann");
        assert_eq!(value["payload"]["votedFor"], "bob");
    }

    #[test]
    fn decodes_created_event() {
        let event = decode_event(r#"{"action":"created","payload":"ABCD"}"#).unwrap();
        assert_eq!(event, ServerEvent::Created("ABCD".into()));
    }

    #[test]
    fn decodes_error_reason() {
        let event = decode_event(r#"{"action":"error","payload":"player-not-found"}"#).unwrap();
        assert_eq!(event, ServerEvent::Error(ErrorReason::PlayerNotFound));
    }

    #[test]
    fn unknown_error_reason_is_forward_compatible() {
        let event = decode_event(r#"{"action":"error","payload":"rate-limited"}"#).unwrap();
        assert_eq!(event, ServerEvent::Error(ErrorReason::Unknown));
    }

    #[test]
    fn decodes_rejoined_with_chained_next_event() {
        let frame = r#"{
            "action": "re-joined",
            "payload": {
                "name": "miriam",
                "gameId": "ABCD",
                "creator": false,
                "players": ["miriam", "ann"],
                "responsesReceived": 1,
                "next": {"action": "pls-answer", "payload": {"clue": "a fish"}}
            }
        }"#;
        let event = decode_event(frame).unwrap();
        let ServerEvent::ReJoined(snapshot) = event else {
            panic!("expected re-joined, got {event:?}");
        };
        assert_eq!(snapshot.game_id.as_deref(), Some("ABCD"));
        assert_eq!(snapshot.players.len(), 2);
        let next = snapshot.next.expect("chained event");
        assert!(matches!(*next, ServerEvent::PlsAnswer(_)));
    }

    #[test]
    fn rejects_message_field_envelope() {
        // Canonical envelope is {action, payload}; the drifted
        // {action, message} shape must not parse.
        let result = decode_event(r#"{"action":"created","message":"ABCD"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn event_round_trips_through_wire_form() {
        let event = ServerEvent::ReadAnswers(AnswerSheet {
            answers: vec![],
            yet_to_vote: vec!["ann".into()],
        });
        let frame = serde_json::to_string(&event).unwrap();
        assert_eq!(decode_event(&frame).unwrap(), event);
    }
}
