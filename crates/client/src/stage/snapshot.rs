//! Stage and snapshot types read by the presentation layer.

use mashdash_protocol::{PlayerAnswer, ScoreDetail};

/// The current phase of game play. Exactly one stage is active at any
/// time, and the stage gates which intents are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Waiting for the server to confirm a startup re-join
    #[default]
    Loading,
    /// Asking the player for their name
    Identify,
    /// Identified; choosing to create or join a game
    Initial,
    /// Typing in a game code
    Join,
    /// In the lobby waiting for players
    Waiting,
    /// Authoring this round's category, clue and true answer
    Dasher,
    /// Answering the dasher's prompt
    Answering,
    /// Reading collected answers aloud and recording votes (dasher)
    Reading,
    /// Listening to the reading and voting verbally (non-dasher)
    ListenToReading,
    /// Viewing the round's score breakdown
    Scoring,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Loading => "loading",
            Stage::Identify => "identify",
            Stage::Initial => "initial",
            Stage::Join => "join",
            Stage::Waiting => "waiting",
            Stage::Dasher => "dasher",
            Stage::Answering => "answering",
            Stage::Reading => "reading",
            Stage::ListenToReading => "listen-to-reading",
            Stage::Scoring => "scoring",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing error descriptor surfaced by protocol errors.
#[derive(Debug, Clone, PartialEq)]
pub struct UserError {
    pub title: String,
    pub message: String,
}

impl UserError {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// Everything the presentation layer may read about the game.
///
/// Owned exclusively by the stage machine; consumers get clones via the
/// watch subscription and never mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    pub name: String,
    pub game_code: String,
    pub creator: bool,
    pub player_list: Vec<String>,
    pub players_in_game: usize,
    pub category: Option<String>,
    pub clue: String,
    /// Mirror of the cached draft answer
    pub answer_text: String,
    pub answer_received: bool,
    pub responses_received: u32,
    pub player_answers: Vec<PlayerAnswer>,
    pub yet_to_vote: Vec<String>,
    pub my_votes: u32,
    pub score_details: Vec<ScoreDetail>,
    pub error: Option<UserError>,
}

/// One published view: the active stage plus the snapshot behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageView {
    pub stage: Stage,
    pub snapshot: GameSnapshot,
}
