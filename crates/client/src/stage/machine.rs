//! The stage state machine.
//!
//! Input alphabet = inbound server events; each event is a
//! deterministic transition of `(Stage, GameSnapshot)` plus the cached
//! identity and draft answer. Outbound intents mirror the stages: the
//! presentation layer calls the intent methods here, which post exactly
//! one bus message each (free-text edits via the debounce policy).
//!
//! Nothing in here is fatal: every failure path resolves to a valid
//! stage.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use mashdash_protocol::{ClientIntent, ErrorReason, PromptDetails, ServerEvent, VoteBallot};

use crate::connection::ConnectionSignal;
use crate::messaging::IntentApi;
use crate::storage::{KeyValueStore, DRAFT_ANSWER_KEY, PLAYER_ID_KEY};

use super::debounce::{DebouncedField, Debouncer};
use super::snapshot::{GameSnapshot, Stage, StageView, UserError};

/// Everything the machine's single consumer drains, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum MachineInput {
    /// Change notification from the connection manager
    Signal(ConnectionSignal),
    /// A scheduled debounce interval elapsed for `value`
    DebounceFired { field: DebouncedField, value: String },
}

/// The client's core state machine.
pub struct StageMachine {
    stage: Stage,
    snapshot: GameSnapshot,
    store: Arc<dyn KeyValueStore>,
    intents: IntentApi,
    debouncer: Debouncer,
    view_tx: watch::Sender<StageView>,
}

impl StageMachine {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        intents: IntentApi,
        input_tx: mpsc::UnboundedSender<MachineInput>,
    ) -> Self {
        let (view_tx, _) = watch::channel(StageView::default());
        Self {
            stage: Stage::Loading,
            snapshot: GameSnapshot::default(),
            store,
            intents,
            debouncer: Debouncer::new(input_tx),
            view_tx,
        }
    }

    /// Subscribe to `(Stage, GameSnapshot)` views. Read-only.
    pub fn subscribe(&self) -> watch::Receiver<StageView> {
        self.view_tx.subscribe()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Startup identity probe: re-join with a cached identity, or ask
    /// the player to identify.
    pub fn bootstrap(&mut self) {
        match self.cached_identity() {
            Some(id) => {
                self.intents.send_data(ClientIntent::ReJoin(id));
                self.stage = Stage::Loading;
            }
            None => self.stage = Stage::Identify,
        }
        self.publish();
    }

    /// Process one input from the single-consumer channel.
    pub fn handle(&mut self, input: MachineInput) {
        match input {
            MachineInput::Signal(ConnectionSignal::ReconnectRequired) => {
                self.intents.reconnect(self.cached_identity());
            }
            MachineInput::Signal(ConnectionSignal::Event(event)) => {
                self.apply_event(event);
                self.publish();
            }
            MachineInput::DebounceFired { field, value } => self.debounce_fired(field, value),
        }
    }

    fn cached_identity(&self) -> Option<String> {
        self.store.load(PLAYER_ID_KEY).filter(|id| !id.is_empty())
    }

    fn publish(&self) {
        self.view_tx.send_replace(StageView {
            stage: self.stage,
            snapshot: self.snapshot.clone(),
        });
    }

    // =========================================================================
    // Inbound transitions
    // =========================================================================

    fn apply_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Error(reason) => self.apply_error(reason),
            ServerEvent::ReJoined(restored) => {
                self.snapshot.name = restored.name;
                self.snapshot.game_code = restored.game_id.unwrap_or_default();
                self.snapshot.creator = restored.creator;
                self.snapshot.players_in_game = restored.players.len();
                self.snapshot.player_list = restored.players;
                self.snapshot.category = restored.category;
                self.snapshot.clue = restored.clue.unwrap_or_default();
                self.snapshot.responses_received = restored.responses_received.unwrap_or(0);
                match restored.next {
                    // The server replayed a queued update; apply it
                    // atomically instead of settling on a neutral stage.
                    Some(next) => self.apply_event(*next),
                    None => self.stage = Stage::Initial,
                }
            }
            ServerEvent::GotName(id) => {
                self.store.save(PLAYER_ID_KEY, &id);
                self.stage = Stage::Initial;
            }
            ServerEvent::Created(code) => {
                self.stage = Stage::Waiting;
                self.snapshot.players_in_game = 1;
                self.snapshot.player_list = vec![self.snapshot.name.clone()];
                self.snapshot.game_code = code;
            }
            ServerEvent::Joined(players) | ServerEvent::Waiting(players) => {
                self.stage = Stage::Waiting;
                self.snapshot.players_in_game = players.len();
                self.snapshot.player_list = players;
            }
            ServerEvent::Dasher(details) => self.enter_answer_stage(Stage::Dasher, details),
            ServerEvent::PlsAnswer(details) => self.enter_answer_stage(Stage::Answering, details),
            ServerEvent::GotAnswer => {
                // The answer stays editable until everyone has finished.
                self.snapshot.answer_received = true;
            }
            ServerEvent::PlayerSentAnswer(count) => self.snapshot.responses_received = count,
            ServerEvent::ReadAnswers(sheet) => {
                self.clear_draft();
                self.stage = Stage::Reading;
                self.snapshot.player_answers = sheet.answers;
                self.snapshot.yet_to_vote = sheet.yet_to_vote;
            }
            ServerEvent::ListenToReading => {
                self.clear_draft();
                self.stage = Stage::ListenToReading;
                self.snapshot.my_votes = 0;
            }
            ServerEvent::ShowScores(details) => {
                self.stage = Stage::Scoring;
                self.snapshot.score_details = details;
            }
            ServerEvent::CategoryChange(category) => self.snapshot.category = category,
            ServerEvent::ClueChange(clue) => self.snapshot.clue = clue.unwrap_or_default(),
            ServerEvent::VotesForMe(count) => self.snapshot.my_votes = count,
        }
    }

    fn apply_error(&mut self, reason: ErrorReason) {
        match reason {
            ErrorReason::GameNotFound => {
                self.snapshot.error = Some(UserError::new(
                    "Game not found",
                    "Sorry, we couldn't find that game. Did you type the code correctly?",
                ));
            }
            ErrorReason::PlayerNotFound => {
                self.store.remove(PLAYER_ID_KEY);
                self.stage = Stage::Identify;
            }
            ErrorReason::GameInProgress => {
                self.snapshot.error = Some(UserError::new(
                    "Game in progress",
                    "Sorry, you can't join a game that's in progress. \
                     To play, you'll need to create a new game",
                ));
            }
            ErrorReason::CreatorLeft => {
                self.stage = Stage::Initial;
                self.snapshot.error = Some(UserError::new(
                    "Game creator left",
                    "The game creator left! You'll need to start a new game to continue playing",
                ));
            }
            ErrorReason::Unknown => {
                tracing::warn!("Ignoring error event with unknown reason");
            }
        }
    }

    fn enter_answer_stage(&mut self, stage: Stage, details: PromptDetails) {
        // Rehydrate the draft from the cache; covers the
        // reconnect-mid-answer case.
        self.snapshot.answer_text = self.store.load(DRAFT_ANSWER_KEY).unwrap_or_default();
        self.snapshot.answer_received = details.answer_received;
        if let Some(count) = details.responses_received {
            self.snapshot.responses_received = count;
        }
        self.snapshot.clue = details.clue.unwrap_or_default();
        self.snapshot.category = details.category;
        self.stage = stage;
    }

    fn clear_draft(&mut self) {
        self.store.remove(DRAFT_ANSWER_KEY);
        self.snapshot.answer_text.clear();
    }

    fn debounce_fired(&mut self, field: DebouncedField, value: String) {
        // Only fire if no later edit superseded the scheduled value.
        let unchanged = match field {
            DebouncedField::Clue => self.snapshot.clue == value,
            DebouncedField::Category => self.snapshot.category.as_deref() == Some(value.as_str()),
        };
        if !unchanged {
            return;
        }
        let intent = match field {
            DebouncedField::Clue => ClientIntent::ClueChange(value),
            DebouncedField::Category => ClientIntent::CategoryChange(value),
        };
        self.intents.send_data(intent);
    }

    // =========================================================================
    // Outbound intents (presentation layer API)
    // =========================================================================

    pub fn submit_identity(&mut self, name: &str) {
        self.snapshot.name = name.to_string();
        self.intents.send_data(ClientIntent::Identify(name.to_string()));
        self.publish();
    }

    /// Create a game; optimistically seeds the roster with this player.
    pub fn create_game(&mut self) {
        self.snapshot.creator = true;
        self.snapshot.player_list = vec![self.snapshot.name.clone()];
        self.intents.send_data(ClientIntent::Create);
        self.publish();
    }

    /// Move to the join stage; a stale draft from an earlier game must
    /// not leak into the next one.
    pub fn begin_join(&mut self) {
        self.store.remove(DRAFT_ANSWER_KEY);
        self.snapshot.creator = false;
        self.stage = Stage::Join;
        self.publish();
    }

    pub fn cancel_join(&mut self) {
        self.stage = Stage::Initial;
        self.publish();
    }

    pub fn set_game_code(&mut self, code: &str) {
        self.snapshot.game_code = code.to_string();
        self.publish();
    }

    pub fn submit_join(&mut self) {
        self.intents
            .send_data(ClientIntent::Join(self.snapshot.game_code.clone()));
    }

    /// Start the game; from the scoring stage this begins the next round.
    pub fn start_game(&mut self) {
        self.intents.send_data(ClientIntent::Start);
    }

    /// Record a keystroke in the draft answer; cached on every edit so
    /// it survives a reconnect.
    pub fn edit_answer(&mut self, text: &str) {
        self.store.save(DRAFT_ANSWER_KEY, text);
        self.snapshot.answer_text = text.to_string();
        self.publish();
    }

    pub fn submit_answer(&mut self) {
        self.intents
            .send_data(ClientIntent::Answer(self.snapshot.answer_text.clone()));
    }

    pub fn edit_clue(&mut self, text: &str) {
        self.snapshot.clue = text.to_string();
        self.debouncer
            .schedule(DebouncedField::Clue, text.to_string());
        self.publish();
    }

    pub fn edit_category(&mut self, text: &str) {
        self.snapshot.category = Some(text.to_string());
        self.debouncer
            .schedule(DebouncedField::Category, text.to_string());
        self.publish();
    }

    pub fn add_vote(&mut self, who: &str, voted_for: &str) {
        self.intents.send_data(ClientIntent::AddVote(VoteBallot {
            who: who.to_string(),
            voted_for: voted_for.to_string(),
        }));
    }

    pub fn remove_vote(&mut self, who: &str) {
        self.intents
            .send_data(ClientIntent::RemoveVote(who.to_string()));
    }

    pub fn calculate_scores(&mut self) {
        self.intents.send_data(ClientIntent::CalculateScores);
    }

    pub fn leave_game(&mut self) {
        self.intents.send_data(ClientIntent::Leave);
        self.snapshot.game_code.clear();
        self.stage = Stage::Initial;
        self.publish();
    }

    pub fn log_out(&mut self) {
        self.store.remove(PLAYER_ID_KEY);
        self.snapshot.name.clear();
        self.stage = Stage::Identify;
        self.publish();
    }

    pub fn dismiss_error(&mut self) {
        self.snapshot.error = None;
        self.publish();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mashdash_protocol::{AnswerSheet, PlayerAnswer, RejoinSnapshot, ScoreDetail};

    use crate::messaging::{AppMessage, MessageBus};
    use crate::storage::{MemoryStore, MockKeyValueStore};

    use super::*;

    struct Fixture {
        machine: StageMachine,
        posted: Arc<Mutex<Vec<AppMessage>>>,
        input_rx: mpsc::UnboundedReceiver<MachineInput>,
        store: MemoryStore,
    }

    fn fixture() -> Fixture {
        let bus = MessageBus::new();
        let posted = Arc::new(Mutex::new(Vec::new()));
        let posted_clone = Arc::clone(&posted);
        bus.register(move |message| {
            posted_clone.lock().expect("lock").push(message.clone());
            Ok(())
        });

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let store = MemoryStore::new();
        let machine = StageMachine::new(
            Arc::new(store.clone()),
            IntentApi::new(bus),
            input_tx,
        );

        Fixture {
            machine,
            posted,
            input_rx,
            store,
        }
    }

    fn deliver(machine: &mut StageMachine, event: ServerEvent) {
        machine.handle(MachineInput::Signal(ConnectionSignal::Event(event)));
    }

    fn sent_intents(posted: &Arc<Mutex<Vec<AppMessage>>>) -> Vec<ClientIntent> {
        posted
            .lock()
            .expect("lock")
            .iter()
            .filter_map(|message| match message {
                AppMessage::SendData(intent) => Some(intent.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bootstrap_without_identity_asks_the_player_to_identify() {
        let mut f = fixture();
        f.machine.bootstrap();
        assert_eq!(f.machine.stage(), Stage::Identify);
        assert!(sent_intents(&f.posted).is_empty());
    }

    #[test]
    fn bootstrap_with_cached_identity_rejoins_and_stays_loading() {
        let mut f = fixture();
        f.store.save(PLAYER_ID_KEY, "abc-123");
        f.machine.bootstrap();
        assert_eq!(f.machine.stage(), Stage::Loading);
        assert_eq!(
            sent_intents(&f.posted),
            vec![ClientIntent::ReJoin("abc-123".into())]
        );
    }

    #[test]
    fn created_event_enters_waiting_with_the_game_code() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::Created("ABCD".into()));
        assert_eq!(f.machine.stage(), Stage::Waiting);
        assert_eq!(f.machine.snapshot().game_code, "ABCD");
        assert_eq!(f.machine.snapshot().players_in_game, 1);
    }

    #[test]
    fn rejoined_with_chained_next_lands_in_the_dasher_stage() {
        let mut f = fixture();
        deliver(
            &mut f.machine,
            ServerEvent::ReJoined(RejoinSnapshot {
                name: "miriam".into(),
                game_id: Some("ABCD".into()),
                creator: true,
                players: vec!["miriam".into(), "ann".into()],
                category: None,
                clue: None,
                responses_received: Some(1),
                next: Some(Box::new(ServerEvent::Dasher(PromptDetails::default()))),
            }),
        );
        assert_eq!(f.machine.stage(), Stage::Dasher);
        assert_eq!(f.machine.snapshot().game_code, "ABCD");
        assert_eq!(f.machine.snapshot().players_in_game, 2);
    }

    #[test]
    fn rejoined_without_next_settles_on_initial() {
        let mut f = fixture();
        deliver(
            &mut f.machine,
            ServerEvent::ReJoined(RejoinSnapshot {
                name: "miriam".into(),
                game_id: None,
                creator: false,
                players: vec![],
                category: None,
                clue: None,
                responses_received: None,
                next: None,
            }),
        );
        assert_eq!(f.machine.stage(), Stage::Initial);
        assert_eq!(f.machine.snapshot().name, "miriam");
    }

    #[test]
    fn joined_event_replaces_the_roster_wholesale() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::Waiting(vec!["miriam".into()]));
        deliver(
            &mut f.machine,
            ServerEvent::Joined(vec!["miriam".into(), "ann".into(), "bob".into()]),
        );
        assert_eq!(f.machine.stage(), Stage::Waiting);
        assert_eq!(
            f.machine.snapshot().player_list,
            vec!["miriam".to_string(), "ann".to_string(), "bob".to_string()]
        );
        assert_eq!(f.machine.snapshot().players_in_game, 3);
    }

    #[test]
    fn player_not_found_clears_identity_and_returns_to_identify() {
        let mut f = fixture();
        f.store.save(PLAYER_ID_KEY, "abc-123");
        deliver(&mut f.machine, ServerEvent::Error(ErrorReason::PlayerNotFound));
        assert_eq!(f.machine.stage(), Stage::Identify);
        assert!(f.store.load(PLAYER_ID_KEY).is_none());
    }

    #[test]
    fn game_not_found_surfaces_an_error_without_changing_stage() {
        let mut f = fixture();
        f.machine.bootstrap();
        f.machine.begin_join();
        deliver(&mut f.machine, ServerEvent::Error(ErrorReason::GameNotFound));
        assert_eq!(f.machine.stage(), Stage::Join);
        let error = f.machine.snapshot().error.clone().expect("error descriptor");
        assert_eq!(error.title, "Game not found");
    }

    #[test]
    fn creator_left_returns_to_initial_with_an_error() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::Waiting(vec!["miriam".into()]));
        deliver(&mut f.machine, ServerEvent::Error(ErrorReason::CreatorLeft));
        assert_eq!(f.machine.stage(), Stage::Initial);
        assert!(f.machine.snapshot().error.is_some());
    }

    #[test]
    fn got_name_persists_the_identity_token() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::GotName("abc-123".into()));
        assert_eq!(f.machine.stage(), Stage::Initial);
        assert_eq!(f.store.load(PLAYER_ID_KEY).as_deref(), Some("abc-123"));
    }

    #[test]
    fn reconnect_required_reissues_the_cached_identity() {
        let mut f = fixture();
        f.store.save(PLAYER_ID_KEY, "abc-123");
        f.machine
            .handle(MachineInput::Signal(ConnectionSignal::ReconnectRequired));
        assert_eq!(
            f.posted.lock().expect("lock").as_slice(),
            &[AppMessage::Reconnect(Some("abc-123".into()))]
        );
    }

    #[test]
    fn draft_answer_survives_a_disconnect_reconnect_cycle() {
        let mut f = fixture();
        f.machine.edit_answer("a kind of fish");

        // Connection drops and recovers; the prompt comes back.
        f.machine
            .handle(MachineInput::Signal(ConnectionSignal::ReconnectRequired));
        deliver(&mut f.machine, ServerEvent::PlsAnswer(PromptDetails::default()));

        assert_eq!(f.machine.stage(), Stage::Answering);
        assert_eq!(f.machine.snapshot().answer_text, "a kind of fish");
    }

    #[test]
    fn got_answer_marks_received_but_keeps_the_stage() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::PlsAnswer(PromptDetails::default()));
        deliver(&mut f.machine, ServerEvent::GotAnswer);
        assert_eq!(f.machine.stage(), Stage::Answering);
        assert!(f.machine.snapshot().answer_received);
    }

    #[test]
    fn read_answers_clears_the_cached_draft() {
        let mut f = fixture();
        f.machine.edit_answer("soon gone");
        deliver(
            &mut f.machine,
            ServerEvent::ReadAnswers(AnswerSheet {
                answers: vec![PlayerAnswer {
                    name: "ann".into(),
                    answer: "a fish".into(),
                    votes: vec![],
                }],
                yet_to_vote: vec!["bob".into()],
            }),
        );
        assert_eq!(f.machine.stage(), Stage::Reading);
        assert!(f.store.load(DRAFT_ANSWER_KEY).is_none());
        assert!(f.machine.snapshot().answer_text.is_empty());
        assert_eq!(f.machine.snapshot().yet_to_vote, vec!["bob".to_string()]);
    }

    #[test]
    fn listen_to_reading_resets_the_vote_counter() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::VotesForMe(3));
        deliver(&mut f.machine, ServerEvent::ListenToReading);
        assert_eq!(f.machine.stage(), Stage::ListenToReading);
        assert_eq!(f.machine.snapshot().my_votes, 0);
    }

    #[test]
    fn show_scores_enters_scoring_with_the_breakdown() {
        let mut f = fixture();
        deliver(
            &mut f.machine,
            ServerEvent::ShowScores(vec![ScoreDetail {
                name: "miriam".into(),
                points: 3,
                details: vec!["Fooled ann".into()],
            }]),
        );
        assert_eq!(f.machine.stage(), Stage::Scoring);
        assert_eq!(f.machine.snapshot().score_details.len(), 1);
    }

    #[test]
    fn category_change_is_idempotent() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::CategoryChange(Some("Word".into())));
        let after_first = f.machine.snapshot().clone();
        deliver(&mut f.machine, ServerEvent::CategoryChange(Some("Word".into())));
        assert_eq!(*f.machine.snapshot(), after_first);
    }

    #[test]
    fn create_game_optimistically_seeds_the_roster() {
        let mut f = fixture();
        f.machine.submit_identity("miriam");
        f.machine.create_game();
        assert!(f.machine.snapshot().creator);
        assert_eq!(
            f.machine.snapshot().player_list,
            vec!["miriam".to_string()]
        );
        assert!(sent_intents(&f.posted).contains(&ClientIntent::Create));
    }

    #[test]
    fn begin_join_discards_any_stale_draft() {
        let mut f = fixture();
        f.machine.edit_answer("left over");
        f.machine.begin_join();
        assert_eq!(f.machine.stage(), Stage::Join);
        assert!(f.store.load(DRAFT_ANSWER_KEY).is_none());
    }

    #[test]
    fn leave_game_resets_local_state_and_tells_the_server() {
        let mut f = fixture();
        deliver(&mut f.machine, ServerEvent::Created("ABCD".into()));
        f.machine.leave_game();
        assert_eq!(f.machine.stage(), Stage::Initial);
        assert!(f.machine.snapshot().game_code.is_empty());
        assert!(sent_intents(&f.posted).contains(&ClientIntent::Leave));
    }

    #[test]
    fn log_out_clears_identity_and_name() {
        let mut f = fixture();
        f.store.save(PLAYER_ID_KEY, "abc-123");
        f.machine.submit_identity("miriam");
        f.machine.log_out();
        assert_eq!(f.machine.stage(), Stage::Identify);
        assert!(f.store.load(PLAYER_ID_KEY).is_none());
        assert!(f.machine.snapshot().name.is_empty());
    }

    #[test]
    fn watch_subscription_sees_each_transition() {
        let mut f = fixture();
        let rx = f.machine.subscribe();
        deliver(&mut f.machine, ServerEvent::Created("ABCD".into()));
        assert_eq!(rx.borrow().stage, Stage::Waiting);
        assert_eq!(rx.borrow().snapshot.game_code, "ABCD");
    }

    #[test]
    fn identity_removal_goes_through_the_store_seam() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_remove()
            .withf(|key| key == PLAYER_ID_KEY)
            .times(1)
            .return_const(());

        let (input_tx, _input_rx) = mpsc::unbounded_channel();
        let mut machine =
            StageMachine::new(Arc::new(mock), IntentApi::new(MessageBus::new()), input_tx);
        deliver(&mut machine, ServerEvent::Error(ErrorReason::PlayerNotFound));
        assert_eq!(machine.stage(), Stage::Identify);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_clue_edits_collapse_into_one_broadcast() {
        let mut f = fixture();

        f.machine.edit_clue("a");
        f.machine.edit_clue("ab");
        f.machine.edit_clue("abc");

        // Let all three scheduled fires elapse.
        tokio::time::sleep(std::time::Duration::from_millis(350)).await;
        while let Ok(input) = f.input_rx.try_recv() {
            f.machine.handle(input);
        }

        let clue_changes: Vec<_> = sent_intents(&f.posted)
            .into_iter()
            .filter(|intent| matches!(intent, ClientIntent::ClueChange(_)))
            .collect();
        assert_eq!(clue_changes, vec![ClientIntent::ClueChange("abc".into())]);
    }

    #[tokio::test(start_paused = true)]
    async fn category_edits_use_the_same_debounce_path() {
        let mut f = fixture();

        f.machine.edit_category("Wor");
        f.machine.edit_category("Word");

        tokio::time::sleep(std::time::Duration::from_millis(350)).await;
        while let Ok(input) = f.input_rx.try_recv() {
            f.machine.handle(input);
        }

        let category_changes: Vec<_> = sent_intents(&f.posted)
            .into_iter()
            .filter(|intent| matches!(intent, ClientIntent::CategoryChange(_)))
            .collect();
        assert_eq!(
            category_changes,
            vec![ClientIntent::CategoryChange("Word".into())]
        );
    }
}
