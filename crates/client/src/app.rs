//! Composition root: assembles and owns the running client.
//!
//! [`App::init`] wires the local cache, the message bus, the connection
//! manager and the stage machine together, then runs the startup
//! identity probe. One pump task drains both input channels (connection
//! signals and debounce fires) into the machine, so the machine only
//! ever runs on one task at a time.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::connection::{ConnectionManager, ConnectionSignal, ConnectionState};
use crate::error::ClientError;
use crate::messaging::{IntentApi, MessageBus};
use crate::stage::{MachineInput, StageMachine, StageView};
use crate::storage::{FileStore, KeyValueStore};

/// A running client instance.
pub struct App {
    machine: Arc<Mutex<StageMachine>>,
    view_rx: watch::Receiver<StageView>,
    connection: ConnectionManager,
    pump: JoinHandle<()>,
}

impl App {
    /// Build and start a client from configuration.
    pub fn init(config: ClientConfig) -> Result<Self, ClientError> {
        let store = Arc::new(FileStore::open(config.storage_file.clone()));
        Self::init_with_store(config, store)
    }

    /// Build and start a client with an injected cache implementation.
    pub fn init_with_store(
        config: ClientConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ClientError> {
        let bus = MessageBus::new();
        let intents = IntentApi::new(bus.clone());

        let (signal_tx, mut signal_rx) = mpsc::unbounded_channel();
        let connection = ConnectionManager::spawn(config.server_url, signal_tx);
        connection.attach(&bus);

        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        let mut machine = StageMachine::new(store, intents, input_tx);
        let view_rx = machine.subscribe();
        machine.bootstrap();

        let machine = Arc::new(Mutex::new(machine));
        let pump_machine = Arc::clone(&machine);
        let pump = tokio::spawn(async move {
            loop {
                let input = tokio::select! {
                    signal = signal_rx.recv() => match signal {
                        Some(signal) => MachineInput::Signal(signal),
                        None => break,
                    },
                    input = input_rx.recv() => match input {
                        Some(input) => input,
                        None => break,
                    },
                };
                lock_machine(&pump_machine).handle(input);
            }
        });

        Ok(Self {
            machine,
            view_rx,
            connection,
            pump,
        })
    }

    /// The current published view.
    pub fn view(&self) -> StageView {
        self.view_rx.borrow().clone()
    }

    /// Subscribe to view changes.
    pub fn subscribe(&self) -> watch::Receiver<StageView> {
        self.view_rx.clone()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.state()
    }

    /// Close the connection and stop the pump.
    pub async fn teardown(self) {
        self.connection.shutdown().await;
        let _ = self.pump.await;
    }

    // Intent surface, delegated to the machine.

    pub fn submit_identity(&self, name: &str) {
        lock_machine(&self.machine).submit_identity(name);
    }

    pub fn create_game(&self) {
        lock_machine(&self.machine).create_game();
    }

    pub fn begin_join(&self) {
        lock_machine(&self.machine).begin_join();
    }

    pub fn cancel_join(&self) {
        lock_machine(&self.machine).cancel_join();
    }

    pub fn set_game_code(&self, code: &str) {
        lock_machine(&self.machine).set_game_code(code);
    }

    pub fn submit_join(&self) {
        lock_machine(&self.machine).submit_join();
    }

    pub fn start_game(&self) {
        lock_machine(&self.machine).start_game();
    }

    pub fn edit_answer(&self, text: &str) {
        lock_machine(&self.machine).edit_answer(text);
    }

    pub fn submit_answer(&self) {
        lock_machine(&self.machine).submit_answer();
    }

    pub fn edit_clue(&self, text: &str) {
        lock_machine(&self.machine).edit_clue(text);
    }

    pub fn edit_category(&self, text: &str) {
        lock_machine(&self.machine).edit_category(text);
    }

    pub fn add_vote(&self, who: &str, voted_for: &str) {
        lock_machine(&self.machine).add_vote(who, voted_for);
    }

    pub fn remove_vote(&self, who: &str) {
        lock_machine(&self.machine).remove_vote(who);
    }

    pub fn calculate_scores(&self) {
        lock_machine(&self.machine).calculate_scores();
    }

    pub fn leave_game(&self) {
        lock_machine(&self.machine).leave_game();
    }

    pub fn log_out(&self) {
        lock_machine(&self.machine).log_out();
    }

    pub fn dismiss_error(&self) {
        lock_machine(&self.machine).dismiss_error();
    }
}

fn lock_machine(machine: &Mutex<StageMachine>) -> MutexGuard<'_, StageMachine> {
    match machine.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
