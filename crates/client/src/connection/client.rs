//! Socket client owning the WebSocket transport.
//!
//! A single task owns the connection lifecycle. Bus messages arrive as
//! [`ConnectionCommand`]s over an unbounded channel (so posting never
//! blocks), and everything the stage machine needs to know leaves as a
//! typed [`ConnectionSignal`] on a single-consumer channel, preserving
//! inbound order.
//!
//! The manager never retries on its own initiative: a drop or a failed
//! attempt raises `ReconnectRequired` and the consumer decides.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use mashdash_protocol::{decode_event, encode_intent, ClientIntent, ServerEvent};

use crate::messaging::{AppMessage, HandlerId, MessageBus};

use super::core::{ConnectionCore, ConnectionState, SendDisposition};

/// Delay before raising the recovery signal after a failed connection
/// attempt, so a dead server does not spin the consumer.
pub const RETRY_NOTIFY_DELAY_MS: u64 = 1_000;

/// Change notifications toward the stage machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionSignal {
    /// An inbound server event was received (or injected)
    Event(ServerEvent),
    /// The connection dropped or an attempt failed; the consumer
    /// should trigger recovery
    ReconnectRequired,
}

/// Commands handled by the connection task.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionCommand {
    Send(ClientIntent),
    Inject(ServerEvent),
    Reconnect,
    Shutdown,
}

/// Translate a bus message into connection commands.
///
/// A `Reconnect` carrying an identity token fans out into the reconnect
/// itself plus a queued `re-join` intent, which the flush-on-open rule
/// then delivers once the new connection is up.
pub(crate) fn map_app_message(message: &AppMessage) -> Vec<ConnectionCommand> {
    match message {
        AppMessage::SendData(intent) => vec![ConnectionCommand::Send(intent.clone())],
        AppMessage::MockData(event) => vec![ConnectionCommand::Inject(event.clone())],
        AppMessage::Reconnect(player_id) => {
            let mut commands = vec![ConnectionCommand::Reconnect];
            if let Some(id) = player_id {
                commands.push(ConnectionCommand::Send(ClientIntent::ReJoin(id.clone())));
            }
            commands
        }
    }
}

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
type WsSource = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Handle to the connection task.
///
/// Exposes the latest inbound event, the connection state and the
/// reconnect flag; mutation happens only inside the task.
pub struct ConnectionManager {
    command_tx: mpsc::UnboundedSender<ConnectionCommand>,
    core: Arc<Mutex<ConnectionCore>>,
    latest: Arc<RwLock<Option<ServerEvent>>>,
    task: JoinHandle<()>,
}

impl ConnectionManager {
    /// Spawn the connection task and begin the initial connect.
    pub fn spawn(url: String, signal_tx: mpsc::UnboundedSender<ConnectionSignal>) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let core = Arc::new(Mutex::new(ConnectionCore::new()));
        let latest = Arc::new(RwLock::new(None));

        let task = tokio::spawn(
            ConnectionTask {
                url,
                core: Arc::clone(&core),
                latest: Arc::clone(&latest),
                signal_tx,
            }
            .run(command_rx),
        );

        Self {
            command_tx,
            core,
            latest,
            task,
        }
    }

    /// Register this connection as a bus handler.
    pub fn attach(&self, bus: &MessageBus) -> HandlerId {
        let tx = self.command_tx.clone();
        bus.register(move |message| {
            for command in map_app_message(message) {
                tx.send(command)
                    .map_err(|_| anyhow::anyhow!("connection task stopped"))?;
            }
            Ok(())
        })
    }

    /// The most recently received inbound event.
    pub fn latest(&self) -> Option<ServerEvent> {
        self.latest.read().ok().and_then(|g| g.clone())
    }

    pub fn state(&self) -> ConnectionState {
        lock_core(&self.core).state()
    }

    pub fn requires_reconnect(&self) -> bool {
        lock_core(&self.core).requires_reconnect()
    }

    /// Close the connection and stop the task.
    pub async fn shutdown(self) {
        let _ = self.command_tx.send(ConnectionCommand::Shutdown);
        let _ = self.task.await;
    }
}

fn lock_core(core: &Mutex<ConnectionCore>) -> std::sync::MutexGuard<'_, ConnectionCore> {
    match core.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

struct ConnectionTask {
    url: String,
    core: Arc<Mutex<ConnectionCore>>,
    latest: Arc<RwLock<Option<ServerEvent>>>,
    signal_tx: mpsc::UnboundedSender<ConnectionSignal>,
}

enum LoopAction {
    Command(Option<ConnectionCommand>),
    Frame(Option<Result<Message, tokio_tungstenite::tungstenite::Error>>),
}

impl ConnectionTask {
    async fn run(self, mut command_rx: mpsc::UnboundedReceiver<ConnectionCommand>) {
        let mut socket = self.try_connect().await;

        loop {
            let action = if let Some((_, read)) = socket.as_mut() {
                tokio::select! {
                    command = command_rx.recv() => LoopAction::Command(command),
                    frame = read.next() => LoopAction::Frame(frame),
                }
            } else {
                LoopAction::Command(command_rx.recv().await)
            };

            match action {
                LoopAction::Command(None) | LoopAction::Command(Some(ConnectionCommand::Shutdown)) => {
                    if let Some((mut write, _)) = socket.take() {
                        let _ = write.close().await;
                    }
                    return;
                }
                LoopAction::Command(Some(ConnectionCommand::Send(intent))) => {
                    let disposition = lock_core(&self.core).accept(intent);
                    if let SendDisposition::Transmit(intent) = disposition {
                        if !self.transmit(&mut socket, &intent).await {
                            self.connection_lost(&mut socket);
                        }
                    }
                }
                LoopAction::Command(Some(ConnectionCommand::Inject(event))) => {
                    self.deliver(event);
                }
                LoopAction::Command(Some(ConnectionCommand::Reconnect)) => {
                    if let Some((mut write, _)) = socket.take() {
                        let _ = write.close().await;
                    }
                    socket = self.try_connect().await;
                }
                LoopAction::Frame(Some(Ok(Message::Text(text)))) => match decode_event(&text) {
                    Ok(event) => self.deliver(event),
                    Err(e) => tracing::warn!("Discarding malformed frame: {}", e),
                },
                LoopAction::Frame(Some(Ok(Message::Close(_))))
                | LoopAction::Frame(Some(Err(_)))
                | LoopAction::Frame(None) => {
                    tracing::info!("Server connection dropped");
                    self.connection_lost(&mut socket);
                }
                LoopAction::Frame(Some(Ok(_))) => {}
            }
        }
    }

    /// Open a new transport connection and flush the outbound queue.
    async fn try_connect(&self) -> Option<(WsSink, WsSource)> {
        lock_core(&self.core).begin_connect();

        match connect_async(self.url.as_str()).await {
            Ok((stream, _)) => {
                tracing::info!("Connected to server at {}", self.url);
                let (mut write, read) = stream.split();

                // Flush queued intents in FIFO order, one send per intent.
                let to_flush = lock_core(&self.core).opened();
                for (index, intent) in to_flush.iter().enumerate() {
                    match encode_intent(intent) {
                        Ok(frame) => {
                            if let Err(e) = write.send(Message::Text(frame)).await {
                                tracing::error!("Flush failed: {}", e);
                                // Re-queue the unsent tail in order for the
                                // next attempt.
                                let mut core = lock_core(&self.core);
                                core.closed();
                                for intent in &to_flush[index..] {
                                    core.accept(intent.clone());
                                }
                                drop(core);
                                let _ = self.signal_tx.send(ConnectionSignal::ReconnectRequired);
                                return None;
                            }
                        }
                        Err(e) => tracing::error!("Failed to encode queued intent: {}", e),
                    }
                }

                Some((write, read))
            }
            Err(e) => {
                tracing::warn!("Failed to connect to {}: {}", self.url, e);
                lock_core(&self.core).closed();
                tokio::time::sleep(Duration::from_millis(RETRY_NOTIFY_DELAY_MS)).await;
                let _ = self.signal_tx.send(ConnectionSignal::ReconnectRequired);
                None
            }
        }
    }

    /// Send one intent over the open socket. Returns false on failure.
    async fn transmit(&self, socket: &mut Option<(WsSink, WsSource)>, intent: &ClientIntent) -> bool {
        let Some((write, _)) = socket.as_mut() else {
            return false;
        };
        let frame = match encode_intent(intent) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!("Failed to encode intent: {}", e);
                return true; // the intent is lost but the socket is fine
            }
        };
        match write.send(Message::Text(frame)).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to send message: {}", e);
                false
            }
        }
    }

    /// Store the latest inbound event and notify the consumer.
    fn deliver(&self, event: ServerEvent) {
        if let Ok(mut latest) = self.latest.write() {
            *latest = Some(event.clone());
        }
        let _ = self.signal_tx.send(ConnectionSignal::Event(event));
    }

    fn connection_lost(&self, socket: &mut Option<(WsSink, WsSource)>) {
        *socket = None;
        lock_core(&self.core).closed();
        let _ = self.signal_tx.send(ConnectionSignal::ReconnectRequired);
    }
}
