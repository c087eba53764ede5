//! Debounced broadcast of live-typed fields.
//!
//! Every edit schedules a fire after a fixed quiet interval. A
//! superseded timer is not cancelled; instead the fire compares its
//! captured value against the field's current value and only broadcasts
//! when they still match. Both fire paths run on the same single
//! consumer, so there is no race between the check and the send.

use std::time::Duration;

use tokio::sync::mpsc;

use super::machine::MachineInput;

/// Quiet interval after the last edit before a field is broadcast.
pub const DEBOUNCE_QUIET_MS: u64 = 300;

/// Which free-text field a scheduled broadcast belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncedField {
    Category,
    Clue,
}

/// Schedules debounce fires back into the machine's input channel.
#[derive(Clone)]
pub struct Debouncer {
    input_tx: mpsc::UnboundedSender<MachineInput>,
    quiet: Duration,
}

impl Debouncer {
    pub fn new(input_tx: mpsc::UnboundedSender<MachineInput>) -> Self {
        Self {
            input_tx,
            quiet: Duration::from_millis(DEBOUNCE_QUIET_MS),
        }
    }

    /// Schedule a fire for `value` after the quiet interval.
    pub fn schedule(&self, field: DebouncedField, value: String) {
        let tx = self.input_tx.clone();
        let quiet = self.quiet;
        tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // The machine may already be gone during teardown.
            let _ = tx.send(MachineInput::DebounceFired { field, value });
        });
    }
}
