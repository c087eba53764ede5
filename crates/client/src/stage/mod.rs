//! Game-stage state machine and its published views.
//!
//! `machine` owns all mutation; `snapshot` is what consumers read;
//! `debounce` implements the quiet-interval policy for live-typed
//! fields.

pub mod debounce;
pub mod machine;
pub mod snapshot;

pub use debounce::{DebouncedField, Debouncer, DEBOUNCE_QUIET_MS};
pub use machine::{MachineInput, StageMachine};
pub use snapshot::{GameSnapshot, Stage, StageView, UserError};
