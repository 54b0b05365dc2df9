// Application layer and wiring for PledgeTrack.
// Transports (HTTP, IPC) sit on top of `presentation::AppState`.

pub mod application;
pub mod presentation;

pub use presentation::{bootstrap, AppState, CommandError};
