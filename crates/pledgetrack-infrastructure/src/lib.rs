// Infrastructure layer: SQLite stores, configuration and logging.
// Implements the repository traits declared by pledgetrack-domain.

pub mod config;
pub mod logging;
pub mod persistence;
