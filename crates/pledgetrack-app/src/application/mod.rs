pub mod clock;
pub mod commands;
pub mod dtos;
pub mod queries;

pub use clock::{Clock, SystemClock};
