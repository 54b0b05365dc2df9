mod aggregate;
mod repository;

pub use aggregate::{Pledge, PledgeStatus};
pub use repository::PledgeRepository;
