mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{CheckInEvent, CHECK_IN_DATE_FORMAT};
pub use repository::{CheckInRepository, StoredCheckIn};
