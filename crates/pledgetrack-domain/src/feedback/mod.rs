mod aggregate;
mod repository;

pub use aggregate::{Feedback, MAX_RATING, MIN_RATING};
pub use repository::FeedbackRepository;
