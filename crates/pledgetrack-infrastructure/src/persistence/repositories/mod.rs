mod certificate_repo;
mod check_in_repo;
mod feedback_repo;
mod pledge_repo;

pub use certificate_repo::SqliteCertificateRepository;
pub use check_in_repo::SqliteCheckInRepository;
pub use feedback_repo::SqliteFeedbackRepository;
pub use pledge_repo::SqlitePledgeRepository;
