mod certificate_queries;
mod eligibility_queries;
mod feedback_queries;
mod pledge_queries;
mod stats_queries;

pub use certificate_queries::CertificateQueries;
pub use eligibility_queries::EligibilityQueries;
pub use feedback_queries::{FeedbackQueries, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use pledge_queries::PledgeQueries;
pub use stats_queries::StatsQueries;
