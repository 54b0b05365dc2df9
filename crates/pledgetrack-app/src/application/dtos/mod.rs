mod certificate_dto;
mod check_in_dto;
mod eligibility_dto;
mod feedback_dto;
mod pledge_dto;
mod stats_dto;

pub use certificate_dto::{CertificateDto, CertificateVerificationDto};
pub use check_in_dto::CheckInDto;
pub use eligibility_dto::{DayStatusDto, EligibilityDto};
pub use feedback_dto::{FeedbackDto, FeedbackPageDto};
pub use pledge_dto::PledgeDto;
pub use stats_dto::StatsDto;

/// Wire format for calendar dates.
pub(crate) const DATE_FORMAT: &str = pledgetrack_domain::check_in::CHECK_IN_DATE_FORMAT;
