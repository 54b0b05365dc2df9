mod create_pledge_handler;
mod delete_feedback_handler;
mod issue_certificate_handler;
mod record_check_in_handler;
mod submit_feedback_handler;


pub use create_pledge_handler::CreatePledgeCommandHandler;
pub use delete_feedback_handler::DeleteFeedbackCommandHandler;
pub use issue_certificate_handler::IssueCertificateCommandHandler;
pub use record_check_in_handler::RecordCheckInCommandHandler;
pub use submit_feedback_handler::SubmitFeedbackCommandHandler;
