pub mod certificate_commands;
pub mod check_in_commands;
pub mod command_handler;
pub mod feedback_commands;
pub mod handlers;
pub mod pledge_commands;
