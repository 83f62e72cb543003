pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod error_boundary;
pub mod guard;
pub mod layout;
pub mod messages;
