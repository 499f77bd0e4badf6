// Stateful handles shared across screens.

pub mod use_session;
pub mod use_toast;
