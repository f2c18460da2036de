//! Business logic and session orchestration.
//!
//! The calculators (`surplus`, `forecast`) are pure functions over the
//! record types plus thin store-reading helpers; `session` sequences one
//! market day's data entry end to end.

pub mod error;
pub mod forecast;
pub mod session;
pub mod surplus;

pub use error::SessionError;
pub use session::{SessionController, SessionSummary};



#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
