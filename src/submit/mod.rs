//! Submit handlers for validated registrations

mod log_handler;
mod traits;

pub use log_handler::LogSubmitHandler;
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
