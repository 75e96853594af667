//! Application state module

mod forms;
mod locale;

pub use forms::*;
pub use locale::*;
