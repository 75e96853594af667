//! Form rendering module
//!
//! - `controls`: text and select inputs bound to form fields
//! - `field_renderer`: bordered field box drawing
//! - `registration_form`: the registration panel

mod controls;
mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
