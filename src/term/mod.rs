//! Terminal module - text presentation of the session
//!
//! Formatting is kept separate from terminal control so every line the
//! user sees can be asserted on in tests.

pub mod view;

pub use view::{format_outcome, format_queue, format_stack, MENU};
