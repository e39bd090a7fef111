//! Terminal output formatting
//!
//! Display utilities for banners, guess history, and player feedback.

pub mod display;
pub mod formatters;

pub use display::{
    print_encouragement, print_farewell, print_history, print_loss, print_low_attempts_warning,
    print_welcome, print_win,
};
