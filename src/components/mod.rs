//! UI Components
//!
//! Reusable Leptos components.

mod autocomplete;
mod movie_summary;

pub use autocomplete::Autocomplete;
pub use movie_summary::MovieSummary;
