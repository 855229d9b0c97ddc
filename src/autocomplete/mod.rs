//! Autocomplete Core
//!
//! Domain-agnostic search-as-you-type interaction, independent of Leptos.

mod config;
mod controller;
mod state;

pub use config::{AutocompleteConfig, AutocompleteConfigBuilder, FetchFuture, DEFAULT_DEBOUNCE_MS};
pub use controller::{AutocompleteController, OptionView, SearchOutcome};
pub use state::{AutocompleteState, Phase, RenderedOption, RequestTicket};
