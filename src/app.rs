//! Movie Fight App
//!
//! Two search columns, each feeding one side of the comparison.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Autocomplete, MovieSummary};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Side;
use crate::movie_search::movie_search_controller;
use crate::store::{store_tutorial_dismissed, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide store and context to all children
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(config));

    let controllers = movie_search_controller(Side::Left)
        .and_then(|left| Ok((left, movie_search_controller(Side::Right)?)));
    let (left, right) = match controllers {
        Ok(pair) => pair,
        Err(err) => {
            log::error!(target: "app", "search boxes unavailable: {}", err);
            return view! { <p class="notification is-danger">{err.to_string()}</p> }.into_any();
        }
    };

    view! {
        <div class="container">
            <div class="columns">
                <div class="column">
                    <Autocomplete controller=left />
                    <div id="left-summary">
                        <MovieSummary side=Side::Left />
                    </div>
                </div>
                <div class="column">
                    <Autocomplete controller=right />
                    <div id="right-summary">
                        <MovieSummary side=Side::Right />
                    </div>
                </div>
            </div>
            <div class=move || {
                if store_tutorial_dismissed(&store) {
                    "notification is-info tutorial is-hidden"
                } else {
                    "notification is-info tutorial"
                }
            }>
                <h1 class="title">"Search For a Movie on Both Sides"</h1>
                <p class="subtitle">"We will tell you which is best"</p>
            </div>
        </div>
    }
    .into_any()
}
