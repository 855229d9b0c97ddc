//! Global Application State Store
//!
//! One slot per comparison side, using Leptos reactive_stores for
//! field-level reactivity. The comparison runs once both slots are filled.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::comparison::{compare, Comparison};
use crate::models::{MovieDetail, Side};
use crate::stats::MovieStats;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Detail chosen in the left search box
    pub left: Option<MovieDetail>,
    /// Detail chosen in the right search box
    pub right: Option<MovieDetail>,
    /// Hidden after the first selection on either side
    pub tutorial_dismissed: bool,
}

/// `None` until both sides are present
pub fn comparison_of(left: Option<&MovieDetail>, right: Option<&MovieDetail>) -> Option<Comparison> {
    let (left, right) = (left?, right?);
    Some(compare(
        &MovieStats::from_detail(left),
        &MovieStats::from_detail(right),
    ))
}

pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Fill one side's slot
pub fn store_set_movie(store: &AppStore, side: Side, detail: MovieDetail) {
    match side {
        Side::Left => *store.left().write() = Some(detail),
        Side::Right => *store.right().write() = Some(detail),
    }
    if let Some(comparison) = store_comparison_untracked(store) {
        log::info!(
            target: "app",
            "comparison ready: left {} / right {}",
            comparison.wins(Side::Left),
            comparison.wins(Side::Right)
        );
    }
}

/// Tracked read of one side's slot
pub fn store_movie(store: &AppStore, side: Side) -> Option<MovieDetail> {
    match side {
        Side::Left => store.left().get(),
        Side::Right => store.right().get(),
    }
}

/// Tracked comparison of both slots
pub fn store_comparison(store: &AppStore) -> Option<Comparison> {
    let left = store.left().get();
    let right = store.right().get();
    comparison_of(left.as_ref(), right.as_ref())
}

fn store_comparison_untracked(store: &AppStore) -> Option<Comparison> {
    let left = store.left().get_untracked();
    let right = store.right().get_untracked();
    comparison_of(left.as_ref(), right.as_ref())
}

pub fn store_dismiss_tutorial(store: &AppStore) {
    if !store.tutorial_dismissed().get_untracked() {
        store.tutorial_dismissed().set(true);
    }
}

pub fn store_tutorial_dismissed(store: &AppStore) -> bool {
    store.tutorial_dismissed().get()
}
