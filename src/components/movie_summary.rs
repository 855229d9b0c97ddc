//! Movie Summary Component
//!
//! Detail card and stat tiles for one side of the comparison.

use leptos::prelude::*;

use crate::comparison::Comparison;
use crate::models::{Side, NOT_AVAILABLE};
use crate::stats::StatKind;
use crate::store::{store_comparison, store_movie, use_app_store};

/// Winners (and every tile before a comparison exists) stay primary
pub fn tile_class(comparison: Option<&Comparison>, kind: StatKind, side: Side) -> &'static str {
    match comparison.and_then(|c| c.winner(kind)) {
        Some(winner) if winner != side => "notification is-warning",
        _ => "notification is-primary",
    }
}

#[component]
pub fn MovieSummary(side: Side) -> impl IntoView {
    let store = use_app_store();
    let comparison = Memo::new(move |_| store_comparison(&store));

    move || {
        store_movie(&store, side).map(|detail| {
            let poster = if detail.poster == NOT_AVAILABLE { String::new() } else { detail.poster.clone() };
            let tiles = StatKind::ALL
                .into_iter()
                .map(|kind| {
                    let raw = kind.raw(&detail).to_string();
                    let value = kind.parse(&raw).map(|v| v.to_string()).unwrap_or_default();
                    view! {
                        <article
                            data-value=value
                            class=move || comparison.with(|c| tile_class(c.as_ref(), kind, side))
                        >
                            <p class="title">{raw}</p>
                            <p class="subtitle">{kind.label()}</p>
                        </article>
                    }
                })
                .collect_view();

            view! {
                <article class="media">
                    <figure class="media-left">
                        <p class="image">
                            <img src=poster />
                        </p>
                    </figure>
                    <div class="media-content">
                        <div class="content">
                            <h1>{detail.title.clone()}</h1>
                            <h4>{detail.genre.clone()}</h4>
                            <p>{detail.plot.clone()}</p>
                        </div>
                    </div>
                </article>
                {tiles}
            }
        })
    }
}
