//! Movie Search Wiring
//!
//! Binds the generic autocomplete to OMDb and to one comparison slot.

use leptos::task::spawn_local;

use crate::autocomplete::{AutocompleteConfig, AutocompleteController};
use crate::context::use_app_context;
use crate::error::ConfigError;
use crate::models::{MovieSummary, Side, NOT_AVAILABLE};
use crate::omdb::OmdbClient;
use crate::runtime::BrowserRuntime;
use crate::store::{store_dismiss_tutorial, store_set_movie, use_app_store};

/// Option markup: poster thumbnail followed by "Title (Year)"
pub fn render_movie_option(movie: &MovieSummary) -> String {
    let poster = if movie.poster == NOT_AVAILABLE { "" } else { movie.poster.as_str() };
    format!(
        r#"<img src="{}"/> {} ({})"#,
        escape_html(poster),
        escape_html(&movie.title),
        escape_html(&movie.year)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared movie configuration; `on_select` differs per side
pub fn movie_autocomplete_config(
    client: OmdbClient,
    debounce_ms: u32,
    on_select: impl Fn(MovieSummary) + 'static,
) -> Result<AutocompleteConfig<MovieSummary>, ConfigError> {
    AutocompleteConfig::builder()
        .render_option(render_movie_option)
        .input_value(|movie: &MovieSummary| movie.title.clone())
        .on_option_select(on_select)
        .fetch_data(move |term: String| {
            let client = client.clone();
            async move { client.search(&term).await }
        })
        .debounce_ms(debounce_ms)
        .build()
}

/// Controller for one side's search box
///
/// Must run under the `App` owner: it reads the app context and store.
pub fn movie_search_controller(
    side: Side,
) -> Result<AutocompleteController<MovieSummary, BrowserRuntime>, ConfigError> {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = ctx.client.clone();

    let on_select = move |movie: MovieSummary| {
        store_dismiss_tutorial(&store);
        let client = client.clone();
        spawn_local(async move {
            match client.movie_detail(&movie.imdb_id).await {
                Ok(detail) => {
                    log::info!(target: "app", "loaded {} for the {} side", detail.title, side.label());
                    store_set_movie(&store, side, detail);
                }
                Err(err) => {
                    log::warn!(target: "app", "could not load {}: {}", movie.imdb_id, err);
                }
            }
        });
    };

    let config = movie_autocomplete_config(ctx.client, ctx.config.debounce_ms, on_select)?;
    Ok(AutocompleteController::new(config, BrowserRuntime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn summary(title: &str, year: &str, poster: &str) -> MovieSummary {
        MovieSummary {
            title: title.to_string(),
            year: year.to_string(),
            imdb_id: "tt0000001".to_string(),
            kind: "movie".to_string(),
            poster: poster.to_string(),
        }
    }

    #[test]
    fn test_render_option() {
        let movie = summary("Batman", "1989", "https://img.example/batman.jpg");
        assert_eq!(
            render_movie_option(&movie),
            r#"<img src="https://img.example/batman.jpg"/> Batman (1989)"#
        );
    }

    #[test]
    fn test_render_option_without_poster_and_with_markup_in_title() {
        let movie = summary("<Tom & Jerry>", "1940–1958", "N/A");
        assert_eq!(
            render_movie_option(&movie),
            r#"<img src=""/> &lt;Tom &amp; Jerry&gt; (1940–1958)"#
        );
    }

    #[test]
    fn test_movie_config_projections() {
        let client = OmdbClient::new(&AppConfig::default());
        let config = movie_autocomplete_config(client, 500, |_| {}).expect("complete config");
        let movie = summary("Heat", "1995", "N/A");

        assert_eq!((config.input_value)(&movie), "Heat");
        assert_eq!(config.debounce_ms(), 500);
        // Blank terms resolve without a request
        let hits = futures::executor::block_on((config.fetch_data)("  ".to_string())).unwrap();
        assert!(hits.is_empty());
    }
}
