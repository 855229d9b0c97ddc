//! Autocomplete Controller
//!
//! Owns the interaction state of one search box: debounced fetching,
//! option rendering, selection dispatch, keyboard navigation and
//! outside-click dismissal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;

use super::config::AutocompleteConfig;
use super::state::{AutocompleteState, Phase, RenderedOption, RequestTicket};
use crate::debounce::{debounce, Debouncer};
use crate::error::FetchError;
use crate::listeners::{ListenerRegistry, Subscription};
use crate::runtime::Runtime;

/// How a completed fetch affected the dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Dropdown opened with this many options
    Shown(usize),
    /// Empty result; dropdown hidden
    Hidden,
    /// A newer response was already applied; nothing changed
    Stale,
}

/// Render-ready view of one option
#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub index: usize,
    pub markup: String,
    pub highlighted: bool,
}

struct ControllerInner<C: 'static, R: Runtime> {
    config: AutocompleteConfig<C>,
    runtime: R,
    state: RefCell<AutocompleteState<C>>,
    debouncer: Debouncer<String, R>,
    outside_click: RefCell<Option<Subscription>>,
    change_hook: RefCell<Option<Rc<dyn Fn()>>>,
}

/// Shared handle to one search box controller
pub struct AutocompleteController<C: 'static, R: Runtime> {
    inner: Rc<ControllerInner<C, R>>,
}

impl<C: 'static, R: Runtime> Clone for AutocompleteController<C, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Clone + 'static, R: Runtime> AutocompleteController<C, R> {
    pub fn new(config: AutocompleteConfig<C>, runtime: R) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<ControllerInner<C, R>>| {
            let weak = weak.clone();
            let debouncer = debounce(runtime.clone(), config.debounce_ms, move |query: String| {
                if let Some(inner) = weak.upgrade() {
                    AutocompleteController { inner }.spawn_search(query);
                }
            });
            ControllerInner {
                config,
                runtime,
                state: RefCell::new(AutocompleteState::new()),
                debouncer,
                outside_click: RefCell::new(None),
                change_hook: RefCell::new(None),
            }
        });
        Self { inner }
    }

    /// Called after every visible state change
    pub fn set_change_hook(&self, hook: impl Fn() + 'static) {
        *self.inner.change_hook.borrow_mut() = Some(Rc::new(hook));
    }

    /// Input event: record the text and restart the debounce window
    pub fn handle_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.state.borrow_mut().set_input(text.clone());
        self.inner.debouncer.call(text);
    }

    fn spawn_search(&self, query: String) {
        log::debug!(target: "autocomplete", "searching for {:?}", query);
        let search = self.search(query);
        self.inner.runtime.spawn(Box::pin(async move {
            if let Err(err) = search.await {
                log::warn!(target: "autocomplete", "suggestion fetch failed: {}", err);
            }
        }));
    }

    /// Fetch suggestions for `query` and apply them to the dropdown
    ///
    /// The fetch starts immediately. A failure hides and empties the
    /// dropdown and is returned to the caller.
    pub fn search(&self, query: String) -> LocalBoxFuture<'static, Result<SearchOutcome, FetchError>> {
        let ticket = self.inner.state.borrow_mut().begin_request();
        let fetch = (self.inner.config.fetch_data)(query);
        let weak = Rc::downgrade(&self.inner);
        Box::pin(async move {
            let result = fetch.await;
            match weak.upgrade() {
                Some(inner) => AutocompleteController { inner }.apply(ticket, result),
                None => result.map(|_| SearchOutcome::Stale),
            }
        })
    }

    fn apply(
        &self,
        ticket: RequestTicket,
        result: Result<Vec<C>, FetchError>,
    ) -> Result<SearchOutcome, FetchError> {
        if self.inner.state.borrow().is_stale(ticket) {
            log::debug!(target: "autocomplete", "discarding stale response {:?}", ticket);
            return result.map(|_| SearchOutcome::Stale);
        }

        let outcome = match result {
            Ok(candidates) if candidates.is_empty() => {
                self.inner.state.borrow_mut().apply_empty(ticket);
                Ok(SearchOutcome::Hidden)
            }
            Ok(candidates) => {
                let options: Vec<RenderedOption<C>> = candidates
                    .into_iter()
                    .map(|candidate| RenderedOption {
                        markup: (self.inner.config.render_option)(&candidate),
                        candidate,
                    })
                    .collect();
                let count = options.len();
                self.inner.state.borrow_mut().apply_results(ticket, options);
                log::debug!(target: "autocomplete", "showing {} options", count);
                Ok(SearchOutcome::Shown(count))
            }
            Err(err) => {
                self.inner.state.borrow_mut().apply_failure(ticket);
                Err(err)
            }
        };
        self.notify();
        outcome
    }

    /// Choose option `index`: close, fill the input, notify the consumer
    ///
    /// Returns `false` when the dropdown is hidden or the index is invalid.
    pub fn activate_option(&self, index: usize) -> bool {
        let Some(candidate) = self.inner.state.borrow_mut().take_selection(index) else {
            return false;
        };
        let text = (self.inner.config.input_value)(&candidate);
        self.inner.state.borrow_mut().set_input(text);
        self.notify();
        (self.inner.config.on_option_select)(candidate);
        true
    }

    /// Page-level click; only clicks outside the root dismiss
    pub fn handle_document_click(&self, inside_root: bool) {
        if inside_root || !self.is_open() {
            return;
        }
        self.inner.state.borrow_mut().dismiss();
        self.notify();
    }

    /// Keyboard navigation; returns whether the key was consumed
    pub fn handle_key(&self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "ArrowDown" => self.inner.state.borrow_mut().highlight_next(),
            "ArrowUp" => self.inner.state.borrow_mut().highlight_previous(),
            "Enter" => {
                let highlighted = self.inner.state.borrow().highlighted();
                return highlighted.map_or(false, |i| self.activate_option(i));
            }
            "Escape" => self.inner.state.borrow_mut().dismiss(),
            _ => return false,
        }
        self.notify();
        true
    }

    /// Subscribe to page-level clicks, replacing any earlier subscription
    pub fn attach_outside_click<E: 'static>(
        &self,
        registry: &ListenerRegistry<E>,
        is_inside: impl Fn(&E) -> bool + 'static,
    ) {
        let weak = Rc::downgrade(&self.inner);
        let subscription = registry.subscribe(move |event| {
            if let Some(inner) = weak.upgrade() {
                AutocompleteController { inner }.handle_document_click(is_inside(event));
            }
        });
        *self.inner.outside_click.borrow_mut() = Some(subscription);
    }

    /// Release the pending timer, the click subscription and the change hook
    pub fn teardown(&self) {
        self.inner.debouncer.cancel();
        drop(self.inner.outside_click.borrow_mut().take());
        drop(self.inner.change_hook.borrow_mut().take());
    }

    fn notify(&self) {
        let hook = self.inner.change_hook.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase()
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().is_open()
    }

    pub fn input_text(&self) -> String {
        self.inner.state.borrow().input().to_string()
    }

    pub fn is_search_pending(&self) -> bool {
        self.inner.debouncer.is_pending()
    }

    pub fn has_outside_click(&self) -> bool {
        self.inner.outside_click.borrow().is_some()
    }

    pub fn options(&self) -> Vec<OptionView> {
        let state = self.inner.state.borrow();
        let highlighted = state.highlighted();
        state
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                index,
                markup: option.markup.clone(),
                highlighted: highlighted == Some(index),
            })
            .collect()
    }

    pub fn candidates(&self) -> Vec<C> {
        self.inner
            .state
            .borrow()
            .options()
            .iter()
            .map(|option| option.candidate.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::manual::ManualRuntime;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Clone, Debug, PartialEq)]
    struct Movie {
        title: String,
    }

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
        }
    }

    type Responses = Rc<RefCell<HashMap<String, Result<Vec<Movie>, FetchError>>>>;

    struct Fixture {
        pool: LocalPool,
        rt: ManualRuntime,
        controller: AutocompleteController<Movie, ManualRuntime>,
        responses: Responses,
        queries: Rc<RefCell<Vec<String>>>,
        selected: Rc<RefCell<Vec<Movie>>>,
    }

    impl Fixture {
        fn new() -> Self {
            let pool = LocalPool::new();
            let rt = ManualRuntime::new(pool.spawner());
            let responses: Responses = Rc::default();
            let queries = Rc::new(RefCell::new(Vec::new()));
            let selected = Rc::new(RefCell::new(Vec::new()));

            let config = {
                let responses = Rc::clone(&responses);
                let queries = Rc::clone(&queries);
                let selected = Rc::clone(&selected);
                AutocompleteConfig::builder()
                    .render_option(|m: &Movie| format!("<span>{}</span>", m.title))
                    .input_value(|m: &Movie| m.title.clone())
                    .on_option_select(move |m| selected.borrow_mut().push(m))
                    .fetch_data(move |query: String| {
                        queries.borrow_mut().push(query.clone());
                        let result = responses
                            .borrow()
                            .get(&query)
                            .cloned()
                            .unwrap_or_else(|| Ok(Vec::new()));
                        async move { result }
                    })
                    .build()
                    .expect("complete config")
            };
            let controller = AutocompleteController::new(config, rt.clone());

            Self {
                pool,
                rt,
                controller,
                responses,
                queries,
                selected,
            }
        }

        fn respond(&self, query: &str, result: Result<Vec<Movie>, FetchError>) {
            self.responses.borrow_mut().insert(query.to_string(), result);
        }

        /// Type `text`, let the debounce window elapse and drain tasks
        fn type_and_settle(&mut self, text: &str) {
            self.controller.handle_input(text);
            self.rt.advance(500);
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn test_batman_scenario() {
        let mut fx = Fixture::new();
        fx.respond("bat", Ok(vec![movie("Batman"), movie("Batman Returns")]));

        fx.controller.handle_input("b");
        fx.rt.advance(120);
        fx.controller.handle_input("ba");
        fx.rt.advance(120);
        fx.type_and_settle("bat");

        assert_eq!(*fx.queries.borrow(), vec!["bat"]);
        assert!(fx.controller.is_open());
        let markups: Vec<String> = fx.controller.options().into_iter().map(|o| o.markup).collect();
        assert_eq!(markups, vec!["<span>Batman</span>", "<span>Batman Returns</span>"]);

        assert!(fx.controller.activate_option(0));
        assert_eq!(fx.controller.input_text(), "Batman");
        assert_eq!(fx.controller.phase(), Phase::Idle);
        assert_eq!(*fx.selected.borrow(), vec![movie("Batman")]);
    }

    #[test]
    fn test_no_results_scenario() {
        let mut fx = Fixture::new();
        fx.respond("zzzqqq", Ok(vec![]));

        fx.type_and_settle("zzzqqq");

        assert_eq!(fx.controller.phase(), Phase::Idle);
        assert!(fx.controller.options().is_empty());
    }

    #[test]
    fn test_empty_result_hides_open_dropdown() {
        let mut fx = Fixture::new();
        fx.respond("heat", Ok(vec![movie("Heat")]));
        fx.type_and_settle("heat");
        assert!(fx.controller.is_open());

        fx.type_and_settle("heatxq");
        assert!(!fx.controller.is_open());
    }

    #[test]
    fn test_results_keep_fetch_order() {
        let mut fx = Fixture::new();
        let titles = ["Zodiac", "Alien", "Memento", "Alien"];
        fx.respond("m", Ok(titles.iter().map(|t| movie(t)).collect()));

        fx.type_and_settle("m");

        let candidates: Vec<String> = fx.controller.candidates().into_iter().map(|m| m.title).collect();
        assert_eq!(candidates, titles);
        assert_eq!(fx.controller.options().len(), 4);
    }

    #[test]
    fn test_activation_invokes_consumer_once() {
        let mut fx = Fixture::new();
        fx.respond("up", Ok(vec![movie("Up"), movie("Up in the Air")]));
        fx.type_and_settle("up");

        assert!(fx.controller.activate_option(1));
        assert!(!fx.controller.activate_option(1));
        assert_eq!(fx.controller.input_text(), "Up in the Air");
        assert_eq!(*fx.selected.borrow(), vec![movie("Up in the Air")]);
    }

    #[test]
    fn test_outside_click_dismisses_inside_click_does_not() {
        let mut fx = Fixture::new();
        let clicks = ListenerRegistry::<bool>::new();
        fx.controller.attach_outside_click(&clicks, |inside| *inside);

        // Idle + outside click is a no-op
        clicks.dispatch(&false);
        assert_eq!(fx.controller.phase(), Phase::Idle);

        fx.respond("jaws", Ok(vec![movie("Jaws")]));
        fx.type_and_settle("jaws");

        clicks.dispatch(&true);
        assert!(fx.controller.is_open());
        clicks.dispatch(&false);
        assert!(!fx.controller.is_open());
    }

    #[test]
    fn test_fetch_failure_hides_and_surfaces_error() {
        let mut fx = Fixture::new();
        fx.respond("rocky", Ok(vec![movie("Rocky")]));
        fx.type_and_settle("rocky");
        assert!(fx.controller.is_open());

        fx.respond("boom", Err(FetchError::Network("offline".to_string())));
        let result = fx.pool.run_until(fx.controller.search("boom".to_string()));

        assert_eq!(result, Err(FetchError::Network("offline".to_string())));
        assert!(!fx.controller.is_open());
        assert!(fx.controller.options().is_empty());
    }

    #[test]
    fn test_fetch_failure_on_debounced_path_is_contained() {
        let mut fx = Fixture::new();
        fx.respond("boom", Err(FetchError::Status(503)));

        fx.type_and_settle("boom");

        assert_eq!(fx.controller.phase(), Phase::Idle);
        assert!(fx.controller.options().is_empty());
    }

    #[test]
    fn test_older_response_arriving_late_is_discarded() {
        let mut pool = LocalPool::new();
        let rt = ManualRuntime::new(pool.spawner());
        let senders: Rc<RefCell<HashMap<String, oneshot::Sender<Result<Vec<Movie>, FetchError>>>>> =
            Rc::default();

        let config = {
            let senders = Rc::clone(&senders);
            AutocompleteConfig::builder()
                .render_option(|m: &Movie| m.title.clone())
                .input_value(|m: &Movie| m.title.clone())
                .fetch_data(move |query: String| {
                    let (tx, rx) = oneshot::channel();
                    senders.borrow_mut().insert(query, tx);
                    async move {
                        rx.await
                            .unwrap_or_else(|_| Err(FetchError::Network("dropped".to_string())))
                    }
                })
                .build()
                .expect("complete config")
        };
        let controller = AutocompleteController::new(config, rt);

        let older = controller.search("ali".to_string());
        let newer = controller.search("alien".to_string());

        let send = |query: &str, titles: &[&str]| {
            let tx = senders.borrow_mut().remove(query).expect("fetch in flight");
            let _ = tx.send(Ok(titles.iter().map(|t| movie(t)).collect()));
        };
        send("alien", &["Alien"]);
        send("ali", &["Ali", "Alien Nation"]);

        assert_eq!(pool.run_until(newer), Ok(SearchOutcome::Shown(1)));
        assert_eq!(pool.run_until(older), Ok(SearchOutcome::Stale));
        assert_eq!(controller.candidates(), vec![movie("Alien")]);
    }

    #[test]
    fn test_keyboard_navigation_and_confirm() {
        let mut fx = Fixture::new();
        fx.respond("se", Ok(vec![movie("Se7en"), movie("Serenity")]));

        assert!(!fx.controller.handle_key("ArrowDown"));
        fx.type_and_settle("se");

        assert!(fx.controller.handle_key("ArrowDown"));
        assert!(fx.controller.handle_key("ArrowDown"));
        let highlighted: Vec<bool> = fx.controller.options().iter().map(|o| o.highlighted).collect();
        assert_eq!(highlighted, vec![false, true]);

        assert!(!fx.controller.handle_key("a"));
        assert!(fx.controller.handle_key("Enter"));
        assert_eq!(fx.controller.input_text(), "Serenity");
        assert_eq!(*fx.selected.borrow(), vec![movie("Serenity")]);
    }

    #[test]
    fn test_escape_dismisses_and_enter_without_highlight_is_ignored() {
        let mut fx = Fixture::new();
        fx.respond("her", Ok(vec![movie("Her")]));
        fx.type_and_settle("her");

        assert!(!fx.controller.handle_key("Enter"));
        assert!(fx.controller.is_open());
        assert!(fx.controller.handle_key("Escape"));
        assert!(!fx.controller.is_open());
        assert!(fx.selected.borrow().is_empty());
    }

    #[test]
    fn test_change_hook_fires_on_visible_changes() {
        let mut fx = Fixture::new();
        let changes = Rc::new(Cell::new(0));
        {
            let changes = Rc::clone(&changes);
            fx.controller.set_change_hook(move || changes.set(changes.get() + 1));
        }
        fx.respond("ran", Ok(vec![movie("Ran")]));

        fx.type_and_settle("ran");
        assert_eq!(changes.get(), 1);
        fx.controller.activate_option(0);
        assert_eq!(changes.get(), 2);
        // Dismissing an idle dropdown changes nothing
        fx.controller.handle_document_click(false);
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn test_teardown_cancels_pending_search() {
        let fx = Fixture::new();
        fx.controller.handle_input("dune");
        assert!(fx.controller.is_search_pending());

        fx.controller.teardown();
        fx.rt.advance(1_000);

        assert!(fx.queries.borrow().is_empty());
        assert!(!fx.controller.is_search_pending());
    }

    #[test]
    fn test_listener_count_stays_bounded() {
        let pool = LocalPool::new();
        let rt = ManualRuntime::new(pool.spawner());
        let clicks = ListenerRegistry::<bool>::new();

        for round in 0..50 {
            let config = AutocompleteConfig::builder()
                .render_option(|m: &Movie| m.title.clone())
                .input_value(|m: &Movie| m.title.clone())
                .fetch_data(|_| async { Ok(Vec::new()) })
                .build()
                .expect("complete config");
            let controller = AutocompleteController::new(config, rt.clone());
            controller.attach_outside_click(&clicks, |inside| *inside);
            controller.attach_outside_click(&clicks, |inside| *inside);
            assert_eq!(clicks.len(), 1);

            if round % 2 == 0 {
                controller.teardown();
                assert!(!controller.has_outside_click());
            }
            // Dropping the last handle unsubscribes as well
            drop(controller);
            assert!(clicks.is_empty());
        }
    }
}
