//! Autocomplete Configuration
//!
//! Embedder-supplied projections and capabilities for one search box.

use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::{ConfigError, FetchError};

/// Delay used when the builder is not given one
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

pub type FetchFuture<C> = LocalBoxFuture<'static, Result<Vec<C>, FetchError>>;

/// Validated configuration; build with [`AutocompleteConfig::builder`]
pub struct AutocompleteConfig<C> {
    pub(crate) render_option: Rc<dyn Fn(&C) -> String>,
    pub(crate) input_value: Rc<dyn Fn(&C) -> String>,
    pub(crate) on_option_select: Rc<dyn Fn(C)>,
    pub(crate) fetch_data: Rc<dyn Fn(String) -> FetchFuture<C>>,
    pub(crate) debounce_ms: u32,
}

impl<C> Clone for AutocompleteConfig<C> {
    fn clone(&self) -> Self {
        Self {
            render_option: Rc::clone(&self.render_option),
            input_value: Rc::clone(&self.input_value),
            on_option_select: Rc::clone(&self.on_option_select),
            fetch_data: Rc::clone(&self.fetch_data),
            debounce_ms: self.debounce_ms,
        }
    }
}

impl<C: 'static> AutocompleteConfig<C> {
    pub fn builder() -> AutocompleteConfigBuilder<C> {
        AutocompleteConfigBuilder::default()
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }
}

pub struct AutocompleteConfigBuilder<C> {
    render_option: Option<Rc<dyn Fn(&C) -> String>>,
    input_value: Option<Rc<dyn Fn(&C) -> String>>,
    on_option_select: Option<Rc<dyn Fn(C)>>,
    fetch_data: Option<Rc<dyn Fn(String) -> FetchFuture<C>>>,
    debounce_ms: u32,
}

impl<C> Default for AutocompleteConfigBuilder<C> {
    fn default() -> Self {
        Self {
            render_option: None,
            input_value: None,
            on_option_select: None,
            fetch_data: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl<C: 'static> AutocompleteConfigBuilder<C> {
    /// Markup for one dropdown option
    pub fn render_option(mut self, f: impl Fn(&C) -> String + 'static) -> Self {
        self.render_option = Some(Rc::new(f));
        self
    }

    /// Text placed in the input when a candidate is chosen
    pub fn input_value(mut self, f: impl Fn(&C) -> String + 'static) -> Self {
        self.input_value = Some(Rc::new(f));
        self
    }

    pub fn on_option_select(mut self, f: impl Fn(C) + 'static) -> Self {
        self.on_option_select = Some(Rc::new(f));
        self
    }

    pub fn fetch_data<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<C>, FetchError>> + 'static,
    {
        self.fetch_data = Some(Rc::new(move |query: String| -> FetchFuture<C> { Box::pin(f(query)) }));
        self
    }

    pub fn debounce_ms(mut self, delay_ms: u32) -> Self {
        self.debounce_ms = delay_ms;
        self
    }

    /// Fails if a required function was never supplied
    pub fn build(self) -> Result<AutocompleteConfig<C>, ConfigError> {
        Ok(AutocompleteConfig {
            render_option: self.render_option.ok_or(ConfigError::MissingRenderOption)?,
            input_value: self.input_value.ok_or(ConfigError::MissingInputValue)?,
            on_option_select: self
                .on_option_select
                .unwrap_or_else(|| Rc::new(|_: C| {}) as Rc<dyn Fn(C)>),
            fetch_data: self.fetch_data.ok_or(ConfigError::MissingFetchData)?,
            debounce_ms: self.debounce_ms,
        })
    }
}
