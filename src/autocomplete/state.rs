//! Autocomplete State Machine
//!
//! Dropdown phase, rendered options and request sequencing for one search
//! box. Pure data; the controller drives it and performs the side effects.

/// Dropdown phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Dropdown hidden
    Idle,
    /// Dropdown visible with at least one option
    ShowingResults,
}

/// Sequence number of an issued fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// A candidate together with the markup it was rendered to
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedOption<C> {
    pub candidate: C,
    pub markup: String,
}

#[derive(Debug)]
pub struct AutocompleteState<C> {
    phase: Phase,
    input: String,
    options: Vec<RenderedOption<C>>,
    highlighted: Option<usize>,
    /// Last ticket handed out
    issued: u64,
    /// Ticket of the last result written into the state
    applied: u64,
}

impl<C> Default for AutocompleteState<C> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            options: Vec::new(),
            highlighted: None,
            issued: 0,
            applied: 0,
        }
    }
}

impl<C: Clone> AutocompleteState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::ShowingResults
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn options(&self) -> &[RenderedOption<C>] {
        &self.options
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// A response is stale when a newer one has already been applied
    pub fn is_stale(&self, ticket: RequestTicket) -> bool {
        ticket.0 < self.applied
    }

    /// Replace the rendered options and open the dropdown
    ///
    /// An empty `options` list behaves like [`Self::apply_empty`].
    pub fn apply_results(&mut self, ticket: RequestTicket, options: Vec<RenderedOption<C>>) {
        if options.is_empty() {
            self.apply_empty(ticket);
            return;
        }
        self.applied = ticket.0;
        self.options = options;
        self.highlighted = None;
        self.phase = Phase::ShowingResults;
    }

    /// Hide the dropdown; previously rendered options stay in place
    pub fn apply_empty(&mut self, ticket: RequestTicket) {
        self.applied = ticket.0;
        self.phase = Phase::Idle;
        self.highlighted = None;
    }

    /// Hide and empty the dropdown after a failed fetch
    pub fn apply_failure(&mut self, ticket: RequestTicket) {
        self.applied = ticket.0;
        self.phase = Phase::Idle;
        self.options.clear();
        self.highlighted = None;
    }

    /// Outside click or Escape
    pub fn dismiss(&mut self) {
        self.phase = Phase::Idle;
        self.highlighted = None;
    }

    /// Close the dropdown and hand back the chosen candidate
    ///
    /// Returns `None` while hidden or for an out-of-range index.
    pub fn take_selection(&mut self, index: usize) -> Option<C> {
        if self.phase != Phase::ShowingResults {
            return None;
        }
        let candidate = self.options.get(index)?.candidate.clone();
        self.phase = Phase::Idle;
        self.highlighted = None;
        Some(candidate)
    }

    pub fn highlight_next(&mut self) {
        if !self.is_open() {
            return;
        }
        let last = self.options.len() - 1;
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn highlight_previous(&mut self) {
        if !self.is_open() {
            return;
        }
        self.highlighted = self.highlighted.map(|i| i.saturating_sub(1));
    }
}
