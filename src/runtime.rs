//! Cooperative Runtime
//!
//! Timer and task-spawning capabilities used by the autocomplete core.
//! The browser runtime is backed by `gloo-timers` and Leptos' local executor.

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;

/// Single-threaded scheduling capabilities
///
/// Dropping a `TimerHandle` before it fires must cancel the timer.
pub trait Runtime: Clone + 'static {
    type TimerHandle: 'static;

    /// Run `task` once after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::TimerHandle;

    /// Drive a `!Send` future to completion on the current thread
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Runtime for the browser event loop
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    type TimerHandle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}
