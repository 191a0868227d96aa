//! Hooks invoked by [`Context::invoke_all`][crate::Context::invoke_all].

/// Callbacks fired after a batch has been computed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks always run sequentially in
/// input order, even when the batch itself ran in parallel.
///
/// # Example — failure printer
///
/// ```rust,ignore
/// struct FailurePrinter;
///
/// impl ContextObserver for FailurePrinter {
///     fn on_invoke(&mut self, index: usize, behavior: &str, ok: bool) {
///         if !ok {
///             eprintln!("input {index} rejected by {behavior}");
///         }
///     }
/// }
/// ```
pub trait ContextObserver {
    /// Called once per input.  `ok` is `false` when the behavior returned an
    /// error for it.
    fn on_invoke(&mut self, _index: usize, _behavior: &str, _ok: bool) {}

    /// Called once after every `on_invoke` of the batch.
    fn on_batch_end(&mut self, _total: usize, _failed: usize) {}
}

/// A [`ContextObserver`] that does nothing.
pub struct NoopObserver;

impl ContextObserver for NoopObserver {}

/// Running totals across one or more batches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub batches: usize,
    pub invoked: usize,
    pub failed:  usize,
}

impl ContextObserver for BatchStats {
    fn on_invoke(&mut self, _index: usize, _behavior: &str, ok: bool) {
        self.invoked += 1;
        if !ok {
            self.failed += 1;
        }
    }

    fn on_batch_end(&mut self, _total: usize, _failed: usize) {
        self.batches += 1;
    }
}
