//! Tracing support for the graph algorithms.
//!
//! With the `tracing` feature enabled, algorithms open spans through
//! [`info_span!`] and report per-round details through `debug!`, and
//! [`init_tracing`] installs a layer that totals the time spent in each span.
//! Without the feature, the macros expand to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the timing layer as the global subscriber.  Only the first
    /// call has any effect, and it does nothing if another global subscriber
    /// is already set.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Snapshots the span totals recorded on the current thread as
    /// `(name, total time, count)`, ordered by name.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        SPAN_TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(&name, &(duration, count))| (name, duration, count))
                .collect()
        })
    }

    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    // Re-export tracing macros for convenience
    pub use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    // Provide no-op macro replacements for info_span and debug
    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub use crate::{debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
