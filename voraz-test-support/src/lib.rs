//! Shared test utilities used across voraz crates.

pub mod tracing {
    //! Recording layer for asserting on spans and events in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::{Layer, Registry};

    /// Captures closed spans and emitted events for later assertions.
    ///
    /// Clones share the same buffers, so a clone can be installed on a
    /// subscriber while the original is kept for inspection.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Runs `body` with a registry carrying this layer as the default
        /// subscriber for the current thread.
        ///
        /// Work handed to other threads is not captured.
        ///
        /// # Examples
        /// ```
        /// use voraz_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// layer.capture(|| tracing::info_span!("demo").in_scope(|| ()));
        /// assert!(layer.span_named("demo").is_some());
        /// ```
        pub fn capture<T>(&self, body: impl FnOnce() -> T) -> T {
            let subscriber = Registry::default().with(self.clone());
            tracing::subscriber::with_default(subscriber, body)
        }

        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use voraz_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            lock(&self.spans)
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns every event whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// A closed span with its recorded fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the rendered value of `field`, if recorded.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    /// An emitted event with its level, target, and fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Log level of the event.
        pub level: Level,
        /// Event target from the metadata.
        pub target: String,
        /// Structured fields attached to the event.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the event's `message` field.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    struct SpanData {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = HashMap::new();
            attrs.record(&mut FieldRecorder {
                fields: &mut fields,
            });
            span.extensions_mut().insert(SpanData {
                name: attrs.metadata().name().to_owned(),
                fields,
            });
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(data) = extensions.get_mut::<SpanData>() {
                values.record(&mut FieldRecorder {
                    fields: &mut data.fields,
                });
            }
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(data) = span.extensions_mut().remove::<SpanData>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: data.name,
                fields: data.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder {
                fields: &mut fields,
            });
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: impl ToString) {
            self.fields.insert(field.name().to_owned(), value.to_string());
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value);
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value);
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value);
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value);
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value);
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn records_late_span_fields() {
            let layer = RecordingLayer::default();
            layer.capture(|| {
                let span = tracing::info_span!("work", done = tracing::field::Empty, size = 3_u64);
                span.in_scope(|| tracing::info!(step = 1_u64, "halfway"));
                span.record("done", true);
            });

            let span = layer.span_named("work").expect("span must be recorded");
            assert_eq!(span.field("size"), Some("3"));
            assert_eq!(span.field("done"), Some("true"));
            let events = layer.events_with_message("halfway");
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].level, Level::INFO);
            assert_eq!(events[0].fields.get("step").map(String::as_str), Some("1"));
        }

        #[test]
        fn capture_is_scoped_to_the_closure() {
            let layer = RecordingLayer::default();
            layer.capture(|| tracing::warn!("inside"));
            tracing::warn!("outside");
            assert_eq!(layer.events().len(), 1);
        }
    }
}

pub mod ci;
