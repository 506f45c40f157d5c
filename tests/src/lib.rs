//! Shared helpers for the integration tests.
use pacer::prelude::*;
use pacer::SinkError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Run a single test lifecycle over `config` and return what ended up in a fresh sink.
pub fn run_once(config: CalculatorConfig) -> MemorySink {
    let sink = MemorySink::new();
    let mut element = CalculatorElement::new(config, sink.clone());
    element.test_started(None);
    element.test_ended(None);
    sink
}

pub fn published(sink: &impl PublicationSink) -> Option<(String, String)> {
    Some((sink.get(OUT_USERS_KEY)?, sink.get(OUT_THINK_KEY)?))
}

/// A sink that always fails, counting the attempts.
#[derive(Default)]
pub struct UnavailableSink {
    pub attempts: AtomicUsize,
}

impl PublicationSink for UnavailableSink {
    fn publish(&self, _entries: &[(&str, String)]) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        Err(SinkError::Unavailable("test sink".to_string()))
    }

    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn remove(&self, _key: &str) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("test sink".to_string()))
    }
}
