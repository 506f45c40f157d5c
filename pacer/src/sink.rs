//! Publication points for calculated values.
//!
//! Downstream test elements read `calculated.users` and `calculated.think` from a shared
//! key-value space. Instead of a process-wide global, the space is a [`PublicationSink`] handed to
//! the calculator.
use crate::error::SinkError;
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

pub trait PublicationSink: Send + Sync {
    /// Write every entry, overwriting previous values. Either all entries are written or none.
    fn publish(&self, entries: &[(&str, String)]) -> Result<(), SinkError>;

    fn get(&self, key: &str) -> Option<String>;

    /// Drop `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), SinkError>;
}

impl<S: PublicationSink + ?Sized> PublicationSink for &S {
    fn publish(&self, entries: &[(&str, String)]) -> Result<(), SinkError> {
        (**self).publish(entries)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) -> Result<(), SinkError> {
        (**self).remove(key)
    }
}

impl<S: PublicationSink + ?Sized> PublicationSink for Arc<S> {
    fn publish(&self, entries: &[(&str, String)]) -> Result<(), SinkError> {
        (**self).publish(entries)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) -> Result<(), SinkError> {
        (**self).remove(key)
    }
}

impl<S: PublicationSink + ?Sized> PublicationSink for Box<S> {
    fn publish(&self, entries: &[(&str, String)]) -> Result<(), SinkError> {
        (**self).publish(entries)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) -> Result<(), SinkError> {
        (**self).remove(key)
    }
}

/// In-memory variable space.
///
/// Cloning yields another handle onto the same map. Readers never block; a publish swaps in a new
/// map containing all entries at once, so a reader sees either the old or the new pair.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    vars: Arc<ArcSwap<HashMap<String, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars.load().as_ref().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.load().is_empty()
    }
}

impl PublicationSink for MemorySink {
    fn publish(&self, entries: &[(&str, String)]) -> Result<(), SinkError> {
        self.vars.rcu(|vars| {
            let mut vars = HashMap::clone(vars);
            for (key, value) in entries {
                vars.insert(key.to_string(), value.clone());
            }
            vars
        });
        trace!("Published {} entries", entries.len());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.load().get(key).cloned()
    }

    fn remove(&self, key: &str) -> Result<(), SinkError> {
        if self.vars.load().contains_key(key) {
            self.vars.rcu(|vars| {
                let mut vars = HashMap::clone(vars);
                vars.remove(key);
                vars
            });
        }
        Ok(())
    }
}

/// Publishes to several sinks in order, e.g. thread-local variables and global properties.
///
/// All-or-nothing across sinks: when one fails, the sinks already written are restored to the
/// values they held before and the failure is returned.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn PublicationSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl PublicationSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl PublicationSink for FanoutSink {
    fn publish(&self, entries: &[(&str, String)]) -> Result<(), SinkError> {
        let mut written: Vec<(&dyn PublicationSink, Vec<(&str, Option<String>)>)> =
            Vec::with_capacity(self.sinks.len());

        for sink in &self.sinks {
            let previous: Vec<_> = entries.iter().map(|(key, _)| (*key, sink.get(key))).collect();

            if let Err(err) = sink.publish(entries) {
                for (sink, previous) in written.into_iter().rev() {
                    restore(sink, &previous);
                }
                return Err(err);
            }

            written.push((&**sink, previous));
        }

        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.sinks.iter().find_map(|sink| sink.get(key))
    }

    fn remove(&self, key: &str) -> Result<(), SinkError> {
        self.sinks.iter().try_for_each(|sink| sink.remove(key))
    }
}

fn restore(sink: &dyn PublicationSink, previous: &[(&str, Option<String>)]) {
    for (key, value) in previous {
        let res = match value {
            Some(value) => sink.publish(&[(*key, value.clone())]),
            None => sink.remove(key),
        };

        if let Err(err) = res {
            warn!("Failed to restore {key} after a partial publish: {err}");
        }
    }
}
