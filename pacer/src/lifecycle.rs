//! Test lifecycle integration.
//!
//! The calculator runs once per test, when the test starts. Whatever drives the test (a host
//! runner, the CLI, a test harness) fires these events explicitly.
use crate::calculator::ThroughputCalculator;
use crate::sink::PublicationSink;
use pacer_core::{CalculatorConfig, CalculatorOutputs};
use tracing::{debug, info_span};

pub trait TestStateListener {
    /// Fired once when a test run starts, optionally on a named remote host.
    fn test_started(&mut self, host: Option<&str>);

    /// Fired once when a test run ends.
    fn test_ended(&mut self, host: Option<&str>);
}

/// A configured calculator bound to its publication sink.
pub struct CalculatorElement<S> {
    config: CalculatorConfig,
    calculator: ThroughputCalculator<S>,
    last_published: Option<CalculatorOutputs>,
}

impl<S: PublicationSink> CalculatorElement<S> {
    pub fn new(config: CalculatorConfig, sink: S) -> Self {
        Self {
            config,
            calculator: ThroughputCalculator::new(sink),
            last_published: None,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CalculatorConfig {
        &mut self.config
    }

    pub fn sink(&self) -> &S {
        self.calculator.sink()
    }

    /// Outputs of the most recent successful run. A skipped run resets this to `None`.
    pub fn last_published(&self) -> Option<CalculatorOutputs> {
        self.last_published
    }
}

impl<S: PublicationSink> TestStateListener for CalculatorElement<S> {
    fn test_started(&mut self, host: Option<&str>) {
        let _span = info_span!("test_started", host = host.unwrap_or("local")).entered();
        // Inputs are re-read from the configuration on every run.
        let inputs = self.config.inputs();
        self.last_published = self.calculator.compute_and_publish(&inputs);
    }

    fn test_ended(&mut self, host: Option<&str>) {
        debug!("Test ended on {}", host.unwrap_or("local"));
    }
}
