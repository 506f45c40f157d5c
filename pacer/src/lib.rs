#![cfg_attr(docsrs, feature(doc_cfg))]
//! Throughput pacing for load tests.
//!
//! Given a target throughput, an expected response time and optionally a think time or a fixed
//! number of virtual users, pacer solves Little's Law for the missing value and publishes the
//! user count and think time (`calculated.users`, `calculated.think`) for other test elements to
//! read.
//!
//! ```
//! use pacer::prelude::*;
//!
//! let sink = MemorySink::new();
//! let mut element = CalculatorElement::new(
//!     CalculatorConfig::new().target_tps("10").fixed_users("5"),
//!     sink.clone(),
//! );
//! element.test_started(None);
//!
//! assert_eq!(sink.get("calculated.think").as_deref(), Some("300"));
//! ```

pub mod calculator;
pub mod error;
pub mod lifecycle;
pub mod sink;

pub use calculator::{compute, ThroughputCalculator};
pub use error::{ComputationError, SinkError, Skip};
pub use lifecycle::{CalculatorElement, TestStateListener};
pub use sink::{FanoutSink, MemorySink, PublicationSink};

pub mod prelude {
    pub use crate::calculator::{compute, ThroughputCalculator};
    pub use crate::lifecycle::{CalculatorElement, TestStateListener};
    pub use crate::sink::{FanoutSink, MemorySink, PublicationSink};

    pub use pacer_core::{
        CalculationReport, CalculatorConfig, CalculatorInputs, CalculatorOutputs, Mode,
        OUT_THINK_KEY, OUT_USERS_KEY,
    };
}
