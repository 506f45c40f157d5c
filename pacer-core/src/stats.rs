use crate::{CalculatorOutputs, Mode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a successful calculation.
///
/// Only `outputs` is ever published; the rest is diagnostic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationReport {
    pub mode: Mode,
    pub outputs: CalculatorOutputs,
    /// Think time before clamping at zero, in seconds.
    pub raw_think_secs: f64,
    /// Throughput the fixed users/think pair can reach. Only set for [`Mode::Fixed`], where it
    /// is not reconciled with the target.
    pub achievable_tps: Option<f64>,
}
