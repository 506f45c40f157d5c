//! Little's Law solver.
//!
//! With `N` users, a target throughput `X`, response time `R` and think time `Z`,
//! `N = X * (R + Z) / k` where `k` is the number of transactions per iteration. Depending on which
//! of `N` and `Z` the user fixed, the other one is solved for (see [`Mode`]).
use crate::error::{ComputationError, Skip};
use crate::sink::PublicationSink;
use pacer_core::{CalculationReport, CalculatorInputs, CalculatorOutputs, Mode};
use std::time::Duration;
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn};

/// Compute users and think time for `inputs` without publishing anything.
pub fn compute(inputs: &CalculatorInputs) -> Result<CalculationReport, Skip> {
    let target_tps = inputs.target_tps;
    if target_tps <= 0. {
        return Err(Skip::InvalidTarget(target_tps));
    }

    let response_secs = inputs.response_secs();
    let k = inputs.transactions_per_iteration as f64;
    let mode = Mode::select(inputs);

    let report = match (inputs.desired_think_ms, inputs.fixed_users) {
        (Some(think_ms), None) => {
            let z = think_ms / 1000.;
            let users = (target_tps * (response_secs + z)) / k;
            trace!("N = {target_tps} * ({response_secs} + {z}) / {k} = {users}");

            CalculationReport {
                mode,
                outputs: CalculatorOutputs {
                    users: ceil_to_u32("users", users)?,
                    think_ms: ceil_to_u64("thinkMs", think_ms)?,
                },
                raw_think_secs: z,
                achievable_tps: None,
            }
        }
        (None, Some(users)) => {
            let n = users as f64;
            let raw_z = ((n * k) / target_tps) - response_secs;
            trace!("Z = {n} * {k} / {target_tps} - {response_secs} = {raw_z}");

            // Concurrency alone already exceeds the target; no delay can help.
            let z = if raw_z < 0. { 0. } else { raw_z };

            CalculationReport {
                mode,
                outputs: CalculatorOutputs {
                    users: to_u32("fixedUsers", users)?,
                    think_ms: ceil_to_u64("thinkMs", z * 1000.)?,
                },
                raw_think_secs: raw_z,
                achievable_tps: None,
            }
        }
        (Some(think_ms), Some(users)) => {
            let z = think_ms / 1000.;
            let n = users as f64;
            let achievable_tps = (n * k) / (response_secs + z);
            info!(
                "Achievable TPS = {achievable_tps:.2} for N={users}, Z={think_ms}ms, R={}ms (target {target_tps})",
                inputs.expected_response_ms
            );

            CalculationReport {
                mode,
                outputs: CalculatorOutputs {
                    users: to_u32("fixedUsers", users)?,
                    think_ms: ceil_to_u64("thinkMs", think_ms)?,
                },
                raw_think_secs: z,
                achievable_tps: Some(achievable_tps),
            }
        }
        (None, None) => {
            let users = (target_tps * response_secs) / k;
            trace!("N = {target_tps} * {response_secs} / {k} = {users}");

            CalculationReport {
                mode,
                outputs: CalculatorOutputs {
                    users: ceil_to_u32("users", users)?,
                    think_ms: 0,
                },
                raw_think_secs: 0.,
                achievable_tps: None,
            }
        }
    };

    Ok(report)
}

/// Computes and publishes into an injected [`PublicationSink`].
///
/// # Example
///
/// ```
/// use pacer::prelude::*;
///
/// let sink = MemorySink::new();
/// let calculator = ThroughputCalculator::new(sink.clone());
///
/// let inputs = CalculatorInputs::new(10., 200.).desired_think_ms(1000.);
/// calculator.compute_and_publish(&inputs);
///
/// assert_eq!(sink.get(OUT_USERS_KEY).as_deref(), Some("12"));
/// assert_eq!(sink.get(OUT_THINK_KEY).as_deref(), Some("1000"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThroughputCalculator<S> {
    sink: S,
}

impl<S: PublicationSink> ThroughputCalculator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Compute and publish both outputs.
    ///
    /// Never fails: an invalid target, an out-of-range result or a sink error is logged and the
    /// sink keeps whatever it held before. Returns the published outputs, if any.
    #[instrument(name = "pacer", skip_all, fields(mode = %Mode::select(inputs)))]
    pub fn compute_and_publish(&self, inputs: &CalculatorInputs) -> Option<CalculatorOutputs> {
        match self.try_compute_and_publish(inputs) {
            Ok(report) => {
                info!(
                    "Published {} (think time {})",
                    report.outputs,
                    humantime::format_duration(Duration::from_millis(report.outputs.think_ms))
                );

                #[cfg(feature = "metrics")]
                record_report(&report);

                Some(report.outputs)
            }
            Err(skip) => {
                match &skip {
                    Skip::InvalidTarget(tps) => {
                        warn!("Target TPS <= 0 ({tps}); skipping calculation")
                    }
                    err => error!("Calculation skipped: {err}"),
                }

                #[cfg(feature = "metrics")]
                metrics::counter!("pacer_skipped", "reason" => skip.reason()).increment(1);

                None
            }
        }
    }

    fn try_compute_and_publish(&self, inputs: &CalculatorInputs) -> Result<CalculationReport, Skip> {
        debug!("Computing with {inputs:?}");
        let report = compute(inputs)?;
        self.sink.publish(&report.outputs.entries())?;
        Ok(report)
    }
}

#[cfg(feature = "metrics")]
fn record_report(report: &CalculationReport) {
    metrics::gauge!("pacer_calculated_users").set(report.outputs.users as f64);
    metrics::gauge!("pacer_calculated_think_ms").set(report.outputs.think_ms as f64);
    if let Some(tps) = report.achievable_tps {
        metrics::gauge!("pacer_achievable_tps").set(tps);
    }
}

fn ceil_to_u32(field: &'static str, value: f64) -> Result<u32, ComputationError> {
    let ceiled = value.ceil();
    if ceiled.is_finite() && (0. ..=u32::MAX as f64).contains(&ceiled) {
        Ok(ceiled as u32)
    } else {
        Err(ComputationError::OutOfRange { field, value })
    }
}

fn ceil_to_u64(field: &'static str, value: f64) -> Result<u64, ComputationError> {
    let ceiled = value.ceil();
    // u64::MAX is not representable as f64; anything at or above 2^64 would saturate.
    if ceiled.is_finite() && ceiled >= 0. && ceiled < u64::MAX as f64 {
        Ok(ceiled as u64)
    } else {
        Err(ComputationError::OutOfRange { field, value })
    }
}

fn to_u32(field: &'static str, value: i64) -> Result<u32, ComputationError> {
    u32::try_from(value).map_err(|_| ComputationError::OutOfRange {
        field,
        value: value as f64,
    })
}
