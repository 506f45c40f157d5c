/// Key under which the calculated number of virtual users is published.
pub const OUT_USERS_KEY: &str = "calculated.users";

/// Key under which the calculated think time (milliseconds) is published.
pub const OUT_THINK_KEY: &str = "calculated.think";

pub const TARGET_TPS_KEY: &str = "TPSCalculator.targetTPS";
pub const EXPECTED_RESPONSE_MS_KEY: &str = "TPSCalculator.expectedResponseMs";
pub const DESIRED_THINK_MS_KEY: &str = "TPSCalculator.desiredThinkMs";
pub const FIXED_USERS_KEY: &str = "TPSCalculator.fixedUsers";
pub const TRANSACTIONS_PER_ITERATION_KEY: &str = "TPSCalculator.transactionsPerIteration";

pub const DEFAULT_TARGET_TPS: &str = "10";
pub const DEFAULT_EXPECTED_RESPONSE_MS: &str = "200";
pub const DEFAULT_DESIRED_THINK_MS: &str = "";
pub const DEFAULT_FIXED_USERS: &str = "";
pub const DEFAULT_TRANSACTIONS_PER_ITERATION: &str = "1";

// Values substituted when a field is present but empty or malformed. These differ from the
// configured defaults above: a garbled target throughput falls back to zero and skips the run.
pub const FALLBACK_TARGET_TPS: f64 = 0.0;
pub const FALLBACK_EXPECTED_RESPONSE_MS: f64 = 0.0;
pub const FALLBACK_TRANSACTIONS_PER_ITERATION: f64 = 1.0;
pub const FALLBACK_DESIRED_THINK_MS: f64 = 0.0;
pub const FALLBACK_FIXED_USERS: f64 = 0.0;
