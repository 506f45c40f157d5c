use crate::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration surface of the calculator.
///
/// All five fields are free text, stored exactly as typed by the user. They are only turned into
/// numbers by [`CalculatorConfig::inputs`], which never fails (see [`crate::parse_f64_or`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    #[cfg_attr(feature = "serde", serde(rename = "targetTPS"))]
    pub target_tps: String,
    #[cfg_attr(feature = "serde", serde(rename = "expectedResponseMs"))]
    pub expected_response_ms: String,
    #[cfg_attr(feature = "serde", serde(rename = "desiredThinkMs"))]
    pub desired_think_ms: String,
    #[cfg_attr(feature = "serde", serde(rename = "fixedUsers"))]
    pub fixed_users: String,
    #[cfg_attr(feature = "serde", serde(rename = "transactionsPerIteration"))]
    pub transactions_per_iteration: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            target_tps: DEFAULT_TARGET_TPS.to_string(),
            expected_response_ms: DEFAULT_EXPECTED_RESPONSE_MS.to_string(),
            desired_think_ms: DEFAULT_DESIRED_THINK_MS.to_string(),
            fixed_users: DEFAULT_FIXED_USERS.to_string(),
            transactions_per_iteration: DEFAULT_TRANSACTIONS_PER_ITERATION.to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from a host property bag. Missing keys take their configured
    /// default; present keys are kept verbatim, even when empty.
    pub fn from_properties(props: &HashMap<String, String>) -> Self {
        let get = |key: &str, default: &str| {
            props
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            target_tps: get(TARGET_TPS_KEY, DEFAULT_TARGET_TPS),
            expected_response_ms: get(EXPECTED_RESPONSE_MS_KEY, DEFAULT_EXPECTED_RESPONSE_MS),
            desired_think_ms: get(DESIRED_THINK_MS_KEY, DEFAULT_DESIRED_THINK_MS),
            fixed_users: get(FIXED_USERS_KEY, DEFAULT_FIXED_USERS),
            transactions_per_iteration: get(
                TRANSACTIONS_PER_ITERATION_KEY,
                DEFAULT_TRANSACTIONS_PER_ITERATION,
            ),
        }
    }

    pub fn to_properties(&self) -> HashMap<String, String> {
        [
            (TARGET_TPS_KEY, &self.target_tps),
            (EXPECTED_RESPONSE_MS_KEY, &self.expected_response_ms),
            (DESIRED_THINK_MS_KEY, &self.desired_think_ms),
            (FIXED_USERS_KEY, &self.fixed_users),
            (TRANSACTIONS_PER_ITERATION_KEY, &self.transactions_per_iteration),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
    }

    /// Reset every field to its configured default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse the text fields into numeric inputs.
    pub fn inputs(&self) -> CalculatorInputs {
        CalculatorInputs {
            target_tps: parse_f64_or(&self.target_tps, FALLBACK_TARGET_TPS),
            expected_response_ms: parse_f64_or(
                &self.expected_response_ms,
                FALLBACK_EXPECTED_RESPONSE_MS,
            ),
            transactions_per_iteration: parse_i64_or(
                &self.transactions_per_iteration,
                FALLBACK_TRANSACTIONS_PER_ITERATION,
            ),
            desired_think_ms: parse_optional_f64(&self.desired_think_ms, FALLBACK_DESIRED_THINK_MS),
            fixed_users: parse_optional_i64(&self.fixed_users, FALLBACK_FIXED_USERS),
        }
    }

    pub fn target_tps(mut self, tps: impl Into<String>) -> Self {
        self.target_tps = tps.into();
        self
    }

    pub fn expected_response_ms(mut self, ms: impl Into<String>) -> Self {
        self.expected_response_ms = ms.into();
        self
    }

    pub fn desired_think_ms(mut self, ms: impl Into<String>) -> Self {
        self.desired_think_ms = ms.into();
        self
    }

    pub fn fixed_users(mut self, users: impl Into<String>) -> Self {
        self.fixed_users = users.into();
        self
    }

    pub fn transactions_per_iteration(mut self, k: impl Into<String>) -> Self {
        self.transactions_per_iteration = k.into();
        self
    }
}
