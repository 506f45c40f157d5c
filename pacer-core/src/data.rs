use crate::{OUT_THINK_KEY, OUT_USERS_KEY};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed calculator inputs. Rebuilt from [`crate::CalculatorConfig`] on every run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorInputs {
    pub target_tps: f64,
    pub expected_response_ms: f64,
    pub transactions_per_iteration: i64,
    pub desired_think_ms: Option<f64>,
    pub fixed_users: Option<i64>,
}

impl CalculatorInputs {
    pub fn new(target_tps: f64, expected_response_ms: f64) -> Self {
        Self {
            target_tps,
            expected_response_ms,
            transactions_per_iteration: 1,
            desired_think_ms: None,
            fixed_users: None,
        }
    }

    pub fn transactions_per_iteration(mut self, k: i64) -> Self {
        self.transactions_per_iteration = k;
        self
    }

    pub fn desired_think_ms(mut self, think_ms: f64) -> Self {
        self.desired_think_ms = Some(think_ms);
        self
    }

    pub fn fixed_users(mut self, users: i64) -> Self {
        self.fixed_users = Some(users);
        self
    }

    pub fn response_secs(&self) -> f64 {
        self.expected_response_ms / 1000.
    }
}

/// Which variable of Little's Law is solved for, based on the optional inputs present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Think time given: solve for the number of users.
    SolveUsers,
    /// Users given: solve for the think time.
    SolveThinkTime,
    /// Both given: nothing to solve, the inputs are echoed.
    Fixed,
    /// Neither given: zero think time, solve for users.
    ZeroThinkTime,
}

impl Mode {
    pub fn select(inputs: &CalculatorInputs) -> Self {
        match (inputs.desired_think_ms, inputs.fixed_users) {
            (Some(_), None) => Mode::SolveUsers,
            (None, Some(_)) => Mode::SolveThinkTime,
            (Some(_), Some(_)) => Mode::Fixed,
            (None, None) => Mode::ZeroThinkTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SolveUsers => "solve_users",
            Mode::SolveThinkTime => "solve_think_time",
            Mode::Fixed => "fixed",
            Mode::ZeroThinkTime => "zero_think_time",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two published values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorOutputs {
    pub users: u32,
    pub think_ms: u64,
}

impl CalculatorOutputs {
    /// Key/value pairs as they are written to a publication sink.
    pub fn entries(&self) -> [(&'static str, String); 2] {
        [
            (OUT_USERS_KEY, self.users.to_string()),
            (OUT_THINK_KEY, self.think_ms.to_string()),
        ]
    }
}

impl fmt::Display for CalculatorOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "users={}, think={}ms", self.users, self.think_ms)
    }
}
