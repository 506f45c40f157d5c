use crate::output::Format;
use anyhow::Context;
use clap::Parser;
use pacer::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Compute virtual users and think time from a throughput goal.
///
/// Field values are free text and parsed leniently: anything that is not a number falls back to
/// a default instead of failing.
#[derive(Parser, Debug)]
#[command(name = "pacer", version, long_about = None)]
pub struct Cli {
    /// JSON file holding a calculator configuration (`targetTPS`, `expectedResponseMs`, ...)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target throughput in transactions per second
    #[arg(short, long, env = "PACER_TARGET_TPS", allow_hyphen_values = true)]
    pub target_tps: Option<String>,

    /// Expected response time in milliseconds
    #[arg(short, long, env = "PACER_RESPONSE_MS", allow_hyphen_values = true)]
    pub response_ms: Option<String>,

    /// Desired think time in milliseconds; solves for users
    #[arg(short = 'z', long, env = "PACER_THINK_MS", allow_hyphen_values = true)]
    pub think_ms: Option<String>,

    /// Fixed number of users; solves for think time
    #[arg(short, long, env = "PACER_USERS", allow_hyphen_values = true)]
    pub users: Option<String>,

    /// Transactions per iteration
    #[arg(short = 'k', long, env = "PACER_TX_PER_ITER", allow_hyphen_values = true)]
    pub tx_per_iter: Option<String>,

    /// Name of the host the test runs on
    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Properties)]
    pub format: Format,

    /// Write the published values to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Flags and environment win over the config file, which wins over defaults.
    pub fn resolve_config(&self) -> anyhow::Result<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => CalculatorConfig::default(),
        };

        let overrides = [
            (&self.target_tps, &mut config.target_tps),
            (&self.response_ms, &mut config.expected_response_ms),
            (&self.think_ms, &mut config.desired_think_ms),
            (&self.users, &mut config.fixed_users),
            (&self.tx_per_iter, &mut config.transactions_per_iteration),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        debug!("Resolved configuration: {config:?}");
        Ok(config)
    }
}
