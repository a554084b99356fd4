use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{config::DemoConfig, solution::Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub value: i32,
    /// `None` when the config carries no expected value
    pub passed: Option<bool>,
}

/// Run the configured case and write `Result: <value>` to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<DemoReport> {
    info!(sequence = ?config.sequence, target = config.target, "running demo case");

    let value = Solution::find_pair_sum(&config.sequence, config.target);
    writeln!(out, "Result: {value}").context("Failed to write demo result")?;

    let passed = config.expected.map(|expected| {
        if expected != value {
            warn!(expected, actual = value, "demo result does not match expected value");
        }
        expected == value
    });

    Ok(DemoReport { value, passed })
}
