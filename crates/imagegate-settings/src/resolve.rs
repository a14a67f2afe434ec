use crate::model::GateConfigV1;
use anyhow::Context;
use std::time::Duration;

use imagegate_domain::policy::{GatePolicy, DEFAULT_HIGH_THRESHOLD};
use imagegate_types::ReleaseChannel;

pub const DEFAULT_PROTECTED_BRANCH: &str = "main";
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// CLI-level overrides; they win over file values.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub protected_branch: Option<String>,
    pub high_threshold: Option<u32>,
    pub read_timeout_ms: Option<u64>,
}

/// Fully resolved configuration, ready to hand to the domain.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub protected_branch: String,
    pub policy: GatePolicy,
    pub read_timeout: Duration,
}

pub fn parse_config_toml(text: &str) -> anyhow::Result<GateConfigV1> {
    toml::from_str(text).context("parse imagegate.toml")
}

pub fn resolve_config(cfg: GateConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let protected_branch = overrides
        .protected_branch
        .or(cfg.protected_branch)
        .unwrap_or_else(|| DEFAULT_PROTECTED_BRANCH.to_string());
    if protected_branch.is_empty() {
        anyhow::bail!("protected_branch must not be empty");
    }

    let high_threshold = overrides
        .high_threshold
        .or(cfg.high_threshold)
        .unwrap_or(DEFAULT_HIGH_THRESHOLD);

    let read_timeout_ms = overrides
        .read_timeout_ms
        .or(cfg.read_timeout_ms)
        .unwrap_or(DEFAULT_READ_TIMEOUT_MS);
    if read_timeout_ms == 0 {
        anyhow::bail!("read_timeout_ms must be greater than zero");
    }

    Ok(ResolvedConfig {
        protected_branch,
        policy: GatePolicy { high_threshold },
        read_timeout: Duration::from_millis(read_timeout_ms),
    })
}

/// Map the run's branch to a release channel. The domain only ever sees
/// the channel; branch-name strings stop here.
pub fn channel_for_branch(branch: &str, protected_branch: &str) -> ReleaseChannel {
    if branch == protected_branch {
        ReleaseChannel::Protected
    } else {
        ReleaseChannel::Integration
    }
}
