//! Configuration for imagegate.
//!
//! The user-facing `imagegate.toml` model and the explicit resolution
//! chain: defaults, then file values, then CLI overrides. Policy is always
//! passed as an argument to the decision functions, never read from the
//! environment.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::GateConfigV1;
pub use resolve::{
    channel_for_branch, parse_config_toml, resolve_config, Overrides, ResolvedConfig,
    DEFAULT_PROTECTED_BRANCH, DEFAULT_READ_TIMEOUT_MS,
};
