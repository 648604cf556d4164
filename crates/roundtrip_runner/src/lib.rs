//! Round-trip conformance runner.
//!
//! For every configuration family, every fixture matched by the family's
//! pattern is read, canonicalized, decoded into a fresh schema message,
//! validated, re-encoded and canonicalized again; the two canonical forms
//! must be byte-identical. Fixtures are checked independently and all
//! outcomes are collected into a [`Report`].

mod config;
mod error;
mod family;
mod report;
mod runner;

pub use config::{default_fixture_root, RunnerConfig, FIXTURE_ROOT_ENV};
pub use error::{FixtureError, RunFailed, SetupError, Side, Stage};
pub use family::{netjson_families, Factory, Family};
pub use report::{FamilyReport, Failure, FixtureOutcome, Report};
pub use runner::{resolve_fixtures, round_trip, Runner};

/// Runs the built-in OpenWrt, OpenVPN and WireGuard families.
pub fn run_netjson_samples(config: RunnerConfig) -> Report {
    Runner::new(config).with_families(netjson_families()).run()
}
