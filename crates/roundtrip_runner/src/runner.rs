use std::fs;
use std::path::{Path, PathBuf};

use netjson_contract::canonical_bytes;
use tracing::{debug, error, info, info_span, warn};

use crate::config::RunnerConfig;
use crate::error::{FixtureError, SetupError, Side};
use crate::family::Family;
use crate::report::{FamilyReport, FixtureOutcome, Report};

pub struct Runner {
    config: RunnerConfig,
    families: Vec<Family>,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config, families: Vec::new() }
    }

    pub fn with_families(mut self, families: impl IntoIterator<Item = Family>) -> Self {
        self.families.extend(families);
        self
    }

    pub fn add_family(&mut self, family: Family) {
        self.families.push(family);
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs every family. A setup error ends only its own family.
    pub fn run(&self) -> Report {
        let families = self.families.iter().map(|f| self.run_family(f)).collect();
        Report { families }
    }

    pub fn run_family(&self, family: &Family) -> FamilyReport {
        let span = info_span!("family", name = %family.name);
        let _guard = span.enter();

        let pattern = self.config.resolve(&family.pattern);
        let paths = match resolve_fixtures(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                error!(error = %e, "fixture setup failed");
                return FamilyReport { family: family.name.clone(), outcome: Err(e) };
            }
        };
        debug!(pattern = %pattern, fixtures = paths.len(), "resolved fixtures");

        let outcomes = paths
            .into_iter()
            .map(|entry| {
                let (path, result) = match entry {
                    Ok(path) => {
                        let result = round_trip(family, &path);
                        (path, result)
                    }
                    // Matched, but its directory could not be read.
                    Err(e) => {
                        let path = e.path().to_path_buf();
                        let source = e.into_error();
                        (path.clone(), Err(FixtureError::Read { path, source }))
                    }
                };
                let outcome = FixtureOutcome::new(&family.name, path, result);
                match &outcome.result {
                    Ok(()) => info!(fixture = %outcome.fixture, "round-trip ok"),
                    Err(e) => warn!(fixture = %outcome.fixture, stage = %e.stage(), error = %e, "round-trip failed"),
                }
                outcome
            })
            .collect();

        FamilyReport { family: family.name.clone(), outcome: Ok(outcomes) }
    }
}

/// Expands `pattern`. An invalid pattern or an empty match set is a setup error.
pub fn resolve_fixtures(pattern: &str) -> Result<Vec<Result<PathBuf, glob::GlobError>>, SetupError> {
    let entries = glob::glob(pattern)
        .map_err(|source| SetupError::InvalidPattern { pattern: pattern.to_string(), source })?;
    let paths: Vec<_> = entries.collect();
    if paths.is_empty() {
        return Err(SetupError::NoMatches { pattern: pattern.to_string() });
    }
    Ok(paths)
}

/// read -> canonicalize -> decode -> validate -> encode -> canonicalize -> compare
pub fn round_trip(family: &Family, path: &Path) -> Result<(), FixtureError> {
    let raw = fs::read(path).map_err(|source| FixtureError::Read { path: path.to_path_buf(), source })?;
    // expected side comes from the raw bytes, never from the decoded message
    let want = canonical_bytes(&raw).map_err(|source| FixtureError::Canonicalize { side: Side::Expected, source })?;

    let mut msg = family.instantiate();
    let message_type = msg.type_name();
    debug!(fixture = %path.display(), message_type, "decoding");
    msg.decode(&raw).map_err(|source| FixtureError::Decode { message_type, source })?;
    msg.validate().map_err(|source| FixtureError::Validate { message_type, source })?;
    let got_raw = msg.encode().map_err(|source| FixtureError::Encode { message_type, source })?;

    let got = canonical_bytes(&got_raw).map_err(|source| FixtureError::Canonicalize { side: Side::Actual, source })?;
    if want != got {
        return Err(FixtureError::Mismatch {
            expected: String::from_utf8_lossy(&want).into_owned(),
            actual: String::from_utf8_lossy(&got).into_owned(),
        });
    }
    Ok(())
}
