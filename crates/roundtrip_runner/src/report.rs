use std::fmt;
use std::path::PathBuf;

use crate::error::{FixtureError, RunFailed, SetupError};

/// Result of one fixture, named `<family>/<file name>`.
#[derive(Debug)]
pub struct FixtureOutcome {
    pub family: String,
    pub fixture: String,
    pub path: PathBuf,
    pub result: Result<(), FixtureError>,
}

impl FixtureOutcome {
    pub fn new(family: &str, path: PathBuf, result: Result<(), FixtureError>) -> Self {
        let fixture = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { family: family.to_string(), fixture, path, result }
    }

    pub fn name(&self) -> String {
        format!("{}/{}", self.family, self.fixture)
    }

    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub struct FamilyReport {
    pub family: String,
    pub outcome: Result<Vec<FixtureOutcome>, SetupError>,
}

impl FamilyReport {
    pub fn fixtures(&self) -> &[FixtureOutcome] {
        match &self.outcome {
            Ok(outcomes) => outcomes,
            Err(_) => &[],
        }
    }

    pub fn setup_error(&self) -> Option<&SetupError> {
        self.outcome.as_ref().err()
    }
}

/// Something that makes the run fail.
#[derive(Debug)]
pub enum Failure<'a> {
    Setup { family: &'a str, error: &'a SetupError },
    Fixture(&'a FixtureOutcome),
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Setup { family, error } => write!(f, "{}: setup: {}", family, error),
            Failure::Fixture(outcome) => match &outcome.result {
                Err(e) => write!(f, "{}: {}: {}", outcome.name(), e.stage(), e),
                Ok(()) => write!(f, "{}: ok", outcome.name()),
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub families: Vec<FamilyReport>,
}

impl Report {
    pub fn family(&self, name: &str) -> Option<&FamilyReport> {
        self.families.iter().find(|f| f.family == name)
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &FixtureOutcome> {
        self.families.iter().flat_map(|f| f.fixtures())
    }

    /// Looks up an outcome by `<family>/<file name>`.
    pub fn outcome(&self, name: &str) -> Option<&FixtureOutcome> {
        self.outcomes().find(|o| o.name() == name)
    }

    pub fn passed(&self) -> usize {
        self.outcomes().filter(|o| o.passed()).count()
    }

    pub fn failures(&self) -> Vec<Failure<'_>> {
        let mut out = Vec::new();
        for family in &self.families {
            match &family.outcome {
                Err(error) => out.push(Failure::Setup { family: &family.family, error }),
                Ok(outcomes) => out.extend(outcomes.iter().filter(|o| !o.passed()).map(Failure::Fixture)),
            }
        }
        out
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn into_result(self) -> Result<Self, RunFailed> {
        if self.is_success() {
            return Ok(self);
        }
        let failures = self.failures();
        let details = failures.iter().map(|f| format!("--- {}", f)).collect::<Vec<_>>().join("\n");
        Err(RunFailed { failed: failures.len(), families: self.families.len(), details })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for family in &self.families {
            match &family.outcome {
                Err(e) => writeln!(f, "FAIL {} (setup): {}", family.family, e)?,
                Ok(outcomes) => {
                    for o in outcomes {
                        match &o.result {
                            Ok(()) => writeln!(f, "ok   {}", o.name())?,
                            Err(e) => writeln!(f, "FAIL {} ({})", o.name(), e.stage())?,
                        }
                    }
                }
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failures().len())
    }
}
