use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the directory fixture patterns are resolved against.
pub const FIXTURE_ROOT_ENV: &str = "NETJSON_FIXTURE_ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Relative family patterns are joined onto this directory.
    pub fixture_root: PathBuf,
}

impl RunnerConfig {
    pub fn new(fixture_root: impl Into<PathBuf>) -> Self {
        Self { fixture_root: fixture_root.into() }
    }

    /// `$NETJSON_FIXTURE_ROOT` if set, else the workspace `fixtures/` directory.
    pub fn from_env() -> Self {
        Self::with_root_override(std::env::var_os(FIXTURE_ROOT_ENV))
    }

    /// An unset or empty override falls back to [`default_fixture_root`].
    pub fn with_root_override(root: Option<OsString>) -> Self {
        match root {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::default(),
        }
    }

    /// Full glob for `pattern`. Absolute patterns are used as is; the root
    /// is escaped so glob metacharacters in directory names match literally.
    pub fn resolve(&self, pattern: &str) -> String {
        if Path::new(pattern).is_absolute() {
            return pattern.to_string();
        }
        let root = glob::Pattern::escape(&self.fixture_root.to_string_lossy());
        format!("{}/{}", root.trim_end_matches('/'), pattern)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(default_fixture_root())
    }
}

/// `fixtures/` at the workspace root (roundtrip_runner/../..).
pub fn default_fixture_root() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    match crate_dir.parent().and_then(Path::parent) {
        Some(root) => root.join("fixtures"),
        None => PathBuf::from("fixtures"),
    }
}
