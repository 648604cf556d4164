use std::path::PathBuf;

use roundtrip_runner::Report;

#[derive(Debug, Default, cucumber::World)]
pub struct World {
    pub root: Option<tempfile::TempDir>,
    pub report: Option<Report>,
    pub document: Option<serde_json::Value>,
    pub canonical: Option<String>,
}

impl World {
    /// Temporary fixture root, created on first use.
    pub fn fixture_root(&mut self) -> PathBuf {
        self.root
            .get_or_insert_with(|| tempfile::tempdir().expect("create fixture root"))
            .path()
            .to_path_buf()
    }

    pub fn report(&self) -> &Report {
        self.report.as_ref().expect("round-trip has run")
    }

    /// Workspace root: crate_dir/../..
    pub fn repo_root() -> PathBuf {
        let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        crate_dir.parent().and_then(|p| p.parent()).unwrap().to_path_buf()
    }
}
