use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use vertenum::api::Enumeration;

/// What produced an output file: input source, run parameters, and run counts.
pub struct Payload {
    pub params: Value,
    pub source: String,
    pub counts: Value,
}

impl Payload {
    pub fn new(source: impl Into<String>, params: Value) -> Self {
        Self {
            params,
            source: source.into(),
            counts: Value::Null,
        }
    }

    /// Attach the combination and vertex counts of `run`.
    pub fn with_counts(mut self, run: &Enumeration) -> Self {
        self.counts = json!({
            "dimension": run.dim,
            "combinations": run.combination_count(),
            "degenerate": run.degenerate_count(),
            "infeasible": run.infeasible_count(),
            "feasible": run.feasible_count(),
            "vertices": run.vertices.len(),
            "rounding_boundary": run.rounding_boundary_count(),
        });
        self
    }
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": vertenum::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "source": payload.source,
        "params": payload.params,
        "counts": payload.counts,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the running build: `GIT_COMMIT` (build or run time), else `git`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()));
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/vertices.csv");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/vertices.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_source_and_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("plot.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("reference", json!({"decimals": 4}));
        let prov_path = write_sidecar(&artifact, &payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["source"], "reference");
        assert_eq!(parsed["params"]["decimals"], 4);
        assert!(parsed["counts"].is_null());
    }

    #[test]
    fn counts_describe_the_run() {
        let region = vertenum::api::reference_region();
        let run = vertenum::api::enumerate_vertices(
            &region,
            &vertenum::api::reference_objective(),
            &vertenum::api::EnumCfg::default(),
        )
        .unwrap();
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("vertices.csv");
        let payload = Payload::new("reference", json!({})).with_counts(&run);
        let parsed: Value =
            serde_json::from_slice(&fs::read(write_sidecar(&artifact, &payload).unwrap()).unwrap())
                .unwrap();
        assert_eq!(parsed["counts"]["combinations"], 20);
        assert_eq!(parsed["counts"]["degenerate"], 4);
        assert_eq!(parsed["counts"]["infeasible"], 8);
        assert_eq!(parsed["counts"]["vertices"], 8);
        assert_eq!(parsed["counts"]["rounding_boundary"], 0);
    }
}
