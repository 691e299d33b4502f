//! Audit sidecar for a gameboard artifact.
//!
//! `<artifact stem>.provenance.json` keeps the verbatim config text, the
//! edge ranking that picked the midpoint and flag edges, each edge's
//! deviation from its configured dimension, and the bearing every flag was
//! pushed along. Which short edge gets `Flag_1` depends on the ranking alone,
//! so near-ties are worth having on record next to the coordinates.

use anyhow::{Context, Result};
use gameboard::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Inputs of one `gameboard build` run.
pub struct BuildInputs<'a> {
    pub config_path: &'a Path,
    pub config_text: &'a str,
    pub config: &'a BuildConfig,
    pub format: &'a str,
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Length => "length",
        Side::Width => "width",
    }
}

/// JSON body of the sidecar.
pub fn audit_document(inputs: &BuildInputs<'_>, board: &Gameboard, artifact: &Path) -> Value {
    let cfg = inputs.config;
    let edges: Vec<Value> = board
        .ranked_edges
        .iter()
        .enumerate()
        .map(|(rank, e)| {
            json!({
                "rank": rank,
                "index": e.index,
                "side": side_name(e.side),
                "length_m": e.length_m,
                "deviation_m": e.length_m - e.side.meters(cfg.length, cfg.width),
            })
        })
        .collect();
    let midpoints: Vec<Value> = [Location::Mid1, Location::Mid2]
        .iter()
        .zip(board.longest_edges())
        .map(|(label, e)| json!({ "label": label.as_str(), "edge": e.index }))
        .collect();
    let flags: Vec<Value> = [Location::Flag1, Location::Flag2]
        .iter()
        .zip(board.shortest_edges())
        .zip(&board.flags)
        .map(|((label, e), flag)| {
            json!({
                "label": label.as_str(),
                "edge": e.index,
                "bearing": flag.bearing,
                "offset_m": cfg.flag_offset,
            })
        })
        .collect();

    json!({
        "version": gameboard::VERSION,
        "code_rev": current_git_rev(),
        "config": {
            "path": inputs.config_path.to_string_lossy(),
            "source": inputs.config_text,
            "parsed": cfg,
        },
        "format": inputs.format,
        "edges": edges,
        "midpoints": midpoints,
        "flags": flags,
        "outputs": [artifact.to_string_lossy()]
    })
}

/// Write the sidecar next to `artifact` and return its path.
pub fn write_sidecar(
    artifact: &Path,
    inputs: &BuildInputs<'_>,
    board: &Gameboard,
) -> Result<PathBuf> {
    let path = provenance_path(artifact);
    let doc = audit_document(inputs, board, artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "gameboard".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit from the build env, the runtime env, or `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|output| output.status.success())
                .and_then(|output| String::from_utf8(output.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CONFIG: &str = "
start:
  lat: 40.0
  long: -75.0
  brg: 0
gameboard:
  build_dir: ccw
  length: 100
  width: 50
  flag_offset: 5
";

    #[test]
    fn sidecar_path_sits_next_to_artifact() {
        assert_eq!(
            provenance_path(Path::new("/tmp/boards/output.yml")),
            Path::new("/tmp/boards/output.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_ranking_and_flag_bearings() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("output.yml");
        let cfg = BuildConfig::from_yaml_str(CONFIG).unwrap();
        let board = build_gameboard(&cfg, &Wgs84).unwrap();
        let inputs = BuildInputs {
            config_path: Path::new("config.yml"),
            config_text: CONFIG,
            config: &cfg,
            format: "yaml",
        };
        let path = write_sidecar(&artifact, &inputs, &board).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();

        assert_eq!(parsed["config"]["source"], CONFIG);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        let edges = parsed["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 4);
        for (entry, e) in edges.iter().zip(&board.ranked_edges) {
            assert_eq!(entry["index"], e.index);
            assert!(entry["deviation_m"].as_f64().unwrap().abs() < 0.01);
        }
        assert_eq!(parsed["midpoints"][0]["edge"], board.ranked_edges[0].index);
        // Counter-clockwise: the second flag is the flipped one.
        assert_eq!(parsed["flags"][0]["bearing"], 0.0);
        assert_eq!(parsed["flags"][1]["bearing"], 180.0);
        assert_eq!(parsed["flags"][1]["edge"], board.ranked_edges[3].index);
    }
}
