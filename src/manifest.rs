//! Icon manifest fragment for browser extensions
//!
//! Extension manifests list their icons as an object keyed by edge length:
//! `"icons": { "16": "icons/icon-16.png", ... }`. This module builds that
//! fragment from a generation report so it can be pasted into (or merged
//! with) `manifest.json`.

use crate::icon_gen::GenerationReport;
use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

pub const MANIFEST_FILE_NAME: &str = "icons.json";

/// Root of the `icons.json` file
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IconManifest {
    /// Icon paths keyed by size; serialized with string keys in ascending
    /// numeric order
    pub icons: BTreeMap<u32, String>,
}

impl IconManifest {
    /// Build a manifest from the files of a successful run.
    ///
    /// `prefix` is prepended verbatim to every file name, e.g. `icons/` when
    /// the icons live in a subdirectory of the extension.
    pub fn from_report(report: &GenerationReport, prefix: &str) -> Self {
        let icons = report
            .icons
            .iter()
            .map(|icon| (icon.size, format!("{prefix}{}", icon.file_name)))
            .collect();

        IconManifest { icons }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize icon manifest")
    }
}

/// Write `icons.json` into `out_dir`, returning its path.
pub fn write_manifest(out_dir: &Path, manifest: &IconManifest) -> Result<std::path::PathBuf> {
    let manifest_path = out_dir.join(MANIFEST_FILE_NAME);
    let json = manifest.to_json()?;

    std::fs::write(&manifest_path, json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    log::info!("Wrote icon manifest to {}", manifest_path.display());
    Ok(manifest_path)
}
