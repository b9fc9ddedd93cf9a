//! Persisted registration of generated modules.
//!
//! An output directory holds one `<module>.rs` and one `<module>.json`
//! configuration per generated questionnaire, a `registry.json` manifest
//! keyed by prefix and a `mod.rs` that declares every registered module.
//! Registering a prefix that already exists replaces the earlier record and
//! removes its files. The directory can be passed back to `score` as a
//! definitions directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use ts_rs::TS;

use crate::definitions::write_definition;
use crate::error::ExportError;
use crate::render::RenderedModule;

pub const MANIFEST_FILE: &str = "registry.json";
pub const MOD_FILE: &str = "mod.rs";

const MOD_TEMPLATE: &str = include_str!("../templates/mod.rs.tera");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationRecord {
    pub questionnaire_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub prefix: String,
    /// Rust module name, also the file stem of the generated source.
    pub module: String,
    pub score_columns: Vec<String>,
}

/// Prefix → record. Serialized as a JSON object in prefix order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    records: BTreeMap<String, RegistrationRecord>,
}

impl Manifest {
    /// Load the manifest in `dir`; a directory without one yields an empty
    /// manifest.
    pub fn load(dir: &Path) -> Result<Self, ExportError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(&path).map_err(ExportError::io(&path))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(ExportError::io(&path))?;
        Ok(path)
    }

    /// Insert `record` under its prefix and return the record it replaced.
    /// A record for another prefix that used the same module name is
    /// dropped as well, since its source file is about to be overwritten.
    pub fn register(&mut self, record: RegistrationRecord) -> Option<RegistrationRecord> {
        let stale: Vec<String> = self
            .records
            .iter()
            .filter(|(prefix, r)| r.module == record.module && **prefix != record.prefix)
            .map(|(prefix, _)| prefix.clone())
            .collect();
        for prefix in stale {
            tracing::warn!(prefix = %prefix, module = %record.module, "module name reused, dropping old registration");
            self.records.remove(&prefix);
        }

        let replaced = self.records.insert(record.prefix.clone(), record);
        if let Some(previous) = &replaced {
            tracing::warn!(
                prefix = %previous.prefix,
                replaced = %previous.questionnaire_name,
                "prefix already registered, replacing"
            );
        }
        replaced
    }

    pub fn get(&self, prefix: &str) -> Option<&RegistrationRecord> {
        self.records.get(prefix)
    }

    pub fn records(&self) -> impl Iterator<Item = &RegistrationRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Render the `mod.rs` that declares every module in the manifest.
pub fn render_mod_rs(manifest: &Manifest) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(MOD_FILE, MOD_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let records: Vec<&RegistrationRecord> = manifest.records().collect();
    let mut context = Context::new();
    context.insert("records", &records);
    Ok(tera.render(MOD_FILE, &context)?)
}

/// Paths touched by [`write_module`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenModule {
    pub module_path: PathBuf,
    pub config_path: PathBuf,
    pub manifest_path: PathBuf,
    pub mod_path: PathBuf,
    pub replaced: Option<RegistrationRecord>,
}

/// Write the module source and its configuration, then update the manifest
/// and `mod.rs`.
pub fn write_module(dir: &Path, rendered: &RenderedModule) -> Result<WrittenModule, ExportError> {
    fs::create_dir_all(dir).map_err(ExportError::io(dir))?;

    let module_path = dir.join(format!("{}.rs", rendered.module));
    fs::write(&module_path, &rendered.source).map_err(ExportError::io(&module_path))?;
    let config_path = dir.join(format!("{}.json", rendered.module));
    write_definition(&rendered.definition, &config_path)?;

    let mut manifest = Manifest::load(dir)?;
    let replaced = manifest.register(rendered.record.clone());
    let manifest_path = manifest.save(dir)?;

    if let Some(previous) = &replaced
        && previous.module != rendered.module
    {
        remove_module_files(dir, &previous.module)?;
    }

    let mod_path = dir.join(MOD_FILE);
    fs::write(&mod_path, render_mod_rs(&manifest)?).map_err(ExportError::io(&mod_path))?;

    tracing::info!(
        questionnaire = %rendered.record.questionnaire_name,
        prefix = %rendered.record.prefix,
        path = %module_path.display(),
        registered = manifest.len(),
        "registered questionnaire module"
    );

    Ok(WrittenModule {
        module_path,
        config_path,
        manifest_path,
        mod_path,
        replaced,
    })
}

fn remove_module_files(dir: &Path, module: &str) -> Result<(), ExportError> {
    for path in [dir.join(format!("{module}.rs")), dir.join(format!("{module}.json"))] {
        if path.exists() {
            fs::remove_file(&path).map_err(ExportError::io(&path))?;
            tracing::debug!(path = %path.display(), "removed replaced module file");
        }
    }
    Ok(())
}
