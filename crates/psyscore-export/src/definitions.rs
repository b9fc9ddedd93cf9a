//! Questionnaire configuration files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use psyscore_instruments::definition::QuestionnaireDefinition;

use crate::error::ExportError;
use crate::registration::MANIFEST_FILE;

pub fn read_definition(path: &Path) -> Result<QuestionnaireDefinition, ExportError> {
    let json = fs::read_to_string(path).map_err(ExportError::io(path))?;
    QuestionnaireDefinition::from_json(&json).map_err(|source| ExportError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Every `*.json` configuration in `dir`, in file name order. The
/// registration manifest of a generated-module directory is skipped.
pub fn read_definition_dir(dir: &Path) -> Result<Vec<QuestionnaireDefinition>, ExportError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(ExportError::io(dir))?
        .map(|entry| entry.map(|e| e.path()).map_err(ExportError::io(dir)))
        .collect::<Result<_, _>>()?;
    paths.retain(|p| {
        p.is_file()
            && p.extension().is_some_and(|ext| ext == "json")
            && p.file_name().is_none_or(|name| name != MANIFEST_FILE)
    });
    paths.sort();

    let definitions = paths
        .iter()
        .map(|p| read_definition(p))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(dir = %dir.display(), count = definitions.len(), "loaded definitions");
    Ok(definitions)
}

pub fn write_definition(definition: &QuestionnaireDefinition, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(definition)?;
    fs::write(path, json).map_err(ExportError::io(path))
}
