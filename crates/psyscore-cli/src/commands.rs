use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};

use psyscore_export::{csv, definitions, registration, render};
use psyscore_instruments::definition::QuestionnaireDefinition;
use psyscore_instruments::dispatch::score_all;
use psyscore_instruments::validate::check;
use psyscore_instruments::{Instrument, Registry, Synthesizer, validate_definition};

/// Built-ins, then every configuration in `extra`. A configuration with a
/// built-in's prefix replaces it.
fn registry(extra: Option<&Path>) -> Result<Registry> {
    let mut registry = Registry::builtin()?;
    if let Some(dir) = extra {
        for definition in definitions::read_definition_dir(dir)? {
            let name = definition.questionnaire_name.clone();
            registry
                .register_definition(definition)
                .wrap_err_with(|| format!("cannot register '{name}' from {}", dir.display()))?;
        }
    }
    Ok(registry)
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("analysis_results_{stem}.csv"))
}

pub fn score(input: &Path, output: Option<PathBuf>, extra: Option<&Path>) -> Result<()> {
    let registry = registry(extra)?;
    let table = csv::read_table_path(input)?;
    let output = output.unwrap_or_else(|| default_output(input));

    println!("Input file: {}", input.display());
    println!("Respondents: {}", table.row_count());

    let run = score_all(&registry, &table);
    tracing::info!(
        detected = run.detected(),
        scored = run.scored.len(),
        failed = run.failures.len(),
        "scoring finished"
    );
    if run.detected() == 0 {
        println!("No recognized questionnaires detected.");
        return Ok(());
    }

    for scored in &run.scored {
        println!();
        println!("{} ({})", scored.id, scored.prefix);
        println!("{}", scored.summary);
    }
    for id in &run.empty {
        println!();
        println!("{id}: no score columns produced");
    }
    for failure in &run.failures {
        eprintln!("{} ({}) not scored: {}", failure.id, failure.prefix, failure.error);
    }

    if run.scored.is_empty() {
        bail!("none of the {} detected questionnaires could be scored", run.detected());
    }

    csv::write_table_path(&run.scores, &output)?;
    println!();
    println!("Results saved to {}", output.display());
    Ok(())
}

/// Print the full issue list. Returns false when the configuration has
/// errors.
pub fn validate(config: &Path) -> Result<bool> {
    let definition = definitions::read_definition(config)?;
    let report = check(&definition);

    if report.issues.is_empty() {
        println!("{}: valid", report.questionnaire);
        return Ok(true);
    }

    println!("{}:", report.questionnaire);
    println!("{report}");
    let errors = report.errors().count();
    let warnings = report.warnings().count();
    println!("{errors} error(s), {warnings} warning(s)");
    Ok(errors == 0)
}

pub fn generate(config: &Path, out_dir: &Path, header: Option<&Path>) -> Result<()> {
    let definition = definitions::read_definition(config)?;
    let validated = validate_definition(definition)?;

    let synthesizer = match header {
        Some(path) => {
            let table = csv::read_table_path(path)?;
            Synthesizer::with_table_schema(table.column_names())
        }
        None => Synthesizer::new(),
    };
    let procedure = synthesizer
        .synthesize(&validated)
        .wrap_err_with(|| format!("cannot build a scoring procedure from {}", config.display()))?;

    let rendered = render::render_module(&validated)?;
    let written = registration::write_module(out_dir, &rendered)?;

    println!("{} ({})", procedure.name(), procedure.prefix());
    println!("  items read:     {}", procedure.required_columns().len());
    println!("  score columns:  {}", procedure.output_columns().join(", "));
    println!("  module:         {}", written.module_path.display());
    println!("  config:         {}", written.config_path.display());
    println!("  manifest:       {}", written.manifest_path.display());
    if let Some(replaced) = written.replaced {
        println!(
            "  replaced '{}' previously registered under {}",
            replaced.questionnaire_name, replaced.prefix
        );
    }
    Ok(())
}

pub fn example(output: &Path) -> Result<()> {
    definitions::write_definition(&QuestionnaireDefinition::sample(), output)?;
    println!("Created {}", output.display());
    println!("Edit it with your questionnaire details, then run:");
    println!("  psyscore generate {}", output.display());
    Ok(())
}

pub fn list(extra: Option<&Path>) -> Result<()> {
    let registry = registry(extra)?;
    for instrument in registry.iter() {
        println!("{:<8} {:<10} {}", instrument.prefix(), instrument.id(), instrument.name());
        println!("         {}", instrument.score_columns().join(", "));
    }
    Ok(())
}
