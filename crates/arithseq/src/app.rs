//! Application entry point and dispatch.

use std::path::Path;

use anyhow::{Context, Result};

use arithseq_cli::output::{default_export_file_name, format_presets, write_export};
use arithseq_cli::{ui, CLIResultPresenter, JsonResultPresenter, ResultPresenter};
use arithseq_core::{Sequence, SequenceEngine, PRESETS};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        arithseq_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.list_presets {
        for line in format_presets(&PRESETS) {
            println!("{line}");
        }
        return Ok(());
    }

    let params = config.parameters()?;
    let engine = SequenceEngine::new(config.engine_options());
    tracing::debug!(?params, max_terms = engine.max_terms(), "resolved parameters");

    let sequence = engine.generate(params)?;
    let summary = engine.summarize(&sequence)?;

    presenter(config)
        .present_result(&sequence, &summary)
        .context("failed to write results")?;

    if let Some(ref path) = config.output {
        export(config, path, &sequence)?;
    }
    if config.export {
        let path = default_export_file_name(sequence.parameters());
        export(config, Path::new(&path), &sequence)?;
    }

    Ok(())
}

/// Present an error the same way results would have been presented.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    presenter(config).present_error(&format!("{err:#}"));
}

fn presenter(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.quiet))
    }
}

fn export(config: &AppConfig, path: &Path, sequence: &Sequence) -> Result<()> {
    write_export(path, sequence.terms())
        .with_context(|| format!("failed to write {}", path.display()))?;
    if !config.quiet && !config.json {
        ui::print_success(&format!(
            "Exported {} terms to {}",
            sequence.len(),
            path.display()
        ));
    }
    Ok(())
}
