//! The single default action: compile a fault tree file and write its
//! analysis tables to `<path>.out/`.

use std::fs;

use pfta_compiler::compile;

use crate::cli::Cli;
use crate::table;

pub fn run(cli: &Cli) -> Result<(), String> {
    let text = fs::read_to_string(&cli.path)
        .map_err(|error| format!("failed to read `{}`: {error}", cli.path.display()))?;

    let result = compile(&text).map_err(|error| format_error(&error))?;

    let output_dir = table::prepare_output_dir(&cli.path)
        .map_err(|error| format!("failed to prepare `{}.out`: {error}", cli.path.display()))?;

    for (file_name, tsv_table) in table::build_tables(&result) {
        tsv_table
            .write_tsv(&output_dir.join(&file_name))
            .map_err(|error| format!("failed to write `{file_name}`: {error}"))?;
    }

    tracing::debug!(
        events = result.events.len(),
        gates = result.gates.len(),
        cut_set_tables = result.cut_sets.len(),
        "analysis written to {}",
        output_dir.display(),
    );

    Ok(())
}

fn format_error(error: &pfta_compiler::FaultTreeTextError) -> String {
    match error.explainer() {
        Some(explainer) => format!("{error}\n{explainer}"),
        None => error.to_string(),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
