//! Fault tree text parsing: line classification, paragraph grouping,
//! assembly typing, and typed value coercion.

pub mod assembly;
pub mod coerce;
pub mod lex;
pub mod paragraph;

use pfta_core::error::FaultTreeTextError;

pub use assembly::Assembly;

/// Run all three parsing passes, producing typed assemblies ready for the
/// builder.
pub fn parse(text: &str) -> Result<Vec<Assembly>, FaultTreeTextError> {
    tracing::debug!(bytes = text.len(), "parsing fault tree text");

    let lines = lex::lex(text)?;
    tracing::trace!(lines = lines.len(), "lexed");

    let paragraphs = paragraph::group(&lines)?;
    tracing::trace!(paragraphs = paragraphs.len(), "grouped into paragraphs");

    let assemblies = assembly::assemble(&paragraphs)?;
    tracing::debug!(assemblies = assemblies.len(), "assembled");

    Ok(assemblies)
}
