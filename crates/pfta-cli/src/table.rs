//! Tabular output: the shared `Table` shape, TSV serialisation, and the
//! `<path>.out/` directory lifecycle.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pfta_compiler::analyze::AnalysisResult;
use pfta_core::gate::GateType;
use pfta_core::numeric::format_number;

const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Fixed-point decimal places for probability/intensity columns.
const QUANTITY_DECIMAL_PLACES: usize = 6;
/// Significant figures used once a value falls into scientific notation.
const QUANTITY_SIGNIFICANT_FIGURES: usize = 6;
/// `|value|` outside `[10^-threshold, 10^threshold)` renders in scientific notation.
const QUANTITY_SCIENTIFIC_THRESHOLD: i32 = 4;

fn format_quantity(value: f64) -> String {
    format_number(value, QUANTITY_DECIMAL_PLACES, QUANTITY_SIGNIFICANT_FIGURES, QUANTITY_SCIENTIFIC_THRESHOLD)
}

/// Tabular output: headings followed by rows of equal width.
pub struct Table {
    pub headings: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn write_tsv(&self, path: &Path) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(self.headings.join("\t").as_bytes())?;
        file.write_all(LINE_SEPARATOR.as_bytes())?;
        for row in &self.rows {
            file.write_all(row.join("\t").as_bytes())?;
            file.write_all(LINE_SEPARATOR.as_bytes())?;
        }
        Ok(())
    }
}

/// Create `<path>.out/` fresh, removing any existing file or directory at
/// that path first.
pub fn prepare_output_dir(input_path: &Path) -> io::Result<PathBuf> {
    let mut name = input_path.as_os_str().to_os_string();
    name.push(".out");
    let output_dir = PathBuf::from(name);

    if output_dir.is_dir() {
        fs::remove_dir_all(&output_dir)?;
    } else if output_dir.exists() {
        fs::remove_file(&output_dir)?;
    }
    fs::create_dir_all(&output_dir)?;

    Ok(output_dir)
}

fn render_gate_type(gate_type: GateType) -> String {
    match gate_type {
        GateType::And => "AND".to_string(),
        GateType::Or => "OR".to_string(),
        GateType::Null => "NULL".to_string(),
        GateType::Vote(k) => format!("VOTE({k})"),
    }
}

fn point_labels(times: &[f64], sample_size: usize) -> Vec<String> {
    let mut labels = Vec::with_capacity(times.len() * sample_size);
    for time in times {
        for sample in 0..sample_size {
            labels.push(format!("t={time},s={sample}"));
        }
    }
    labels
}

fn quantity_headings(label: &str, points: &[String]) -> Vec<String> {
    points.iter().map(|point| format!("{label}[{point}]")).collect()
}

/// Build the `events.tsv`, `gates.tsv`, and per-top-gate cut-set tables for
/// a finished analysis, paired with their intended file names.
pub fn build_tables(result: &AnalysisResult) -> Vec<(String, Table)> {
    let points = point_labels(&result.times, result.sample_size);

    let mut events_headings = vec!["index".to_string(), "id".to_string(), "is_used".to_string(), "label".to_string()];
    events_headings.extend(quantity_headings("probability", &points));
    events_headings.extend(quantity_headings("intensity", &points));
    let events_rows = result
        .events
        .iter()
        .map(|event| {
            let mut row = vec![
                event.index.to_string(),
                event.id.clone(),
                event.is_used.to_string(),
                event.label.clone().unwrap_or_default(),
            ];
            row.extend(event.probability.iter().map(|&v| format_quantity(v)));
            row.extend(event.intensity.iter().map(|&v| format_quantity(v)));
            row
        })
        .collect();
    let events_table = Table { headings: events_headings, rows: events_rows };

    let mut gates_headings = vec![
        "id".to_string(),
        "is_top_gate".to_string(),
        "is_paged".to_string(),
        "type".to_string(),
        "inputs".to_string(),
        "label".to_string(),
    ];
    gates_headings.extend(quantity_headings("probability", &points));
    gates_headings.extend(quantity_headings("intensity", &points));
    let gates_rows = result
        .gates
        .iter()
        .map(|gate| {
            let mut row = vec![
                gate.id.clone(),
                gate.is_top_gate.to_string(),
                gate.is_paged.to_string(),
                render_gate_type(gate.gate_type),
                gate.inputs.join(","),
                gate.label.clone().unwrap_or_default(),
            ];
            row.extend(gate.probability.iter().map(|&v| format_quantity(v)));
            row.extend(gate.intensity.iter().map(|&v| format_quantity(v)));
            row
        })
        .collect();
    let gates_table = Table { headings: gates_headings, rows: gates_rows };

    let mut tables = vec![("events.tsv".to_string(), events_table), ("gates.tsv".to_string(), gates_table)];

    for (gate_id, rows) in &result.cut_sets {
        let mut headings = vec!["cut_set".to_string(), "order".to_string()];
        headings.extend(quantity_headings("probability", &points));
        headings.extend(quantity_headings("intensity", &points));
        let cut_set_rows = rows
            .iter()
            .map(|row| {
                let mut r = vec![row.cut_set.clone(), row.order.to_string()];
                r.extend(row.probability.iter().map(|&v| format_quantity(v)));
                r.extend(row.intensity.iter().map(|&v| format_quantity(v)));
                r
            })
            .collect();
        tables.push((format!("{gate_id}.cut_sets.tsv"), Table { headings, rows: cut_set_rows }));
    }

    tables
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
