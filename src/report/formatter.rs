use crate::run::{RunDetails, RunRow};
use std::collections::BTreeSet;

/// Formats generated run rows into human-readable text.
pub struct RowFormatter;

impl RowFormatter {
    /// One line per run: selection marker, index and specification.
    pub fn format_table(rows: &[RunRow], selected: &[usize]) -> String {
        if rows.is_empty() {
            return "0 runs will be created.".to_string();
        }
        let selected: BTreeSet<usize> = selected.iter().copied().collect();
        let width = (rows.len() - 1).to_string().len();

        let mut result = String::new();
        for row in rows {
            let marker = if selected.contains(&row.index) { "[x]" } else { "[ ]" };
            result.push_str(&format!(
                "{} {:>width$}  {}\n",
                marker,
                row.index,
                Self::format_spec(row),
                width = width
            ));
        }
        result
    }

    /// Multi-line view of a single run.
    pub fn format_details(row: &RunRow) -> String {
        match &row.details {
            RunDetails::Parameterless => {
                "This pipeline doesn't have any parameters defined.".to_string()
            }
            RunDetails::Parameters {
                pipeline_name,
                lines,
            } => {
                let mut result = pipeline_name.clone();
                for line in lines {
                    result.push_str("\n  ");
                    result.push_str(line);
                }
                result
            }
        }
    }

    /// The parameterless label is shown in italics-like underscores.
    fn format_spec(row: &RunRow) -> String {
        if row.is_parameterless() {
            format!("_{}_", row.spec)
        } else {
            row.spec.clone()
        }
    }
}
