use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::DoseTable;

/// Lines at the top of every table file that carry titles and column labels.
pub const HEADER_LINES: usize = 3;

/// Table files give energies in MeV; tables are kept in eV.
pub const MEV_TO_EV: f64 = 1e6;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a coefficient table with exactly `columns` columns per row and
/// convert its energy column to eV.
pub fn load_table(path: &Path, columns: usize) -> Result<DoseTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading dose table {}", path.display()))?;
    let mut table = parse_table(&text, columns)
        .with_context(|| format!("parsing dose table {}", path.display()))?;
    table.scale_column(0, MEV_TO_EV);
    Ok(table)
}

// ---------------------------------------------------------------------------
// Text parsing
// ---------------------------------------------------------------------------

/// Layout: [`HEADER_LINES`] free-form lines, then one row per energy of
/// whitespace-separated floats. Blank lines and `#` comments are ignored.
/// `nan` tokens are accepted and kept as NaN.
pub fn parse_table(text: &str, columns: usize) -> Result<DoseTable> {
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate().skip(HEADER_LINES) {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let row = parse_row(line, line_no + 1)?;
        if row.len() != columns {
            bail!(
                "line {}: expected {columns} columns but found {}",
                line_no + 1,
                row.len()
            );
        }
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("no data rows after {HEADER_LINES} header lines");
    }

    Ok(DoseTable::from_rows(rows, columns))
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>()
                .with_context(|| format!("line {line_no}, column {j}: '{tok}' is not a number"))
        })
        .collect()
}
