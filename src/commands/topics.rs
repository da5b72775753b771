//! `cqlhelp topics` - print the help topic index.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::topics::TopicDirectory;

/// Width the topic index is laid out in.
pub const DISPLAY_WIDTH: usize = 80;

const COLUMN_GAP: usize = 2;

/// List every help topic, as columns or as a JSON array
pub fn execute(json: bool) -> Result<()> {
    let names = TopicDirectory::global().list_topics();

    if json {
        let out = serde_json::to_string_pretty(&names).context("Failed to serialize topics")?;
        println!("{out}");
        return Ok(());
    }

    println!();
    println!("{}", "CQL help topics:".bold());
    println!("{}", "================".bold());
    for line in columnize(&names, DISPLAY_WIDTH) {
        println!("{line}");
    }
    println!();

    Ok(())
}

/// Lay `names` out column-major in as few rows as fit within `width`.
///
/// Columns are separated by two spaces. A single name wider than `width`
/// still gets its own row.
pub fn columnize(names: &[&str], width: usize) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }

    let (nrows, col_widths) = (1..=names.len())
        .map(|nrows| (nrows, column_widths(names, nrows)))
        .find(|(_, widths)| {
            widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1) <= width
        })
        .unwrap_or_else(|| (names.len(), column_widths(names, names.len())));

    (0..nrows)
        .map(|row| {
            let cells: Vec<String> = col_widths
                .iter()
                .enumerate()
                .filter_map(|(col, col_width)| {
                    names
                        .get(col * nrows + row)
                        .map(|name| format!("{name:<col_width$}"))
                })
                .collect();
            cells.join(&" ".repeat(COLUMN_GAP)).trim_end().to_string()
        })
        .collect()
}

fn column_widths(names: &[&str], nrows: usize) -> Vec<usize> {
    names
        .chunks(nrows)
        .map(|column| column.iter().map(|name| name.len()).max().unwrap_or(0))
        .collect()
}
