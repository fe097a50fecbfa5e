//! Column-role inference for lab-report tables.
//!
//! Column headers in scanned lab reports are unreliable or missing, so the
//! role of each column is decided by voting. Every cell outside column 0 is
//! sorted into exactly one [`Bucket`]; for each bucket, the column with the
//! most hits takes that role.
//!
//! Column 0 is assumed to carry row labels and is never classified. No row
//! is treated as a header: a header row simply fails the numeric parse in
//! the value column and is dropped during extraction.
//!
//! Ties go to the lowest column index. The value column is chosen first and
//! is then excluded from the name vote, so the two never coincide.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::table::{ColumnRoles, Table};
use crate::models::test_result::TestResult;

/// Substrings (matched against lower-cased content) that mark a unit cell.
const UNIT_MARKERS: &[&str] = &["/", "mg", "%", "ul", "mmol", "umol", "dl"];

/// The classification of a single cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Parses as a decimal number.
    Value,
    /// Contains a hyphen, e.g. `4-11`.
    Range,
    /// Contains a unit marker such as `mg` or `/`.
    Unit,
    /// Any other non-blank text.
    Name,
}

impl Bucket {
    /// Classify cell content. First match wins, in declaration order.
    /// Blank content belongs to no bucket.
    pub fn classify(content: &str) -> Option<Bucket> {
        if parse_decimal(content).is_some() {
            return Some(Bucket::Value);
        }
        if content.contains('-') {
            return Some(Bucket::Range);
        }
        let lowered = content.to_lowercase();
        if UNIT_MARKERS.iter().any(|m| lowered.contains(m)) {
            return Some(Bucket::Unit);
        }
        if content.trim().is_empty() {
            return None;
        }
        Some(Bucket::Name)
    }
}

/// Parse a locale-invariant decimal number.
///
/// Accepts surrounding whitespace, one leading sign, `,` group separators in
/// the integer part and a single `.` before the fraction. The whole string
/// must be consumed: exponents, `inf`, `NaN` and trailing text are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if integer.starts_with(',') {
        return None;
    }
    let integer_ok = integer.chars().all(|c| c.is_ascii_digit() || c == ',');
    let fraction_ok = fraction.is_none_or(|f| f.chars().all(|c| c.is_ascii_digit()));
    let digit_count = integer.chars().filter(char::is_ascii_digit).count()
        + fraction.map_or(0, str::len);
    if !integer_ok || !fraction_ok || digit_count == 0 {
        return None;
    }

    let normalized: String = trimmed.chars().filter(|c| *c != ',').collect();
    normalized.parse().ok()
}

/// Per-column hit counts for each bucket.
#[derive(Debug, Default)]
struct Tally {
    value: BTreeMap<usize, usize>,
    range: BTreeMap<usize, usize>,
    unit: BTreeMap<usize, usize>,
    name: BTreeMap<usize, usize>,
}

impl Tally {
    fn record(&mut self, bucket: Bucket, column_index: usize) {
        let counts = match bucket {
            Bucket::Value => &mut self.value,
            Bucket::Range => &mut self.range,
            Bucket::Unit => &mut self.unit,
            Bucket::Name => &mut self.name,
        };
        *counts.entry(column_index).or_insert(0) += 1;
    }
}

/// Column with the highest count, ignoring `exclude`; the lowest index
/// wins a tie.
fn most_frequent(counts: &BTreeMap<usize, usize>, exclude: Option<usize>) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (&column, &count) in counts {
        if Some(column) == exclude {
            continue;
        }
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((column, count));
        }
    }
    best.map(|(column, _)| column)
}

/// Infer the name, value, unit and range columns of `table`.
///
/// Returns `None` when no cell outside column 0 looks like a value, or no
/// column other than the value column holds a name. Such a table cannot
/// yield any results.
pub fn classify_columns(table: &Table) -> Option<ColumnRoles> {
    let mut tally = Tally::default();

    for row_index in 0..table.row_count {
        for cell in table.row(row_index) {
            if cell.column_index == 0 {
                continue;
            }
            if let Some(bucket) = Bucket::classify(&cell.content) {
                tally.record(bucket, cell.column_index);
            }
        }
    }

    let value_index = most_frequent(&tally.value, None)?;
    let name_index = most_frequent(&tally.name, Some(value_index))?;

    Some(ColumnRoles {
        name_index,
        value_index,
        unit_index: most_frequent(&tally.unit, None),
        range_index: most_frequent(&tally.range, None),
    })
}

/// Read one [`TestResult`] per row whose name cell is non-blank and whose
/// value cell parses as a decimal. Rows missing either cell are skipped.
pub fn extract_results(table: &Table, roles: &ColumnRoles) -> Vec<TestResult> {
    (0..table.row_count)
        .filter_map(|row_index| {
            let name = table.cell(row_index, roles.name_index)?;
            let value = table.cell(row_index, roles.value_index)?;
            let value = parse_decimal(&value.content)?;
            let name = name.content.trim();
            if name.is_empty() {
                return None;
            }
            Some(TestResult::new(name, value))
        })
        .collect()
}

/// Classify and extract every table of a document, concatenating the
/// results in table order. Tables without a name or value column are
/// skipped.
pub fn extract_document(tables: &[Table]) -> Vec<TestResult> {
    let mut results = Vec::new();

    for (table_index, table) in tables.iter().enumerate() {
        let Some(roles) = classify_columns(table) else {
            debug!(table_index, "no name or value column found, skipping table");
            continue;
        };

        let rows = extract_results(table, &roles);
        debug!(
            table_index,
            name_index = roles.name_index,
            value_index = roles.value_index,
            unit_index = ?roles.unit_index,
            range_index = ?roles.range_index,
            extracted = rows.len(),
            "classified table"
        );
        results.extend(rows);
    }

    results
}
