//! Clipboard copy and paste for cell ranges.
//!
//! Handles TSV formatting of a selected range and pasting TSV text back
//! into the grid, tiling the parsed block across a larger target the same
//! way drag-fill does. The host owns the actual clipboard; this module only
//! produces and consumes the text.

use serde_json::Value;
use tracing::warn;

use crate::error::{GridfillError, Result};
use crate::fill::FillReport;
use crate::grid::GridData;
use crate::types::CellRange;

/// Copy/paste behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardOptions {
    /// Shrink the copied block to the last non-empty cell, matching
    /// Excel/Sheets copy behavior.
    pub trim_trailing_empty: bool,
    /// Tile the pasted block across a larger target range instead of
    /// writing it once at the target's top-left corner.
    pub tile_paste: bool,
}

impl Default for ClipboardOptions {
    fn default() -> Self {
        Self {
            trim_trailing_empty: true,
            tile_paste: true,
        }
    }
}

/// Serialize `range` as tab-separated values, one line per row.
///
/// Values containing tabs, newlines, or quotes are wrapped in quotes with
/// internal quotes doubled. With `trim_trailing_empty` the emitted block
/// stops at the last non-empty cell of the range.
///
/// # Errors
/// Returns [`GridfillError::MalformedRange`] for an inverted range.
pub fn copy_tsv<G: GridData>(
    grid: &G,
    range: &CellRange,
    options: &ClipboardOptions,
) -> Result<String> {
    if !range.is_well_formed() {
        return Err(GridfillError::MalformedRange(*range));
    }

    // Find the actual content bounds within the range
    let (max_row, max_cell) = if options.trim_trailing_empty {
        let mut content_max_row = range.from_row;
        let mut content_max_cell = range.from_cell;
        for row in range.from_row..=range.to_row {
            let Some(record) = grid.data_item(row) else {
                continue;
            };
            for cell in range.from_cell..=range.to_cell {
                let has_content = grid
                    .field_for_cell(cell)
                    .and_then(|field| record.get(field))
                    .is_some_and(|v| !display_value(v).is_empty());
                if has_content {
                    content_max_row = content_max_row.max(row);
                    content_max_cell = content_max_cell.max(cell);
                }
            }
        }
        (content_max_row, content_max_cell)
    } else {
        (range.to_row, range.to_cell)
    };

    let mut result = String::new();
    for row in range.from_row..=max_row {
        for cell in range.from_cell..=max_cell {
            if cell > range.from_cell {
                result.push('\t');
            }
            let value = grid.data_item(row).and_then(|record| {
                grid.field_for_cell(cell).and_then(|field| record.get(field))
            });
            if let Some(value) = value {
                result.push_str(&escape_cell_value(&display_value(value)));
            }
        }
        if row < max_row {
            result.push('\n');
        }
    }
    Ok(result)
}

/// Escape a cell value for TSV/clipboard format.
///
/// If the value contains tabs, newlines, or quotes, wrap in quotes and
/// double any internal quotes.
#[must_use]
pub fn escape_cell_value(value: &str) -> String {
    let needs_quoting = value.contains('\t')
        || value.contains('\n')
        || value.contains('\r')
        || value.contains('"');

    if needs_quoting {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Parse TSV text into a block of cells; `None` marks an empty field.
///
/// Quoted fields may span lines and contain doubled quotes.
///
/// # Errors
/// Returns [`GridfillError::Clipboard`] for an unterminated quoted field.
pub fn parse_tsv(text: &str) -> Result<Vec<Vec<Option<String>>>> {
    let mut rows = Vec::new();
    let mut row: Vec<Option<String>> = Vec::new();
    let mut field = String::new();
    let mut was_quoted = false;
    let mut chars = text.chars().peekable();

    fn take_field(field: &mut String, was_quoted: &mut bool) -> Option<String> {
        let value = if field.is_empty() && !*was_quoted {
            None
        } else {
            Some(std::mem::take(field))
        };
        *was_quoted = false;
        value
    }

    while let Some(ch) = chars.next() {
        match ch {
            '"' if field.is_empty() && !was_quoted => {
                was_quoted = true;
                loop {
                    match chars.next() {
                        Some('"') => {
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                field.push('"');
                            } else {
                                break;
                            }
                        }
                        Some(c) => field.push(c),
                        None => {
                            return Err(GridfillError::Clipboard(
                                "unterminated quoted field".to_string(),
                            ))
                        }
                    }
                }
            }
            '\t' => row.push(take_field(&mut field, &mut was_quoted)),
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take_field(&mut field, &mut was_quoted));
                rows.push(std::mem::take(&mut row));
            }
            c => field.push(c),
        }
    }

    // Final field/row unless the text ended on a line break
    if !field.is_empty() || was_quoted || !row.is_empty() {
        row.push(take_field(&mut field, &mut was_quoted));
        rows.push(row);
    }

    Ok(rows)
}

/// Paste TSV text into `target`, writing through the grid accessor.
///
/// A single-cell target expands to the parsed block's size; a larger
/// target is tiled with the block by modulo addressing (or, with
/// `tile_paste` off, receives the block once at its top-left corner).
/// Rows outside the dataset and unmapped columns are logged and skipped;
/// one batched invalidation fires after all writes.
///
/// # Errors
/// Returns [`GridfillError::MalformedRange`] for an inverted target range,
/// or [`GridfillError::Clipboard`] for malformed TSV text.
pub fn paste_tsv<G: GridData>(
    grid: &mut G,
    text: &str,
    target: &CellRange,
    options: &ClipboardOptions,
) -> Result<FillReport> {
    if !target.is_well_formed() {
        return Err(GridfillError::MalformedRange(*target));
    }

    let block = parse_tsv(text)?;
    let height = u32::try_from(block.len()).unwrap_or(u32::MAX);
    let width = u32::try_from(block.iter().map(Vec::len).max().unwrap_or(0)).unwrap_or(u32::MAX);
    if height == 0 || width == 0 {
        return Ok(FillReport::default());
    }

    let target = if target.is_single_cell() || !options.tile_paste {
        CellRange::new(
            target.from_row,
            target.from_row + height - 1,
            target.from_cell,
            target.from_cell + width - 1,
        )
    } else {
        *target
    };

    let fields: Vec<Option<String>> = (target.from_cell..=target.to_cell)
        .map(|cell| {
            let field = grid.field_for_cell(cell).map(str::to_string);
            if field.is_none() {
                warn!(cell, "column has no field mapping; skipping");
            }
            field
        })
        .collect();

    let mut report = FillReport::default();
    let mut written = Vec::new();

    for row in target.from_row..=target.to_row {
        let Some(record) = grid.data_item(row) else {
            warn!(row, "paste target row outside dataset; skipping");
            report.skipped_rows.push(row);
            continue;
        };
        let mut record = record.clone();

        for (cell, field) in (target.from_cell..=target.to_cell).zip(fields.iter()) {
            let Some(field) = field else { continue };
            let r = ((row - target.from_row) % height) as usize;
            let c = ((cell - target.from_cell) % width) as usize;
            match block.get(r).and_then(|line| line.get(c)) {
                Some(Some(value)) => {
                    record.insert(field.clone(), parse_scalar(value));
                }
                _ => {
                    record.remove(field);
                }
            }
            report.cells_written += 1;
        }

        match grid.set_data_item(row, record) {
            Ok(()) => {
                report.rows_written += 1;
                written.push(row);
            }
            Err(e) => {
                warn!(row, error = %e, "paste row write failed; skipping");
                report.skipped_rows.push(row);
            }
        }
    }

    if !written.is_empty() {
        grid.invalidate_rows(&written);
    }
    Ok(report)
}

/// Render a record value the way the grid displays it.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Detect the value type of pasted text.
///
/// "true"/"false" (case-insensitive) parse as booleans, numeric text as
/// numbers, everything else as a string.
fn parse_scalar(value: &str) -> Value {
    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(n) = value.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = value.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(value.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(escape_cell_value("hello"), "hello");
        assert_eq!(escape_cell_value("12.5"), "12.5");
    }

    #[test]
    fn embedded_specials_are_quoted() {
        assert_eq!(escape_cell_value("a\tb"), "\"a\tb\"");
        assert_eq!(escape_cell_value("a\nb"), "\"a\nb\"");
        assert_eq!(escape_cell_value("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn parse_round_trips_quoted_fields() {
        let parsed = parse_tsv("\"a\tb\"\tplain\n\"say \"\"hi\"\"\"").unwrap();
        assert_eq!(
            parsed,
            vec![
                vec![Some("a\tb".to_string()), Some("plain".to_string())],
                vec![Some("say \"hi\"".to_string())],
            ]
        );
    }

    #[test]
    fn empty_fields_parse_to_none() {
        let parsed = parse_tsv("a\t\tb\n\tc").unwrap();
        assert_eq!(
            parsed,
            vec![
                vec![Some("a".to_string()), None, Some("b".to_string())],
                vec![None, Some("c".to_string())],
            ]
        );
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(matches!(
            parse_tsv("\"oops"),
            Err(GridfillError::Clipboard(_))
        ));
    }

    #[test]
    fn scalar_detection() {
        assert_eq!(parse_scalar("TRUE"), Value::Bool(true));
        assert_eq!(parse_scalar("false"), Value::Bool(false));
        assert_eq!(parse_scalar("42"), Value::Number(42.into()));
        assert_eq!(parse_scalar("hello"), Value::String("hello".to_string()));
    }
}
