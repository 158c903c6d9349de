//! Typed model for the literal reference tables.
//!
//! The four workbooks are described entirely by static data in
//! [`crate::documents`]; this module defines the shapes and the structural
//! checks that run before any cell is written.

use rust_xlsxwriter::Color;

use crate::error::{GeneratorError, GeneratorResult};
use crate::style::WidthBounds;

/// One table row.
///
/// Section rows are their own variant, decided where the table is defined.
/// Render-time code never sniffs cell text for banner markers, so a data
/// cell that happens to start with dashes stays a data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Ordinary content row; must match the table's header arity.
    Data(&'static [&'static str]),
    /// Full-width banner labelling the rows that follow.
    Section(&'static str),
}

impl Row {
    /// Banner text rendered for a section label.
    #[must_use]
    pub fn section_text(label: &str) -> String {
        format!("── {label} ──")
    }
}

/// A headed run of literal rows.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    /// Sub-heading written above follow-on tables. The first table of a
    /// sheet sits directly under the sheet title and carries none.
    pub caption: Option<&'static str>,
    pub headers: &'static [&'static str],
    pub rows: &'static [Row],
}

/// One worksheet: identity, styling knobs, and its tables.
#[derive(Debug, Clone, Copy)]
pub struct Sheet {
    pub name: &'static str,
    pub tab_color: Color,
    /// Text of the merged title banner.
    pub title: &'static str,
    pub tables: &'static [Table],
    /// Clamp bounds for auto-fitted column widths.
    pub widths: WidthBounds,
    /// Column rendered right-aligned for RTL text, if any.
    pub translated_column: Option<u16>,
    /// Fixed widths applied after auto-fitting, as (column, width) pairs.
    pub width_overrides: &'static [(u16, f64)],
}

impl Sheet {
    /// Widest table's column count. The title banner spans this many columns
    /// and width fitting covers exactly these columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.tables
            .iter()
            .map(|table| table.headers.len())
            .max()
            .unwrap_or(0)
    }
}

/// One output workbook.
#[derive(Debug, Clone, Copy)]
pub struct Document {
    /// Output file name without the `.xlsx` extension.
    pub file_stem: &'static str,
    pub sheets: &'static [Sheet],
}

impl Document {
    /// Check structural invariants before any cell is written.
    ///
    /// Every data row must have exactly as many cells as its table has
    /// headers. A mismatch is a hard error; nothing is truncated or padded.
    /// Follow-on tables must carry a caption, since the layout positions
    /// them relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Table`] naming the offending sheet and row.
    pub fn validate(&self) -> GeneratorResult<()> {
        for sheet in self.sheets {
            if sheet.tables.is_empty() {
                return Err(GeneratorError::table(sheet.name, "sheet has no tables"));
            }
            for (position, table) in sheet.tables.iter().enumerate() {
                if position > 0 && table.caption.is_none() {
                    return Err(GeneratorError::table(
                        sheet.name,
                        "follow-on table has no caption",
                    ));
                }
                if table.headers.is_empty() {
                    return Err(GeneratorError::table(sheet.name, "table has no headers"));
                }
                for (index, row) in table.rows.iter().enumerate() {
                    if let Row::Data(cells) = row {
                        if cells.len() != table.headers.len() {
                            return Err(GeneratorError::table(
                                sheet.name,
                                format!(
                                    "row {} has {} cells, expected {}",
                                    index + 1,
                                    cells.len(),
                                    table.headers.len()
                                ),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
