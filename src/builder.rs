//! Workbook assembly: fixed row layout, section-aware table writing, and
//! column-width fitting, in that order per worksheet.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, info};

use crate::cast;
use crate::error::GeneratorResult;
use crate::style::{self, ColumnFit, SheetStyles};
use crate::table::{Document, Row, Sheet, Table};

/// The merged title sits on the first row; row 1 stays blank.
pub const TITLE_ROW: u32 = 0;
/// Header row of a sheet's first table.
pub const HEADER_ROW: u32 = 2;
/// First data row of a sheet's first table.
pub const DATA_START_ROW: u32 = 3;

/// Follow-on tables: two blank rows, a caption row, one blank row, header.
const CAPTION_GAP: u32 = 3;
const CAPTION_TO_HEADER: u32 = 2;

/// Visual treatment of one written table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPaint {
    /// Merged section banner.
    Banner,
    /// Unshaded data row.
    Plain,
    /// Shaded data row.
    Shaded,
}

/// Shading plan for a run of rows.
///
/// The alternation counter starts at zero per table, increments on data rows
/// only, and resets to zero at every section banner, so the first data row
/// under a banner is always plain.
#[must_use]
pub fn paint_rows(rows: &[Row]) -> Vec<RowPaint> {
    let mut painted = Vec::with_capacity(rows.len());
    let mut alternation = 0usize;
    for row in rows {
        match row {
            Row::Section(_) => {
                alternation = 0;
                painted.push(RowPaint::Banner);
            }
            Row::Data(_) => {
                painted.push(if alternation % 2 == 1 {
                    RowPaint::Shaded
                } else {
                    RowPaint::Plain
                });
                alternation += 1;
            }
        }
    }
    painted
}

/// Assemble a document's workbook in memory.
///
/// # Errors
///
/// Returns an error if the literal data fails validation or the engine
/// rejects a write.
pub fn build_workbook(document: &Document) -> GeneratorResult<Workbook> {
    document.validate()?;

    let styles = SheetStyles::new();
    let mut workbook = Workbook::new();
    for sheet in document.sheets {
        write_sheet(&mut workbook, sheet, &styles)?;
    }
    Ok(workbook)
}

/// Build one document and save it as `<out_dir>/<file_stem>.xlsx`,
/// overwriting any previous run.
///
/// # Errors
///
/// Returns an error if the output directory is missing, on validation
/// failure, on engine failure, or if the file cannot be written.
pub fn write_document(document: &Document, out_dir: &Path) -> GeneratorResult<PathBuf> {
    // The destination must already exist; nothing is created here.
    std::fs::metadata(out_dir)?;

    let path = out_dir.join(format!("{}.xlsx", document.file_stem));
    let mut workbook = build_workbook(document)?;
    workbook.save(&path)?;
    info!(path = %path.display(), "workbook saved");
    Ok(path)
}

fn write_sheet(
    workbook: &mut Workbook,
    sheet: &Sheet,
    styles: &SheetStyles,
) -> GeneratorResult<()> {
    let worksheet = workbook.add_worksheet().set_name(sheet.name)?;
    worksheet.set_tab_color(sheet.tab_color);

    let mut fit = ColumnFit::new(sheet.column_count(), sheet.widths);

    let span = cast::column_index(sheet.column_count())?;
    style::add_title_banner(worksheet, styles, sheet.title, TITLE_ROW, span)?;
    fit.observe(0, sheet.title);

    let mut last_row = TITLE_ROW;
    for table in sheet.tables {
        let header_row = match table.caption {
            Some(caption) => {
                let caption_row = last_row + CAPTION_GAP;
                worksheet.write_string_with_format(caption_row, 0, caption, &styles.caption)?;
                fit.observe(0, caption);
                caption_row + CAPTION_TO_HEADER
            }
            None => HEADER_ROW,
        };
        last_row = write_table(worksheet, table, header_row, sheet, styles, &mut fit)?;
    }

    // Widths are fitted strictly after the last cell, then pinned columns
    // overwrite their fitted values.
    fit.apply(worksheet)?;
    for &(column, width) in sheet.width_overrides {
        worksheet.set_column_width(column, width)?;
    }

    debug!(sheet = sheet.name, rows = last_row + 1, "worksheet written");
    Ok(())
}

/// Write one table's header and rows; returns the last written row.
fn write_table(
    worksheet: &mut Worksheet,
    table: &Table,
    header_row: u32,
    sheet: &Sheet,
    styles: &SheetStyles,
    fit: &mut ColumnFit,
) -> GeneratorResult<u32> {
    for (column, header) in table.headers.iter().enumerate() {
        let col = cast::column_index(column)?;
        worksheet.write_string_with_format(header_row, col, *header, &styles.header)?;
        fit.observe(column, header);
    }

    let last_col = cast::column_index(table.headers.len() - 1)?;
    let paints = paint_rows(table.rows);

    let mut row = header_row + 1;
    for (entry, paint) in table.rows.iter().zip(&paints) {
        match entry {
            Row::Section(label) => {
                let text = Row::section_text(label);
                worksheet.merge_range(row, 0, row, last_col, &text, &styles.section)?;
                fit.observe(0, &text);
            }
            Row::Data(cells) => {
                let shaded = *paint == RowPaint::Shaded;
                for (column, cell) in cells.iter().enumerate() {
                    let col = cast::column_index(column)?;
                    let format = cell_format(styles, sheet.translated_column, col, shaded);
                    worksheet.write_string_with_format(row, col, *cell, format)?;
                    fit.observe(column, cell);
                }
            }
        }
        row += 1;
    }

    Ok(row - 1)
}

fn cell_format<'a>(
    styles: &'a SheetStyles,
    translated_column: Option<u16>,
    column: u16,
    shaded: bool,
) -> &'a Format {
    let translated = translated_column == Some(column);
    match (translated, shaded) {
        (true, true) => &styles.translated_shaded,
        (true, false) => &styles.translated,
        (false, true) => &styles.data_shaded,
        (false, false) => &styles.data,
    }
}
