//! Integration tests for the generated reference workbooks.
//!
//! Each test generates real files into a temp directory and reads them back
//! with calamine, checking the grid a maintainer would see in Excel: sheet
//! names, the title banner, the blank spacer row, header and data positions,
//! and the merged section banners of the translation sheet.

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

use farabi_theme_docs::builder::{DATA_START_ROW, HEADER_ROW, TITLE_ROW};
use farabi_theme_docs::{GeneratorError, Row, documents, write_document};

/// Generate one document into a fresh temp directory.
fn generate(index: usize) -> Result<(TempDir, PathBuf), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let document = documents::all()[index];
    let path = write_document(&document, dir.path())?;
    Ok((dir, path))
}

/// Text of one cell; empty string for blank or unwritten cells.
fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[test]
fn all_four_workbooks_are_written() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let mut names = Vec::new();
    for document in documents::all() {
        let path = write_document(&document, dir.path())?;
        assert!(path.is_file(), "missing output: {}", path.display());
        names.push(
            path.file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default()
                .to_string(),
        );
    }

    assert_eq!(
        names,
        vec![
            "01-variables-config.xlsx",
            "02-twig-blocks.xlsx",
            "03-translation-keys.xlsx",
            "04-macros-structure.xlsx",
        ]
    );
    Ok(())
}

#[test]
fn variables_workbook_has_both_sheets_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(0)?;
    let workbook: Xlsx<_> = open_workbook(&path)?;
    assert_eq!(
        workbook.sheet_names().to_vec(),
        vec!["Twig Variables", "Config Keys"]
    );
    Ok(())
}

#[test]
fn variables_sheet_follows_the_fixed_layout() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(0)?;
    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range("Twig Variables")?;

    // Title banner, blank spacer, header, then data.
    assert_eq!(cell_text(&range, TITLE_ROW, 0), "Twig Template Variables");
    assert_eq!(cell_text(&range, TITLE_ROW + 1, 0), "");
    assert_eq!(cell_text(&range, HEADER_ROW, 0), "Variable");
    assert_eq!(cell_text(&range, HEADER_ROW, 3), "Default Value");
    assert_eq!(cell_text(&range, DATA_START_ROW, 0), "current_locale");
    assert_eq!(cell_text(&range, DATA_START_ROW + 4, 0), "config");
    assert_eq!(range.height(), 8, "nothing below the last data row");
    Ok(())
}

#[test]
fn config_keys_sheet_holds_all_thirteen_keys() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(0)?;
    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range("Config Keys")?;

    assert_eq!(cell_text(&range, 0, 0), "Config Object Keys (config.json)");
    assert_eq!(cell_text(&range, 2, 0), "Key");
    assert_eq!(cell_text(&range, 3, 0), "config.site.name");
    assert_eq!(cell_text(&range, 3, 3), "Farabi Academy");
    assert_eq!(cell_text(&range, 15, 0), "config.social.tiktok");
    assert_eq!(range.height(), 16);
    Ok(())
}

#[test]
fn twig_blocks_sheet_lists_every_block() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(1)?;
    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range("Twig Blocks")?;

    assert_eq!(cell_text(&range, 0, 0), "Twig Blocks (بلوكات قابلة للتعديل)");
    assert_eq!(cell_text(&range, 2, 0), "Block Name");
    assert_eq!(cell_text(&range, 3, 0), "{% block title %}");
    assert_eq!(cell_text(&range, 13, 0), "{% block scripts_extra %}");
    assert_eq!(range.height(), 14);
    Ok(())
}

#[test]
fn translation_sheet_interleaves_merged_banners() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(2)?;
    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range("Translation Keys")?;

    assert_eq!(cell_text(&range, 2, 2), "Arabic (العربي)");

    // The first banner sits on the first data row; merged cells keep their
    // value in the anchor column only.
    assert_eq!(cell_text(&range, 3, 0), "── Navigation ──");
    assert_eq!(cell_text(&range, 3, 1), "");
    assert_eq!(cell_text(&range, 4, 0), "nav.brand");

    // The next banner lands right after the seven navigation keys.
    assert_eq!(cell_text(&range, 11, 0), "── Hero ──");
    assert_eq!(cell_text(&range, 12, 0), "hero.title");

    assert_eq!(cell_text(&range, 83, 0), "floatingCta");
    assert_eq!(range.height(), 84, "81 table rows under 3 layout rows");
    Ok(())
}

#[test]
fn title_and_banners_are_merged_across_all_columns() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(2)?;
    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    workbook.load_merged_regions()?;

    let mut merged_rows: Vec<u32> = Vec::new();
    for (sheet, _, dimensions) in workbook.merged_regions() {
        if sheet != "Translation Keys" {
            continue;
        }
        // Every merge is one full-width row: columns A through D.
        assert_eq!(dimensions.start.0, dimensions.end.0);
        assert_eq!((dimensions.start.1, dimensions.end.1), (0, 3));
        merged_rows.push(dimensions.start.0);
    }
    merged_rows.sort_unstable();

    // The title merge plus one merge per section banner, nothing else.
    let document = documents::all()[2];
    let mut expected = vec![TITLE_ROW];
    for (index, row) in document.sheets[0].tables[0].rows.iter().enumerate() {
        if matches!(row, Row::Section(_)) {
            expected.push(DATA_START_ROW + u32::try_from(index)?);
        }
    }
    assert_eq!(expected.len(), 10, "one title and nine section banners");
    assert_eq!(merged_rows, expected);
    Ok(())
}

#[test]
fn macros_sheet_stacks_two_tables() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = generate(3)?;
    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range("Macros & Components")?;

    assert_eq!(cell_text(&range, 0, 0), "Twig Macros & Reusable Components");
    assert_eq!(cell_text(&range, 2, 0), "Macro Name");
    assert_eq!(cell_text(&range, 3, 0), "course_card");
    assert_eq!(cell_text(&range, 4, 0), "review_card");

    // Two blank rows, the caption, one more blank row, then the file table.
    assert_eq!(cell_text(&range, 5, 0), "");
    assert_eq!(cell_text(&range, 6, 0), "");
    assert_eq!(cell_text(&range, 7, 0), "Theme File Structure");
    assert_eq!(cell_text(&range, 8, 0), "");
    assert_eq!(cell_text(&range, 9, 0), "File Path");
    assert_eq!(cell_text(&range, 9, 1), "Description (الوصف)");
    assert_eq!(cell_text(&range, 10, 0), "config.json");
    assert_eq!(cell_text(&range, 29, 0), "assets/js/form.js");
    assert_eq!(range.height(), 30);
    Ok(())
}

#[test]
fn regeneration_overwrites_with_identical_content() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let document = documents::all()[2];

    let first = write_document(&document, dir.path())?;
    let mut workbook: Xlsx<_> = open_workbook(&first)?;
    let before: Vec<(usize, usize, Data)> = workbook
        .worksheet_range("Translation Keys")?
        .cells()
        .map(|(row, col, value)| (row, col, value.clone()))
        .collect();

    let second = write_document(&document, dir.path())?;
    assert_eq!(first, second, "rerun targets the same file");

    let mut workbook: Xlsx<_> = open_workbook(&second)?;
    let after: Vec<(usize, usize, Data)> = workbook
        .worksheet_range("Translation Keys")?
        .cells()
        .map(|(row, col, value)| (row, col, value.clone()))
        .collect();

    assert_eq!(before, after);
    Ok(())
}

#[test]
fn missing_output_directory_is_an_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("no-such").join("nested");

    let document = documents::all()[0];
    let result = write_document(&document, &missing);
    assert!(
        matches!(result, Err(GeneratorError::Io(_))),
        "saving into a missing directory must fail before any build work"
    );
    Ok(())
}
