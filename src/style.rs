//! Shared worksheet styling: brand palette, cell format presets, the merged
//! title banner, and column-width fitting.
//!
//! Everything here is pure presentation. Nothing in this module knows what a
//! table or a section is; the builder decides which format goes where.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Worksheet};

use crate::cast;
use crate::error::GeneratorResult;

/// Navy brand color: header fills, title and caption text.
pub const NAVY: Color = Color::RGB(0x001E_3A5F);

/// Pistachio brand color: section banners and alternate sheet tabs.
pub const PISTACHIO: Color = Color::RGB(0x0093_C572);

/// Tinted green fill for alternating data rows.
pub const LEAF_TINT: Color = Color::RGB(0x00F0_F7EC);

/// Height of the merged title row.
pub const TITLE_ROW_HEIGHT: f64 = 35.0;

/// Extra character units added to every fitted column width.
pub const WIDTH_PADDING: usize = 3;

/// Column-header preset over the given fill color.
#[must_use]
pub fn header_format(fill: Color) -> Format {
    Format::new()
        .set_font_name("Arial")
        .set_bold()
        .set_font_size(11)
        .set_font_color(Color::White)
        .set_background_color(fill)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
}

/// Precomputed cell formats shared by every sheet writer.
///
/// Built once per workbook and passed by reference, so format objects are
/// deduplicated by the engine instead of recreated per cell.
pub struct SheetStyles {
    /// Merged sheet title, Arial 14 bold navy.
    pub title: Format,
    /// Sub-table caption, Arial 12 bold navy.
    pub caption: Format,
    /// Column headers, white on navy.
    pub header: Format,
    /// Plain data cell.
    pub data: Format,
    /// Data cell on an alternating (shaded) row.
    pub data_shaded: Format,
    /// Data cell in a right-aligned translation column.
    pub translated: Format,
    /// Shaded variant of [`SheetStyles::translated`].
    pub translated_shaded: Format,
    /// Merged section banner, white on pistachio.
    pub section: Format,
}

impl SheetStyles {
    #[must_use]
    pub fn new() -> Self {
        let data = Format::new()
            .set_font_name("Arial")
            .set_font_size(10)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);
        let translated = data.clone().set_align(FormatAlign::Right);

        Self {
            title: Format::new()
                .set_font_name("Arial")
                .set_bold()
                .set_font_size(14)
                .set_font_color(NAVY)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            caption: Format::new()
                .set_font_name("Arial")
                .set_bold()
                .set_font_size(12)
                .set_font_color(NAVY),
            header: header_format(NAVY),
            data_shaded: data.clone().set_background_color(LEAF_TINT),
            translated_shaded: translated.clone().set_background_color(LEAF_TINT),
            data,
            translated,
            section: Format::new()
                .set_font_name("Arial")
                .set_bold()
                .set_font_size(10)
                .set_font_color(Color::White)
                .set_background_color(PISTACHIO)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin),
        }
    }
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the merged title banner across the top of a sheet and set its row
/// height.
///
/// # Errors
///
/// Returns an error if the engine rejects the merge or row sizing.
pub fn add_title_banner(
    worksheet: &mut Worksheet,
    styles: &SheetStyles,
    text: &str,
    row: u32,
    span: u16,
) -> GeneratorResult<()> {
    worksheet.merge_range(row, 0, row, span - 1, text, &styles.title)?;
    worksheet.set_row_height(row, TITLE_ROW_HEIGHT)?;
    Ok(())
}

/// Per-sheet clamp bounds for fitted column widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthBounds {
    /// Floor, applied even to empty columns.
    pub min: usize,
    /// Cap on the contribution of any single cell.
    pub max: usize,
}

impl WidthBounds {
    /// Bounds used by most sheets.
    pub const DEFAULT: Self = Self::new(12, 50);

    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Accumulates the widest clamped text length seen in each column.
///
/// The builder folds in every cell as it writes, then calls [`apply`] exactly
/// once after the sheet is fully populated, so the fitted widths always
/// reflect all content. Merged cells are folded into their anchor column
/// only.
///
/// [`apply`]: ColumnFit::apply
#[derive(Debug)]
pub struct ColumnFit {
    widths: Vec<usize>,
    bounds: WidthBounds,
}

impl ColumnFit {
    #[must_use]
    pub fn new(column_count: usize, bounds: WidthBounds) -> Self {
        Self {
            widths: vec![bounds.min; column_count],
            bounds,
        }
    }

    /// Fold one cell's text into its column maximum. Empty text is ignored,
    /// as are columns beyond the fitted range.
    ///
    /// Length is the Unicode scalar count. The tables mix Arabic and English,
    /// so byte lengths would overshoot badly.
    pub fn observe(&mut self, column: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(width) = self.widths.get_mut(column) {
            *width = (*width).max(text.chars().count().min(self.bounds.max));
        }
    }

    /// Fitted width of one column, padding included.
    #[must_use]
    pub fn width(&self, column: usize) -> Option<f64> {
        self.widths.get(column).map(|w| Self::padded(*w))
    }

    /// Set every fitted column width on the worksheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a column index or width.
    pub fn apply(&self, worksheet: &mut Worksheet) -> GeneratorResult<()> {
        for (column, width) in self.widths.iter().enumerate() {
            worksheet.set_column_width(cast::column_index(column)?, Self::padded(*width))?;
        }
        Ok(())
    }

    fn padded(width: usize) -> f64 {
        f64::from(u32::try_from(width + WIDTH_PADDING).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_columns_keep_the_floor() {
        let fit = ColumnFit::new(4, WidthBounds::DEFAULT);
        for column in 0..4 {
            assert_eq!(fit.width(column), Some(15.0));
        }
    }

    #[test]
    fn long_text_is_capped() {
        let mut fit = ColumnFit::new(1, WidthBounds::DEFAULT);
        fit.observe(0, &"x".repeat(200));
        assert_eq!(fit.width(0), Some(53.0));
    }

    #[test]
    fn widest_cell_wins() {
        let mut fit = ColumnFit::new(1, WidthBounds::DEFAULT);
        fit.observe(0, &"a".repeat(20));
        fit.observe(0, &"b".repeat(30));
        fit.observe(0, &"c".repeat(25));
        assert_eq!(fit.width(0), Some(33.0));
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let mut fit = ColumnFit::new(1, WidthBounds::new(1, 50));
        // 16 chars, 24 bytes in UTF-8.
        fit.observe(0, "── Navigation ──");
        assert_eq!(fit.width(0), Some(19.0));

        let mut arabic = ColumnFit::new(1, WidthBounds::new(1, 50));
        arabic.observe(0, "سجل الآن");
        assert_eq!(arabic.width(0), Some(11.0));
    }

    #[test]
    fn empty_text_and_out_of_range_columns_are_ignored() {
        let mut fit = ColumnFit::new(2, WidthBounds::DEFAULT);
        fit.observe(0, "");
        fit.observe(7, &"z".repeat(40));
        assert_eq!(fit.width(0), Some(15.0));
        assert_eq!(fit.width(7), None);
    }
}
