//! # Farabi Theme Docs
//!
//! Build-time generator for the Farabi First theme's Excel reference sheets.
//!
//! The theme's maintainer documentation is four `.xlsx` workbooks covering the
//! template variables and `config.json` keys, the overridable Twig blocks, the
//! `data-i18n` translation keys, and the Twig macros plus file layout. All
//! table content is literal data in [`documents`]; the rest of the crate turns
//! those tables into consistently styled worksheets:
//!
//! - [`style`] holds the brand palette, the precomputed cell formats, and the
//!   column-width fitting.
//! - [`table`] is the typed row/table/sheet/document model with structural
//!   validation.
//! - [`builder`] lays out each worksheet and saves the workbooks.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use farabi_theme_docs::{documents, write_document};
//!
//! fn main() -> farabi_theme_docs::GeneratorResult<()> {
//!     for document in documents::all() {
//!         let path = write_document(&document, Path::new("."))?;
//!         println!("Created: {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Workbook assembly and per-worksheet layout
pub mod builder;

/// Error types for workbook generation
pub mod error;

/// Literal content of the four reference workbooks
pub mod documents;

/// Brand palette, cell format presets, and column-width fitting
pub mod style;

/// Typed model for the literal reference tables
pub mod table;

mod cast;

// Re-export commonly used types
pub use builder::{RowPaint, build_workbook, paint_rows, write_document};
pub use error::{GeneratorError, GeneratorResult};
pub use style::{ColumnFit, SheetStyles, WidthBounds};
pub use table::{Document, Row, Sheet, Table};
