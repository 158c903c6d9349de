//! Literal content of the four reference workbooks.
//!
//! These tables are the documentation itself, transcribed from the theme.
//! Everything else in the crate exists to render them.

mod macros_structure;
mod translation_keys;
mod twig_blocks;
mod variables_config;

use crate::table::Document;

/// The four documents, in build order.
#[must_use]
pub fn all() -> [Document; 4] {
    [
        variables_config::document(),
        twig_blocks::document(),
        translation_keys::document(),
        macros_structure::document(),
    ]
}
