//! Export functionality for assembled scope assets.
//!
//! This module writes the assembled scope out either as one text file per
//! category or as a single JSON document.

mod files;
mod json;

pub use files::{category_file_name, write_category_files};
pub use json::to_json;
