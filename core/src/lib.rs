//! Recursive JPEG/PNG to WebP conversion.
//!
//! [`batch::convert_tree`] walks a directory and hands every eligible file to
//! [`converter::convert_file`], collecting the outcome in a [`report::Report`].

pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod io;
pub mod report;

#[cfg(test)]
pub(crate) mod test_helpers;
