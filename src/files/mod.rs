//! Filesystem naming helpers.

pub mod filename;

pub use filename::{export_filename, sanitize};
