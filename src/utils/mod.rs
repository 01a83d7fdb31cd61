/// Utility modules for the setup tools
///
/// This module contains helpers for file handling, console output formatting,
/// and logging setup shared by both binaries.

pub mod file_utils;
pub mod logging;
pub mod output_formatter;
