/// Setup script concatenator
///
/// Assembles the aggregate SQL setup script from the ordered fragment files.
/// The output starts with a header banner; every fragment found on disk is
/// copied verbatim between a start and an end marker. Missing fragments are
/// skipped with a warning.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::error::{Result, SetupError};
use crate::utils::file_utils::{create_buffered, read_text_file, resolve};

const RULE: &str = "-- ==================================================================\n";

/// Build the header banner written at the top of the setup script
pub fn render_header(date: NaiveDate) -> String {
    let mut header = String::new();
    header.push_str(RULE);
    header.push_str("-- FULL SETUP SCRIPT - GOLDEN ORDER FORM\n");
    header.push_str(RULE);
    header.push_str(&format!("-- Date: {}\n", date.format("%d/%m/%Y")));
    header.push_str("-- Description: Creates ALL tables, indexes and rules in a single run.\n");
    header.push_str("-- INSTALL: Copy and paste this whole file into the Supabase SQL Editor.\n");
    header.push_str(RULE);
    header.push('\n');
    header
}

pub fn start_marker(name: &str) -> String {
    format!("\n\n-- >>> START OF FILE: {} <<<\n", name)
}

pub fn end_marker(name: &str) -> String {
    format!("\n-- >>> END OF FILE: {} <<<\n", name)
}

/// Outcome of a successful concatenation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatReport {
    /// Where the setup script was written
    pub output: PathBuf,
    /// Fragments copied into the output, in order
    pub included: Vec<String>,
    /// Fragments that were not found and skipped
    pub missing: Vec<String>,
}

impl ConcatReport {
    /// One warning is emitted per missing fragment
    pub fn warning_count(&self) -> usize {
        self.missing.len()
    }
}

pub struct SetupConcatenator {
    base_dir: PathBuf,
    files: Vec<String>,
    output: PathBuf,
}

impl SetupConcatenator {
    /// Create a concatenator
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Directory the fragment names are resolved against
    /// * `files` - Fragment names in the order they must appear
    /// * `output` - Path of the aggregate script
    pub fn new(base_dir: impl Into<PathBuf>, files: Vec<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            files,
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Generate the setup script stamped with today's date
    pub fn generate(&self) -> Result<ConcatReport> {
        self.generate_at(Local::now().date_naive())
    }

    /// Generate the setup script stamped with the given date
    ///
    /// Any I/O failure aborts the run; whatever was already written to the
    /// output stays there.
    pub fn generate_at(&self, date: NaiveDate) -> Result<ConcatReport> {
        info!("Generating {}", self.output.display());

        let mut out = create_buffered(&self.output)?;
        let write_err = |e| SetupError::io(&self.output, e);

        out.write_all(render_header(date).as_bytes())
            .map_err(write_err)?;

        let mut included = Vec::new();
        let mut missing = Vec::new();

        for name in &self.files {
            let path = resolve(&self.base_dir, name);
            if !path.exists() {
                warn!("File {} not found, skipping", path.display());
                missing.push(name.clone());
                continue;
            }

            info!("Adding {}", path.display());
            let content = read_text_file(&path)?;
            out.write_all(start_marker(name).as_bytes())
                .map_err(write_err)?;
            out.write_all(content.as_bytes()).map_err(write_err)?;
            out.write_all(end_marker(name).as_bytes())
                .map_err(write_err)?;
            included.push(name.clone());
        }

        out.flush().map_err(write_err)?;

        info!(
            "Wrote {} with {} fragment(s), {} missing",
            self.output.display(),
            included.len(),
            missing.len()
        );

        Ok(ConcatReport {
            output: self.output.clone(),
            included,
            missing,
        })
    }
}
