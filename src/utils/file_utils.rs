/// File handling utilities
///
/// Thin wrappers over `std::fs` that attach the offending path to every I/O
/// error, so the console report can say which file failed.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SetupError};

/// Resolve a listed file name against a base directory.
///
/// Absolute names are returned unchanged.
pub fn resolve(base_dir: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Read the full content of a UTF-8 text file.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The file content, or an I/O error carrying the path. Invalid UTF-8 is
/// reported as an I/O error too.
pub fn read_text_file(file_path: &Path) -> Result<String> {
    let content = fs::read_to_string(file_path).map_err(|e| SetupError::io(file_path, e))?;
    debug!("Read {} bytes from {}", content.len(), file_path.display());
    Ok(content)
}

/// Overwrite a file with the given text
pub fn write_text_file(file_path: &Path, content: &str) -> Result<()> {
    fs::write(file_path, content).map_err(|e| SetupError::io(file_path, e))?;
    debug!("Wrote {} bytes to {}", content.len(), file_path.display());
    Ok(())
}

/// Create (or truncate) a file and wrap it in a buffered writer
pub fn create_buffered(file_path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(file_path).map_err(|e| SetupError::io(file_path, e))?;
    Ok(BufWriter::new(file))
}
