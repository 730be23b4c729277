pub mod input;
pub mod output;
pub mod walker;

pub use input::{load_screens, parse_screens};
pub use output::{create_writer, OutputFormat, OutputWriter};
pub use walker::find_export_files;

use crate::core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_system("Failed to write file", path, e))
}

/// Write through a sibling temp file and rename, so readers never observe a
/// partially written file.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = temp_sibling(path);
    fs::write(&tmp, content).map_err(|e| Error::file_system("Failed to write file", &tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::file_system("Failed to move file into place", path, e)
    })
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system("Failed to create directory", path, e))?;
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
