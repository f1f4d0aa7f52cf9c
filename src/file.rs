// src/file.rs

use std::{
    error::Error,
    fs::{self, File, OpenOptions},
    io::BufWriter,
    path::Path,
};

use crate::config::options::OutputMode;
use crate::csv::write_row;

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Open the output file for a run. Overwrite truncates and writes the
/// header; Append only writes the header when creating the file.
pub fn open_output(
    path: &Path,
    mode: OutputMode,
    headers: &[String],
    sep: char,
) -> Result<BufWriter<File>, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let (file, write_header) = match mode {
        OutputMode::Overwrite => (File::create(path)?, true),
        OutputMode::Append => {
            let fresh = !path.exists();
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (file, fresh)
        }
    };

    let mut out = BufWriter::new(file);
    if write_header {
        write_row(&mut out, headers, sep)?;
    }
    Ok(out)
}
