use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::CorpusError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> std::result::Result<(), CorpusError> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(|e| CorpusError::io(path, e))?;
        }
        Ok(())
    }

    /// Whether `path` lies under `dir`.
    ///
    /// Both sides are canonicalized, so `./out/x` and `out/x` or relative and
    /// absolute spellings of the same location compare equal. A path that does
    /// not exist is never within anything.
    pub fn is_within<P1: AsRef<Path>, P2: AsRef<Path>>(path: P1, dir: P2) -> bool {
        match (fs::canonicalize(path), fs::canonicalize(dir)) {
            (Ok(path), Ok(dir)) => path.starts_with(dir),
            _ => false,
        }
    }

    /// Document name: the file name without its extension
    pub fn document_name<P: AsRef<Path>>(path: P) -> String {
        path.as_ref()
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    // @generates: Output path for a cleaned document
    // @params: input_file, input_root, output_dir
    // Keeps the path relative to `input_root` so nested documents don't collide
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        input_file: P1,
        input_root: P2,
        output_dir: P3,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        match input_file.strip_prefix(input_root.as_ref()) {
            Ok(relative) if !relative.as_os_str().is_empty() => output_dir.join(relative),
            _ => match input_file.file_name() {
                Some(file_name) => output_dir.join(file_name),
                None => output_dir.join(Self::document_name(input_file)),
            },
        }
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file as UTF-8 text; the handle is closed before returning
    pub fn read_text<P: AsRef<Path>>(path: P) -> std::result::Result<String, CorpusError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CorpusError::io(path, e))?;

        String::from_utf8(bytes).map_err(|e| CorpusError::Decode {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    /// Write a string to a file, creating parent directories first
    pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> std::result::Result<(), CorpusError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, content).map_err(|e| CorpusError::io(path, e))
    }
}
