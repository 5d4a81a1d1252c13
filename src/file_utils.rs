use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path next to the input PDF
    // @params: input_file, source_language, target_language, extension
    // @returns: <dir>/<stem>_<src>_<tgt>.<ext>
    pub fn generate_output_path<P: AsRef<Path>>(
        input_file: P,
        source_language: &str,
        target_language: &str,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = input_file.parent().unwrap_or_else(|| Path::new(""));
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('_');
        output_filename.push_str(source_language);
        output_filename.push('_');
        output_filename.push_str(target_language);
        output_filename.push('.');
        output_filename.push_str(extension.trim_start_matches('.'));

        output_dir.join(output_filename)
    }

    /// First `<base>_<n>.<ext>` path (n = 1, 2, ...) that does not exist yet
    pub fn next_available_path<P: AsRef<Path>>(path: P) -> PathBuf {
        let path = path.as_ref();
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        let stem = path.file_stem().unwrap_or_default().to_string_lossy().to_string();
        let extension = path.extension().map(|e| e.to_string_lossy().to_string());

        let mut counter = 1u32;
        loop {
            let file_name = match &extension {
                Some(ext) => format!("{}_{}.{}", stem, counter, ext),
                None => format!("{}_{}", stem, counter),
            };
            let candidate = parent.join(file_name);
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Decide where to write when the output path may already exist.
    ///
    /// With `overwrite` set, or when nothing is in the way, the path is used
    /// as is. Otherwise `confirm_overwrite` is asked; a refusal moves the
    /// output to the next free numbered path.
    pub fn resolve_output_conflict<P, F>(
        output_path: P,
        overwrite: bool,
        mut confirm_overwrite: F,
    ) -> io::Result<PathBuf>
    where
        P: AsRef<Path>,
        F: FnMut(&Path) -> io::Result<bool>,
    {
        let output_path = output_path.as_ref();
        if overwrite || !output_path.exists() {
            return Ok(output_path.to_path_buf());
        }

        if confirm_overwrite(output_path)? {
            return Ok(output_path.to_path_buf());
        }

        let new_path = Self::next_available_path(output_path);
        warn!("Saving to new file: {:?}", new_path);
        Ok(new_path)
    }

    /// Write a string to a file, creating parent directories first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
    }

    /// Strip whitespace and surrounding quotes from a pasted path
    pub fn normalize_path_input(path_input: &str) -> PathBuf {
        PathBuf::from(path_input.trim().trim_matches('"').trim_matches('\''))
    }
}
