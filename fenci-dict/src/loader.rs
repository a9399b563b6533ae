//! Reading dictionary files and discovering them on disk

use crate::error::{DictError, Result};
use crate::words::WordSet;
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// File suffix used when discovering dictionaries in a directory
pub const DEFAULT_EXTENSION: &str = "dic";

/// Add the words of one file to `words`, returning how many were new
pub fn load_file(path: &Path, words: &mut WordSet) -> Result<usize> {
    let file = File::open(path).map_err(|e| DictError::io(path, e))?;
    let added = words
        .read_from(BufReader::new(file))
        .map_err(|e| DictError::io(path, e))?;

    tracing::debug!(path = %path.display(), added, "loaded dictionary file");
    Ok(added)
}

/// Read every file in order into one word set
///
/// Fails on the first file that cannot be read.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<WordSet> {
    let mut words = WordSet::new();
    for path in paths {
        load_file(path.as_ref(), &mut words)?;
    }

    tracing::info!(files = paths.len(), words = words.len(), "dictionaries loaded");
    Ok(words)
}

/// Find every file ending in `.extension` below `root`, breadth first
///
/// Files directly in a directory come before those in its subdirectories,
/// and entries at each level are visited in name order. A plain file root is
/// returned as is, whatever its extension.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| DictError::io(root, e))?;
    if !metadata.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut found = Vec::new();
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let mut entries = fs::read_dir(&dir)
            .map_err(|e| DictError::io(&dir, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| DictError::io(&dir, e))?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                queue.push_back(path);
            } else if has_extension(&path, extension) {
                tracing::debug!(path = %path.display(), "found dictionary file");
                found.push(path);
            }
        }
    }

    tracing::info!(root = %root.display(), files = found.len(), "dictionary discovery finished");
    Ok(found)
}

/// Expand a mix of files and directories into the list of files to load
///
/// Directories are searched with [`discover`]; files are kept in the order
/// given.
pub fn collect_files<P: AsRef<Path>>(paths: &[P], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(discover(path.as_ref(), extension)?);
    }
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cars.dic");
        fs::write(&path, "宝马\n奥迪\n\n宝马\n").unwrap();

        let mut words = WordSet::new();
        assert_eq!(load_file(&path, &mut words).unwrap(), 2);
        assert!(words.contains("宝马"));
    }

    #[test]
    fn test_load_files_fails_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.dic");
        fs::write(&good, "ab\n").unwrap();
        let missing = temp_dir.path().join("missing.dic");

        let err = load_files(&[good, missing.clone()]).unwrap_err();
        assert!(matches!(err, DictError::NotFound(ref p) if p == &missing));
    }

    #[test]
    fn test_discover_is_breadth_first() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/deep")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a/deep/z.dic"), "").unwrap();
        fs::write(root.join("a/y.dic"), "").unwrap();
        fs::write(root.join("b/x.dic"), "").unwrap();
        fs::write(root.join("b/notes.txt"), "").unwrap();
        fs::write(root.join("w.dic"), "").unwrap();

        let found: Vec<PathBuf> = discover(root, "dic")
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            found,
            vec![
                PathBuf::from("w.dic"),
                PathBuf::from("a/y.dic"),
                PathBuf::from("b/x.dic"),
                PathBuf::from("a/deep/z.dic"),
            ]
        );
    }

    #[test]
    fn test_discover_plain_file_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "ab\n").unwrap();
        assert_eq!(discover(&path, "dic").unwrap(), vec![path]);
    }

    #[test]
    fn test_discover_missing_root() {
        let err = discover(Path::new("/nonexistent/dictionaries"), "dic").unwrap_err();
        assert!(matches!(err, DictError::NotFound(_)));
    }

    #[test]
    fn test_collect_files_mixes_files_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("dicts");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.dic"), "").unwrap();
        let single = temp_dir.path().join("extra.list");
        fs::write(&single, "").unwrap();

        let files = collect_files(&[single.clone(), dir.clone()], ".dic").unwrap();
        assert_eq!(files, vec![single, dir.join("a.dic")]);
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("x/words.dic"), "dic"));
        assert!(has_extension(Path::new("words.dic"), ".dic"));
        assert!(!has_extension(Path::new("words.dict"), "dic"));
        assert!(!has_extension(Path::new("dic"), "dic"));
    }
}
