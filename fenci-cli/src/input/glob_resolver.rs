//! Dictionary path resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve dictionary patterns to existing files and directories
///
/// Each pattern must match at least one path. Order follows the patterns;
/// duplicates are dropped.
pub fn resolve_patterns<P: AsRef<Path>>(patterns: &[P]) -> Result<Vec<PathBuf>> {
    let mut resolved: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref().to_string_lossy();
        let paths = glob(&pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        let mut matched = false;
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            matched = true;
            if !resolved.contains(&path) {
                resolved.push(path);
            }
        }

        if !matched {
            return Err(CliError::InvalidPattern(pattern.into_owned()).into());
        }
    }

    log::debug!("Resolved dictionary paths: {resolved:?}");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_files_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("dicts")).unwrap();
        fs::write(temp_dir.path().join("a.dic"), "").unwrap();
        fs::write(temp_dir.path().join("b.dic"), "").unwrap();

        let patterns = vec![
            temp_dir.path().join("*.dic"),
            temp_dir.path().join("dicts"),
            temp_dir.path().join("a.dic"),
        ];
        let resolved = resolve_patterns(&patterns).unwrap();
        assert_eq!(
            resolved,
            vec![
                temp_dir.path().join("a.dic"),
                temp_dir.path().join("b.dic"),
                temp_dir.path().join("dicts"),
            ]
        );
    }

    #[test]
    fn test_unmatched_pattern_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[temp_dir.path().join("missing.dic")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_malformed_pattern_fails() {
        let err = resolve_patterns(&["dicts/[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }
}
