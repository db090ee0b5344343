//! Input discovery: files, directories and glob patterns.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// File extensions recognized as shell scripts when walking directories.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["sh", "bash", "zsh"];

const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Expand inputs into a sorted, deduplicated list of script paths.
///
/// Plain files are taken as given whatever their extension. Directories are
/// walked recursively for supported extensions. Anything else is a glob.
pub fn expand_inputs(patterns: &[String], traverse_symlinks: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            walk_dir(path, traverse_symlinks, &mut files)?;
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(dir: &Path, traverse_symlinks: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            // Only symlinked files are followed, never directories.
            if traverse_symlinks && path.is_file() && has_supported_extension(&path) {
                files.push(path);
            } else {
                tracing::debug!(path = %path.display(), "skipping symlink");
            }
        } else if file_type.is_dir() {
            walk_dir(&path, traverse_symlinks, files)?;
        } else if file_type.is_file() && has_supported_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// True when the file starts with the ELF magic number.
pub fn is_elf_binary(path: &Path) -> std::io::Result<bool> {
    let mut magic = [0u8; 4];
    let mut file = File::open(path)?;
    let mut read = 0;
    while read < magic.len() {
        match file.read(&mut magic[read..])? {
            0 => return Ok(false),
            n => read += n,
        }
    }
    Ok(&magic == ELF_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_directories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lib/net");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("main.sh"), "").unwrap();
        fs::write(nested.join("http.bash"), "").unwrap();
        fs::write(nested.join("prompt.zsh"), "").unwrap();
        fs::write(nested.join("README.md"), "").unwrap();

        let files = expand_inputs(&[dir.path().display().to_string()], false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        // sorted by path: lib/net/* before main.sh
        assert_eq!(names, ["http.bash", "prompt.zsh", "main.sh"]);
    }

    #[test]
    fn explicit_files_and_globs_are_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("a.sh");
        fs::write(&script, "").unwrap();
        let pattern = format!("{}/*.sh", dir.path().display());
        let files = expand_inputs(&[script.display().to_string(), pattern], false).unwrap();
        assert_eq!(files, vec![script]);
    }

    #[test]
    fn unmatched_glob_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.sh", dir.path().display());
        assert!(expand_inputs(&[pattern], false).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_followed_only_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let target_dir = tempfile::tempdir().unwrap();
        let target = target_dir.path().join("real.sh");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.sh")).unwrap();

        let input = [dir.path().display().to_string()];
        assert!(expand_inputs(&input, false).unwrap().is_empty());
        assert_eq!(expand_inputs(&input, true).unwrap().len(), 1);
    }

    #[test]
    fn detects_elf_magic() {
        let dir = tempfile::tempdir().unwrap();
        let elf = dir.path().join("tool");
        fs::write(&elf, b"\x7fELF\x02\x01\x01").unwrap();
        let short = dir.path().join("short");
        fs::write(&short, b"#!").unwrap();
        assert!(is_elf_binary(&elf).unwrap());
        assert!(!is_elf_binary(&short).unwrap());
    }
}
