use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Discover extractable files under an input path.
///
/// A file path is returned as-is (even with an unsupported extension, so
/// the registry can log the skip). A directory is walked recursively and
/// filtered to the extensions the extractors understand; results are
/// sorted so the assembled content, and therefore the compiled graph, is
/// deterministic.
pub fn discover_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        if !matches!(extension.as_str(), "md" | "txt") {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    log::info!("Discovered {} file(s) in {}", files.len(), input.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_directory_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("aulas")).unwrap();
        fs::write(root.join("b.txt"), "necrose").unwrap();
        fs::write(root.join("a.md"), "# hipóxia").unwrap();
        fs::write(root.join("aulas/c.txt"), "apoptose").unwrap();
        fs::write(root.join("scan.pdf"), b"%PDF").unwrap();

        let files = discover_files(root).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("a.md"));
        assert!(files[1].ends_with("aulas/c.txt"));
        assert!(files[2].ends_with("b.txt"));
    }

    #[test]
    fn test_discover_single_file_passthrough() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("laudo.pdf");
        fs::write(&path, b"%PDF").unwrap();

        // Unsupported extension still flows through; the registry decides
        let files = discover_files(&path).unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
