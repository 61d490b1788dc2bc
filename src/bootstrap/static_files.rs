// src/bootstrap/static_files.rs
// DOCUMENTATION: Static asset collection
// PURPOSE: Publish static assets from the source tree into the static root

use std::fs;
use std::io;
use std::path::Path;

/// Outcome of one collection run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectStats {
    /// Files written into the static root (existing files are overwritten)
    pub files_copied: u64,

    /// Directories created under the static root
    pub directories_created: u64,
}

/// Collect static assets from `source` into `root`
/// DOCUMENTATION: Idempotent - every run republishes the same output set,
/// overwriting files already present. A missing source directory is a warning
/// and an empty result, not an error, so containers without bundled assets
/// still boot.
pub fn collect(source: &Path, root: &Path) -> io::Result<CollectStats> {
    let mut stats = CollectStats::default();

    if !source.is_dir() {
        log::warn!(
            "Static source {} does not exist - nothing to collect",
            source.display()
        );
        return Ok(stats);
    }

    if !root.is_dir() {
        fs::create_dir_all(root)?;
        stats.directories_created += 1;
    }

    copy_tree(source, root, &mut stats)?;
    Ok(stats)
}

/// Recursively mirror `src` into `dst`, counting work done
fn copy_tree(src: &Path, dst: &Path, stats: &mut CollectStats) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if !target.is_dir() {
                fs::create_dir(&target)?;
                stats.directories_created += 1;
            }
            copy_tree(&entry.path(), &target, stats)?;
        } else {
            // fs::copy follows symlinks and truncates existing targets
            fs::copy(entry.path(), &target)?;
            stats.files_copied += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collect_copies_nested_tree() {
        let workspace = tempfile::tempdir().unwrap();
        let source = workspace.path().join("static");
        let root = workspace.path().join("staticfiles");

        write_file(&source.join("css/app.css"), "body {}");
        write_file(&source.join("js/app.js"), "console.log(1);");
        write_file(&source.join("robots.txt"), "User-agent: *");

        let stats = collect(&source, &root).unwrap();

        assert_eq!(stats.files_copied, 3);
        assert!(root.join("css/app.css").is_file());
        assert!(root.join("js/app.js").is_file());
        assert_eq!(
            fs::read_to_string(root.join("robots.txt")).unwrap(),
            "User-agent: *"
        );
    }

    #[test]
    fn test_collect_is_idempotent() {
        let workspace = tempfile::tempdir().unwrap();
        let source = workspace.path().join("static");
        let root = workspace.path().join("staticfiles");

        write_file(&source.join("css/app.css"), "body {}");

        let first = collect(&source, &root).unwrap();
        let second = collect(&source, &root).unwrap();

        // Second run republishes the same file set, creates nothing new
        assert_eq!(first.files_copied, second.files_copied);
        assert_eq!(second.directories_created, 0);
        assert_eq!(fs::read_to_string(root.join("css/app.css")).unwrap(), "body {}");
    }

    #[test]
    fn test_collect_overwrites_stale_output() {
        let workspace = tempfile::tempdir().unwrap();
        let source = workspace.path().join("static");
        let root = workspace.path().join("staticfiles");

        write_file(&source.join("app.css"), "old");
        collect(&source, &root).unwrap();

        write_file(&source.join("app.css"), "new");
        collect(&source, &root).unwrap();

        assert_eq!(fs::read_to_string(root.join("app.css")).unwrap(), "new");
    }

    #[test]
    fn test_collect_missing_source_is_a_noop() {
        let workspace = tempfile::tempdir().unwrap();
        let source = workspace.path().join("does-not-exist");
        let root = workspace.path().join("staticfiles");

        let stats = collect(&source, &root).unwrap();

        assert_eq!(stats, CollectStats::default());
        assert!(!root.exists());
    }
}
