//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "casebook";
const APPLICATION: &str = "casebook";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/casebook` or `~/.cache/casebook`
/// - macOS: `~/Library/Caches/dev.casebook.casebook`
/// - Windows: `C:\Users\<User>\AppData\Local\casebook\casebook\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file for the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamped name and prune old archives.
///
/// Call at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

fn rotate_logs_in(dir: &Path, stamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
    }
    prune_old_logs(dir, MAX_OLD_LOGS);
}

/// Remove archived logs beyond the newest `keep`.
fn prune_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Archive names sort chronologically.
    logs.sort_by_key(|e| e.file_name());

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("casebook-paths-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch("rotate");
        fs::write(dir.join(LATEST_LOG), "previous run").unwrap();

        rotate_logs_in(&dir, "20261017_090000");

        assert!(!dir.join(LATEST_LOG).exists());
        let archived = fs::read_to_string(dir.join("20261017_090000.log")).unwrap();
        assert_eq!(archived, "previous run");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = scratch("prune");
        for day in 1..=5 {
            fs::write(dir.join(format!("2026100{}_000000.log", day)), "").unwrap();
        }
        fs::write(dir.join("notes.txt"), "").unwrap();

        prune_old_logs(&dir, 2);

        let mut left: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, vec!["20261004_000000.log", "20261005_000000.log", "notes.txt"]);
        let _ = fs::remove_dir_all(&dir);
    }
}
