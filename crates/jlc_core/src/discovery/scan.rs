//! Directory listing helpers.

use std::fs;
use std::path::Path;

/// File suffix of KiCad symbol libraries.
pub const SYMBOL_LIB_SUFFIX: &str = ".kicad_sym";

/// Find the first sub-directory of `dir` whose name contains any of `keywords`.
///
/// Matching is case-insensitive and entries are visited in name order.
/// Returns the entry name, not its path. A missing or unreadable `dir`
/// yields `None`.
pub fn find_entry(dir: &Path, keywords: &[&str]) -> Option<String> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    sorted_entries(dir, |entry| entry.is_dir())
        .into_iter()
        .find(|name| {
            let lower = name.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
}

/// List symbol libraries in `dir` by file stem, sorted.
///
/// The `.kicad_sym` suffix is matched case-insensitively.
pub fn list_symbol_libraries(dir: &Path) -> Vec<String> {
    sorted_entries(dir, |entry| entry.is_file())
        .into_iter()
        .filter_map(|name| {
            let split = name.len().checked_sub(SYMBOL_LIB_SUFFIX.len())?;
            let (stem, suffix) = (name.get(..split)?, name.get(split..)?);
            if suffix.eq_ignore_ascii_case(SYMBOL_LIB_SUFFIX) && !stem.is_empty() {
                Some(stem.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Names of the entries in `dir` accepted by `keep`, sorted.
fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| keep(&entry.path()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn find_entry_matches_case_insensitive() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("My_SYMBOLS")).unwrap();

        assert_eq!(
            find_entry(dir.path(), &["symbol"]),
            Some("My_SYMBOLS".to_string())
        );
    }

    #[test]
    fn find_entry_ignores_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("symbol.txt"), "").unwrap();

        assert_eq!(find_entry(dir.path(), &["symbol"]), None);
    }

    #[test]
    fn find_entry_takes_first_by_name() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("b_models")).unwrap();
        fs::create_dir(dir.path().join("a_3d")).unwrap();

        assert_eq!(
            find_entry(dir.path(), &["3d", "model"]),
            Some("a_3d".to_string())
        );
    }

    #[test]
    fn find_entry_on_missing_dir_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(find_entry(&dir.path().join("nope"), &["symbol"]), None);
    }

    #[test]
    fn list_symbol_libraries_returns_sorted_stems() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Zeta.kicad_sym"), "").unwrap();
        fs::write(dir.path().join("alpha.KICAD_SYM"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join(".kicad_sym"), "").unwrap();

        assert_eq!(
            list_symbol_libraries(dir.path()),
            vec!["Zeta".to_string(), "alpha".to_string()]
        );
    }
}
