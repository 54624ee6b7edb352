//! Detection of an existing library layout under an output directory.

use std::path::Path;

use super::scan::find_entry;

/// Keywords identifying the symbol folder.
pub const SYMBOL_KEYWORDS: &[&str] = &["symbol"];
/// Keywords identifying the footprint folder.
pub const FOOTPRINT_KEYWORDS: &[&str] = &["footprint"];
/// Keywords identifying the 3-D model folder inside the footprint folder.
pub const MODEL_KEYWORDS: &[&str] = &["3d", "model"];

/// Library sub-folders found in an output directory.
///
/// All values are folder names: `symbol_dir` and `footprint_dir` relative
/// to the output directory, `model_dir` relative to the footprint folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryLayout {
    pub symbol_dir: Option<String>,
    pub footprint_dir: Option<String>,
    pub model_dir: Option<String>,
}

impl LibraryLayout {
    /// Scan `output_dir` for symbol, footprint and model folders.
    pub fn detect(output_dir: &Path) -> Self {
        let symbol_dir = find_entry(output_dir, SYMBOL_KEYWORDS);
        let footprint_dir = find_entry(output_dir, FOOTPRINT_KEYWORDS);
        let model_dir = footprint_dir
            .as_deref()
            .and_then(|fp| find_entry(&output_dir.join(fp), MODEL_KEYWORDS));

        let layout = Self {
            symbol_dir,
            footprint_dir,
            model_dir,
        };
        tracing::debug!("Detected layout in {}: {:?}", output_dir.display(), layout);
        layout
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_dir.is_none() && self.footprint_dir.is_none() && self.model_dir.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn detects_full_layout() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Symbol")).unwrap();
        fs::create_dir_all(dir.path().join("footprint.pretty").join("packages3d")).unwrap();

        let layout = LibraryLayout::detect(dir.path());
        assert_eq!(layout.symbol_dir.as_deref(), Some("Symbol"));
        assert_eq!(layout.footprint_dir.as_deref(), Some("footprint.pretty"));
        assert_eq!(layout.model_dir.as_deref(), Some("packages3d"));
    }

    #[test]
    fn model_folder_only_searched_inside_footprint() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("3d_models")).unwrap();

        let layout = LibraryLayout::detect(dir.path());
        assert_eq!(layout.model_dir, None);
        assert_eq!(layout.footprint_dir, None);
    }

    #[test]
    fn empty_directory_has_empty_layout() {
        let dir = tempdir().unwrap();
        assert!(LibraryLayout::detect(dir.path()).is_empty());
    }
}
