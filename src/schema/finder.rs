use std::path::{Path, PathBuf};

/// Well-known schema file names, probed in order. First hit wins.
pub const DEFAULT_SCHEMA_FILES: &[&str] =
    &["schemasset.json", "schemasset.yaml", "schemasset.yml"];

/// Locate a schema file in `dir` by its well-known names.
#[must_use]
pub fn find_schema_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_SCHEMA_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
