//! Corpus snapshot ingestion.
//!
//! The upstream dataset is consumed as a local JSONL snapshot, one entry per
//! line. How that snapshot is produced is outside this tool; entries carry
//! more fields upstream than the three consumed here, so unknown keys are
//! tolerated.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One raw corpus task awaiting curation, indexed by its line position.
#[derive(Clone, Debug, Deserialize)]
pub struct CorpusEntry {
    pub declaration: String,
    pub canonical_solution: String,
    pub test: String,
}

impl CorpusEntry {
    /// Declaration and solution joined the way the operator first sees them.
    pub fn combined_code(&self) -> String {
        format!("{}{}", self.declaration, self.canonical_solution)
    }

    /// True when any disallowed substring appears in the entry's code or
    /// tests, marking a dependency outside the standard library.
    pub fn uses_disallowed_dependency(&self, needles: &[&str]) -> bool {
        let code = self.combined_code();
        needles
            .iter()
            .any(|needle| code.contains(needle) || self.test.contains(needle))
    }
}

pub fn load(path: &Path) -> Result<Vec<CorpusEntry>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read corpus {}", path.display()))?;
    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let entry: CorpusEntry = serde_json::from_str(line)
            .with_context(|| format!("parse corpus entry on line {} of {}", idx + 1, path.display()))?;
        entries.push(entry);
    }
    tracing::debug!(count = entries.len(), corpus = %path.display(), "loaded corpus");
    Ok(entries)
}

#[cfg(test)]
pub(crate) fn sample_entry(marker: &str) -> CorpusEntry {
    CorpusEntry {
        declaration: format!("#include <vector>\nint {marker}(int x) "),
        canonical_solution: "{ return x + 1; }\n".to_string(),
        test: format!("int main() {{ assert({marker}(1) == 2); }}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEEDLES: &[&str] = &["boost/any.hpp", "openssl/md5.h"];

    #[test]
    fn filter_catches_disallowed_header_in_tests_only() {
        let mut entry = sample_entry("f");
        entry.test = "#include <openssl/md5.h>\nint main() {}\n".to_string();
        assert!(entry.uses_disallowed_dependency(NEEDLES));
    }

    #[test]
    fn filter_catches_disallowed_header_in_code() {
        let mut entry = sample_entry("f");
        entry.declaration = "#include <boost/any.hpp>\nint f(int x) ".to_string();
        assert!(entry.uses_disallowed_dependency(NEEDLES));
    }

    #[test]
    fn clean_entries_are_never_filtered() {
        assert!(!sample_entry("f").uses_disallowed_dependency(NEEDLES));
    }

    #[test]
    fn load_tolerates_extra_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("corpus.jsonl");
        std::fs::write(
            &path,
            "{\"declaration\":\"int f()\",\"canonical_solution\":\"{}\",\"test\":\"int main(){}\",\"task_id\":\"CPP/0\",\"entry_point\":\"f\"}\n",
        )
        .expect("write");
        let entries = load(&path).expect("load");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].declaration, "int f()");
    }
}
