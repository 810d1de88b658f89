//! JSONL persistence for the record store.
//!
//! Append is the durability checkpoint: each committed record is written and
//! flushed as one line before the next entry starts. Modifications always
//! rewrite the whole file.

use crate::record::Record;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Open the store for a convert session. The handle is held append-only for
/// the whole run so earlier records are never touched.
pub fn open_for_append(path: &Path) -> Result<fs::File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {} for append", path.display()))
}

/// Serialize one record as a single line and flush it immediately.
pub fn append<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    let line = serde_json::to_string(record)
        .with_context(|| format!("serialize record {}", record.task_id))?;
    writeln!(out, "{line}").context("write record line")?;
    out.flush().context("flush record line")?;
    Ok(())
}

/// Load the whole store in order. A malformed line is fatal.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read store {}", path.display()))?;
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(line)
            .with_context(|| format!("parse record on line {} of {}", idx + 1, path.display()))?;
        records.push(record);
    }
    tracing::debug!(count = records.len(), store = %path.display(), "loaded store");
    Ok(records)
}

/// Truncate and rewrite the whole store in order.
///
/// There is no atomic swap; a crash mid-rewrite can leave a truncated store.
pub fn rewrite_all(path: &Path, records: &[Record]) -> Result<()> {
    let mut file =
        fs::File::create(path).with_context(|| format!("truncate store {}", path.display()))?;
    for record in records {
        let line = serde_json::to_string(record)
            .with_context(|| format!("serialize record {}", record.task_id))?;
        writeln!(file, "{line}")
            .with_context(|| format!("rewrite store {}", path.display()))?;
    }
    file.flush()
        .with_context(|| format!("flush store {}", path.display()))?;
    tracing::debug!(count = records.len(), store = %path.display(), "rewrote store");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_record;

    #[test]
    fn append_emits_one_flushed_line_per_record() {
        let mut out = Vec::new();
        append(&mut out, &sample_record("HEP/0")).expect("append");
        append(&mut out, &sample_record("HEP/1")).expect("append");
        let text = String::from_utf8(out).expect("utf-8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"task_id\":\"HEP/0\""));
        assert!(lines[1].contains("\"task_id\":\"HEP/1\""));
    }

    #[test]
    fn load_preserves_record_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.jsonl");
        let records = vec![
            sample_record("HEP/2"),
            sample_record("HEP/0"),
            sample_record("HEP/5"),
        ];
        rewrite_all(&path, &records).expect("rewrite");
        let loaded = load(&path).expect("load");
        assert_eq!(loaded, records);
    }

    #[test]
    fn load_rejects_malformed_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.jsonl");
        std::fs::write(&path, "{\"task_id\": \"HEP/0\"\n").expect("write");
        let err = load(&path).expect_err("malformed line must fail");
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn rewrite_replaces_previous_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.jsonl");
        rewrite_all(&path, &[sample_record("HEP/0"), sample_record("HEP/1")]).expect("rewrite");
        rewrite_all(&path, &[sample_record("HEP/9")]).expect("rewrite");
        let loaded = load(&path).expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].task_id, "HEP/9");
    }

    #[test]
    fn append_then_load_round_trips_through_a_session_handle() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.jsonl");
        {
            let mut file = open_for_append(&path).expect("open");
            append(&mut file, &sample_record("HEP/0")).expect("append");
        }
        {
            let mut file = open_for_append(&path).expect("reopen");
            append(&mut file, &sample_record("HEP/1")).expect("append");
        }
        let loaded = load(&path).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].task_id, "HEP/0");
        assert_eq!(loaded[1].task_id, "HEP/1");
    }
}
