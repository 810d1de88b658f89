//! Convert and fix orchestration over the corpus and the record store.

use crate::corpus::CorpusEntry;
use crate::normalize::Normalizer;
use crate::prompt::CommandSource;
use crate::record::Record;
use crate::stage::{StageController, StageOutcome};
use crate::store;
use crate::workspace::Workspace;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Substrings marking a dependency outside the standard library. Entries
/// containing any of them are filtered before a workspace is created.
pub const DISALLOWED_DEPENDENCIES: &[&str] = &["boost/any.hpp", "openssl/md5.h"];

/// Task ids are derived from the entry's stable corpus index. Uniqueness per
/// index is intended but not structurally enforced by the store.
pub const TASK_ID_PREFIX: &str = "HEP";

pub fn task_id_for_index(index: usize) -> String {
    format!("{TASK_ID_PREFIX}/{index}")
}

/// Curate corpus entries `[start, start+count)`, clamped to the corpus
/// length, appending one record per committed entry.
///
/// The output handle is held append-only for the whole session; every
/// committed record is flushed before the next entry starts, so an "exit"
/// later on never loses earlier work.
pub fn run_convert<W, S>(
    out: &mut W,
    corpus: &[CorpusEntry],
    start: usize,
    count: usize,
    normalizer: &Normalizer,
    disallowed: &[&str],
    controller: &mut StageController<S>,
) -> Result<()>
where
    W: Write,
    S: CommandSource,
{
    let end = corpus.len().min(start.saturating_add(count));
    for (idx, entry) in corpus.iter().enumerate().take(end).skip(start) {
        println!("========================== {idx} ==========================");
        if entry.uses_disallowed_dependency(disallowed) {
            println!("skipping index {idx} due to containing non-std headers");
            tracing::debug!(index = idx, "entry filtered by dependency list");
            continue;
        }

        let workspace = Workspace::create()?;
        let stripped = normalizer.strip_directives(&entry.combined_code());
        let starter_seed = normalizer.qualify_std_names(&stripped);

        match controller.run_convert(&workspace, &starter_seed, &entry.test)? {
            StageOutcome::Exited => return Ok(()),
            StageOutcome::Skipped => continue,
            StageOutcome::Committed => {
                let record = Record::from_workspace(task_id_for_index(idx), &workspace)?;
                store::append(out, &record)?;
                println!();
            }
        }
    }
    Ok(())
}

/// Rework one stored record in place, then rewrite the whole store.
///
/// A missing task id is reported and the store passes through unchanged;
/// "skip" and "exit" likewise leave the target record as it was.
pub fn run_fix<S: CommandSource>(
    store_path: &Path,
    task_id: &str,
    controller: &mut StageController<S>,
) -> Result<()> {
    let mut records = store::load(store_path)?;
    match records.iter().position(|record| record.task_id == task_id) {
        None => {
            eprintln!("no record with task id {task_id} in {}", store_path.display());
        }
        Some(position) => {
            let workspace = Workspace::create()?;
            match controller.run_fix(&workspace, &records[position])? {
                StageOutcome::Committed => {
                    records[position] = Record::from_workspace(task_id.to_string(), &workspace)?;
                }
                StageOutcome::Skipped | StageOutcome::Exited => {}
            }
        }
    }
    store::rewrite_all(store_path, &records)
}
