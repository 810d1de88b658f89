//! Per-entry staging workspace for in-progress curation artifacts.
//!
//! The workspace is an exclusively-owned temporary directory. Dropping it
//! removes every staged file, so abandonment, termination, and error paths
//! all release the workspace without explicit cleanup code.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The nine named artifact files a curated entry passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    BasePrompt,
    SfinaePrompt,
    ConceptsPrompt,
    Starter,
    Base,
    Sfinae,
    Concepts,
    Tests,
    Invalids,
}

impl Artifact {
    pub const ALL: [Artifact; 9] = [
        Artifact::BasePrompt,
        Artifact::SfinaePrompt,
        Artifact::ConceptsPrompt,
        Artifact::Starter,
        Artifact::Base,
        Artifact::Sfinae,
        Artifact::Concepts,
        Artifact::Tests,
        Artifact::Invalids,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::BasePrompt => "base_prompt.txt",
            Artifact::SfinaePrompt => "sfinae_prompt.txt",
            Artifact::ConceptsPrompt => "concepts_prompt.txt",
            Artifact::Starter => "starter.cpp",
            Artifact::Base => "base.cpp",
            Artifact::Sfinae => "sfinae.cpp",
            Artifact::Concepts => "concepts.cpp",
            Artifact::Tests => "tests.cpp",
            Artifact::Invalids => "invalids.cpp",
        }
    }

    /// Code artifacts are run through the formatter; prompt text is not.
    pub fn is_code(self) -> bool {
        self.file_name().ends_with(".cpp")
    }
}

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn create() -> Result<Self> {
        let dir = TempDir::new().context("create staging workspace")?;
        Ok(Self { dir })
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.dir.path().join(artifact.file_name())
    }

    pub fn write(&self, artifact: Artifact, content: &str) -> Result<()> {
        let path = self.path(artifact);
        fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn read(&self, artifact: Artifact) -> Result<String> {
        let path = self.path(artifact);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
