//! The persisted curated unit and its assembly from a finished workspace.

use crate::workspace::{Artifact, Workspace};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One curated benchmark task: three genericity-variant prompts and
/// solutions plus starter code, tests, and the invalids artifact.
///
/// Fields are declared in alphabetical order so serialized lines carry a
/// deterministic key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub base_canonical_solution: String,
    pub base_prompt: String,
    pub concepts_canonical_solution: String,
    pub concepts_prompt: String,
    pub invalids: String,
    pub sfinae_canonical_solution: String,
    pub sfinae_prompt: String,
    pub starter_code: String,
    pub task_id: String,
    pub tests: String,
}

impl Record {
    /// Read back every artifact's final content after the last accepted
    /// stage. No validation beyond the reads succeeding.
    pub fn from_workspace(task_id: String, workspace: &Workspace) -> Result<Self> {
        Ok(Self {
            base_canonical_solution: workspace.read(Artifact::Base)?,
            base_prompt: workspace.read(Artifact::BasePrompt)?,
            concepts_canonical_solution: workspace.read(Artifact::Concepts)?,
            concepts_prompt: workspace.read(Artifact::ConceptsPrompt)?,
            invalids: workspace.read(Artifact::Invalids)?,
            sfinae_canonical_solution: workspace.read(Artifact::Sfinae)?,
            sfinae_prompt: workspace.read(Artifact::SfinaePrompt)?,
            starter_code: workspace.read(Artifact::Starter)?,
            task_id,
            tests: workspace.read(Artifact::Tests)?,
        })
    }

    /// Seed a workspace with this record's nine artifacts for fix mode.
    pub fn seed_workspace(&self, workspace: &Workspace) -> Result<()> {
        workspace.write(Artifact::Base, &self.base_canonical_solution)?;
        workspace.write(Artifact::BasePrompt, &self.base_prompt)?;
        workspace.write(Artifact::Concepts, &self.concepts_canonical_solution)?;
        workspace.write(Artifact::ConceptsPrompt, &self.concepts_prompt)?;
        workspace.write(Artifact::Invalids, &self.invalids)?;
        workspace.write(Artifact::Sfinae, &self.sfinae_canonical_solution)?;
        workspace.write(Artifact::SfinaePrompt, &self.sfinae_prompt)?;
        workspace.write(Artifact::Starter, &self.starter_code)?;
        workspace.write(Artifact::Tests, &self.tests)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_record(task_id: &str) -> Record {
    Record {
        base_canonical_solution: "int add(int a, int b) { return a + b; }\n".to_string(),
        base_prompt: "Make the following function generic for numeric types".to_string(),
        concepts_canonical_solution: "template <typename T>\nT add(T a, T b);\n".to_string(),
        concepts_prompt: "Constrain the generic code using C++20 Concepts".to_string(),
        invalids: "int main() {}".to_string(),
        sfinae_canonical_solution: "template <typename T>\nT add(T a, T b);\n".to_string(),
        sfinae_prompt: "Constrain the generic code using C++17 SFINAE".to_string(),
        starter_code: "int add(int a, int b);\n".to_string(),
        task_id: task_id.to_string(),
        tests: "int main() { assert(add(1, 2) == 3); }\n".to_string(),
    }
}
