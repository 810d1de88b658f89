//! The staged edit/confirm workflow driving one entry through curation.
//!
//! Convert mode runs three stages in fixed order: fix up the starter code,
//! derive the base task from the accepted starter, then derive the SFINAE and
//! Concepts variants plus tests from the accepted base. Each stage seeds its
//! artifacts from the stage before it, so operator edits compound. Fix mode
//! exposes all nine artifacts of an existing record in one combined stage.

use crate::format::Formatter;
use crate::prompt::{Command, CommandSource};
use crate::record::Record;
use crate::workspace::{Artifact, Workspace};
use anyhow::Result;
use clap::ValueEnum;

pub const BASE_PROMPT_PREFIX: &str = "Make the following function generic for ";
pub const SFINAE_PROMPT_PREFIX: &str = "Constrain the generic code using C++17 SFINAE so that ";
pub const CONCEPTS_PROMPT_PREFIX: &str = "Constrain the generic code using C++20 Concepts so that ";

/// Placeholder seeded into the invalids artifact.
pub const EMPTY_MAIN: &str = "int main() {}";

/// When the formatter runs relative to the operator's edit window. The two
/// variants preserve the two historical orderings of the curation scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatPlan {
    /// Format code artifacts when they are seeded and again on accept.
    SeedAndAccept,
    /// Format code artifacts only after the operator accepts the stage.
    AcceptOnly,
}

impl FormatPlan {
    fn on_seed(self) -> bool {
        matches!(self, FormatPlan::SeedAndAccept)
    }
}

/// How a stage run over one entry ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// Every stage was accepted; the workspace holds the final artifacts.
    Committed,
    /// The operator abandoned this entry.
    Skipped,
    /// The operator ended the whole session.
    Exited,
}

pub struct StageController<S: CommandSource> {
    commands: S,
    formatter: Option<Formatter>,
    plan: FormatPlan,
}

impl<S: CommandSource> StageController<S> {
    pub fn new(commands: S, formatter: Option<Formatter>, plan: FormatPlan) -> Self {
        Self {
            commands,
            formatter,
            plan,
        }
    }

    /// Run the three convert stages over a fresh workspace.
    ///
    /// `starter_seed` is the normalized corpus code; `test_text` is the raw
    /// corpus test source.
    pub fn run_convert(
        &mut self,
        workspace: &Workspace,
        starter_seed: &str,
        test_text: &str,
    ) -> Result<StageOutcome> {
        workspace.write(Artifact::Starter, starter_seed)?;
        let outcome = self.run_stage(
            workspace,
            &[Artifact::Starter],
            &[("Please fix up starter code", Artifact::Starter)],
        )?;
        if outcome != StageOutcome::Committed {
            return Ok(outcome);
        }

        // Base seeds from the accepted starter, not from the raw source.
        let starter_code = workspace.read(Artifact::Starter)?;
        workspace.write(Artifact::Base, &starter_code)?;
        workspace.write(Artifact::BasePrompt, BASE_PROMPT_PREFIX)?;
        let outcome = self.run_stage(
            workspace,
            &[Artifact::Base],
            &[
                ("Please edit base code", Artifact::Base),
                ("Please edit base prompt", Artifact::BasePrompt),
            ],
        )?;
        if outcome != StageOutcome::Committed {
            return Ok(outcome);
        }

        let base_code = workspace.read(Artifact::Base)?;
        workspace.write(Artifact::Sfinae, &base_code)?;
        workspace.write(Artifact::Concepts, &base_code)?;
        workspace.write(Artifact::SfinaePrompt, SFINAE_PROMPT_PREFIX)?;
        workspace.write(Artifact::ConceptsPrompt, CONCEPTS_PROMPT_PREFIX)?;
        workspace.write(Artifact::Tests, test_text)?;
        workspace.write(Artifact::Invalids, EMPTY_MAIN)?;
        self.run_stage(
            workspace,
            &[
                Artifact::Sfinae,
                Artifact::Concepts,
                Artifact::Tests,
                Artifact::Invalids,
            ],
            &[
                ("Please edit sfinae code", Artifact::Sfinae),
                ("Please edit sfinae prompt", Artifact::SfinaePrompt),
                ("Please edit concepts code", Artifact::Concepts),
                ("Please edit concepts prompt", Artifact::ConceptsPrompt),
                ("Please edit tests code", Artifact::Tests),
                ("Please edit invalids prompt", Artifact::Invalids),
            ],
        )
    }

    /// Run the single combined fix stage over an existing record.
    pub fn run_fix(&mut self, workspace: &Workspace, record: &Record) -> Result<StageOutcome> {
        record.seed_workspace(workspace)?;
        let code: Vec<Artifact> = Artifact::ALL.into_iter().filter(|a| a.is_code()).collect();
        self.run_stage(
            workspace,
            &code,
            &[
                ("Please edit starter code", Artifact::Starter),
                ("Please edit base code", Artifact::Base),
                ("Please edit base prompt", Artifact::BasePrompt),
                ("Please edit sfinae code", Artifact::Sfinae),
                ("Please edit sfinae prompt", Artifact::SfinaePrompt),
                ("Please edit concepts code", Artifact::Concepts),
                ("Please edit concepts prompt", Artifact::ConceptsPrompt),
                ("Please edit tests code", Artifact::Tests),
                ("Please edit invalids prompt", Artifact::Invalids),
            ],
        )
    }

    /// One stage: optional format-on-seed, edit guidance, blocking prompt,
    /// optional format-on-accept. The caller re-reads artifacts afterwards so
    /// manual edits are picked up.
    fn run_stage(
        &mut self,
        workspace: &Workspace,
        code_artifacts: &[Artifact],
        guidance: &[(&str, Artifact)],
    ) -> Result<StageOutcome> {
        if self.plan.on_seed() {
            self.format_all(workspace, code_artifacts)?;
        }
        for (label, artifact) in guidance {
            println!("{label}: {}", workspace.path(*artifact).display());
        }
        match self.commands.next_command()? {
            Command::Exit => return Ok(StageOutcome::Exited),
            Command::Skip => return Ok(StageOutcome::Skipped),
            Command::Continue => {}
        }
        self.format_all(workspace, code_artifacts)?;
        Ok(StageOutcome::Committed)
    }

    fn format_all(&self, workspace: &Workspace, artifacts: &[Artifact]) -> Result<()> {
        let Some(formatter) = &self.formatter else {
            return Ok(());
        };
        for artifact in artifacts {
            formatter.format_in_place(&workspace.path(*artifact))?;
        }
        Ok(())
    }
}
