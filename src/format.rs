//! External clang-format invocation.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const STYLE_PROFILE: &str = "Google";

/// Wrapper around the external formatter binary. Only success or failure of
/// the call is consumed; output is left on the file in place.
pub struct Formatter {
    program: PathBuf,
    style: String,
}

impl Formatter {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            style: STYLE_PROFILE.to_string(),
        }
    }

    /// Resolve `clang-format` from PATH.
    pub fn locate() -> Result<Self> {
        let program = which::which("clang-format").context("locate clang-format in PATH")?;
        Ok(Self::new(program))
    }

    /// Format one file in place. A non-zero exit is fatal for the run.
    pub fn format_in_place(&self, path: &Path) -> Result<()> {
        tracing::debug!(file = %path.display(), "running formatter");
        let status = Command::new(&self.program)
            .arg("-i")
            .arg(format!("-style={}", self.style))
            .arg(path)
            .status()
            .with_context(|| format!("run {}", self.program.display()))?;
        if !status.success() {
            return Err(anyhow!(
                "formatter failed on {} (exit={:?})",
                path.display(),
                status.code()
            ));
        }
        Ok(())
    }
}
