use crate::SolverSettings;
use anyhow::{Context, Result};
use std::{
    io::Write,
    path::Path,
    process::{Command, Stdio},
};
use tempfile::{Builder, TempPath};
use tracing::{debug, warn};

/// On-disk copy of the problem input, removed when dropped.
pub struct TempInput {
    path: TempPath,
}

impl TempInput {
    pub fn create<P: AsRef<Path>, C: AsRef<[u8]>>(dir: P, contents: C) -> Result<Self> {
        let dir = dir.as_ref();
        let mut file = Builder::new()
            .prefix("tmp")
            .suffix(".data")
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create input file in {}", dir.display()))?;
        file.write_all(contents.as_ref())?;
        file.flush()?;
        // the write handle is closed here, only the path guard remains
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn remove(self) -> Result<()> {
        let path = self.path.to_path_buf();
        self.path
            .close()
            .with_context(|| format!("Failed to remove input file: {}", path.display()))
    }
}

/// Input and output are passed through as raw bytes. Only ASCII whitespace
/// is trimmed from the output.
pub fn solve<I: AsRef<[u8]>>(settings: &SolverSettings, input: I) -> Result<Vec<u8>> {
    let input = input.as_ref();
    let input_file = TempInput::create(&settings.work_dir, input)?;
    debug!(
        path = %input_file.path().display(),
        solver = %settings.solver.display(),
        input_len = input.len(),
        "spawning solver"
    );

    let output = Command::new(&settings.solver)
        .arg(input_file.path())
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to launch solver {}", settings.solver.display()))?
        .wait_with_output()
        .context("Failed to wait on solver")?;

    input_file.remove()?;

    if !output.status.success() {
        warn!(status = %output.status, "solver exited unsuccessfully, using its output anyway");
    }
    debug!(status = %output.status, output_len = output.stdout.len(), "solver finished");

    Ok(output.stdout.trim_ascii().to_vec())
}
