//! Report output model for headless diagnostics runs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless diagnostics run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless diagnostics run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub steps_executed: usize,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
}

impl HeadlessReport {
    pub fn passed(steps_executed: usize, elapsed_frames: u64, elapsed_ms: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            steps_executed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            steps_executed: failed_step_index,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    /// One-line human rendering for CLI output
    pub fn summary(&self) -> String {
        match self.status {
            ReportStatus::Passed => format!(
                "passed: {} steps in {} frames ({} ms)",
                self.steps_executed, self.elapsed_frames, self.elapsed_ms
            ),
            ReportStatus::Failed => format!(
                "failed at step {} ({}): {}",
                self.failed_step_index.unwrap_or(0),
                self.assertion.as_deref().unwrap_or("unknown"),
                self.message.as_deref().unwrap_or("no message")
            ),
        }
    }

    /// Write the report as pretty JSON to a workspace-relative path
    ///
    /// Absolute paths, parent traversal, and drive prefixes are rejected
    /// so a scenario file cannot direct output outside the working tree.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
