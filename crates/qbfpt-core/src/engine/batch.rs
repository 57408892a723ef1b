//! Sequential batch engine: one external-tool invocation per benchmark
//! instance, stdout captured to `results/<mode>/<instance>`.
//!
//! Commands are built as structured argv lists, never as shell strings.
//! Invocations are strictly sequential: each child must exit before the
//! next one starts. A failing invocation is recorded and logged but never
//! aborts the batch; the caller decides what the overall failure means.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

/// The benchmark instance set, in invocation order.
pub const DEFAULT_INSTANCES: [&str; 7] = ["020", "040", "060", "080", "100", "200", "400"];

/// Everything needed to drive one batch: which tool to run, how to launch
/// it, and where outputs land.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    /// Solver variant name; selects the tool and the results subdirectory.
    pub mode: String,
    /// Argv prefix placed before the tool path, e.g. `["java", "-jar"]`.
    pub launcher: Vec<String>,
    /// Tool handed to the launcher; defaults to `<mode>.jar`.
    pub tool: PathBuf,
    /// Root of the results tree; outputs land in `<results_dir>/<mode>/`.
    pub results_dir: PathBuf,
    /// Instance identifiers, invoked in this order.
    pub instances: Vec<String>,
}

impl BatchPlan {
    /// The defaults mirror the original pipeline: `java -jar <mode>.jar
    /// <instance>` with stdout sent to `results/<mode>/<instance>`.
    pub fn for_mode(mode: &str) -> Self {
        Self {
            mode: mode.to_string(),
            launcher: vec!["java".into(), "-jar".into()],
            tool: PathBuf::from(format!("{mode}.jar")),
            results_dir: PathBuf::from("results"),
            instances: DEFAULT_INSTANCES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Output file for one instance: `<results_dir>/<mode>/<instance>`,
    /// no extension.
    pub fn output_path(&self, instance: &str) -> PathBuf {
        self.results_dir.join(&self.mode).join(instance)
    }

    /// Structured command for one instance: launcher argv, tool, instance.
    ///
    /// Panics if the launcher is empty; [`run`] rejects such plans up front.
    pub fn command(&self, instance: &str) -> Command {
        let mut cmd = Command::new(&self.launcher[0]);
        cmd.args(&self.launcher[1..]);
        cmd.arg(&self.tool);
        cmd.arg(instance);
        cmd
    }

    /// Human-readable rendering of the command line, for logs and reports.
    pub fn rendered_command(&self, instance: &str) -> String {
        let mut parts = self.launcher.clone();
        parts.push(self.tool.display().to_string());
        parts.push(instance.to_string());
        parts.join(" ")
    }
}

/// Record of a single invocation.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationReport {
    pub instance: String,
    pub command: String,
    pub output: PathBuf,
    /// Exit code; `None` when the child was killed by a signal or could
    /// not be spawned at all.
    pub exit_code: Option<i32>,
    pub success: bool,
    pub duration_ms: u64,
    /// Set when the invocation could not even start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Record of a whole batch, serialized to JSON on request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub mode: String,
    pub started_at: DateTime<Utc>,
    pub invocations: Vec<InvocationReport>,
    pub any_failed: bool,
}

impl BatchReport {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating batch report {}", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .with_context(|| format!("writing batch report {}", path.display()))?;
        Ok(())
    }
}

/// Runs the batch: one blocking invocation per instance, in order.
pub fn run(plan: &BatchPlan) -> Result<BatchReport> {
    anyhow::ensure!(!plan.launcher.is_empty(), "launcher cannot be empty");
    anyhow::ensure!(!plan.mode.is_empty(), "mode cannot be empty");

    let out_dir = plan.results_dir.join(&plan.mode);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating results directory {}", out_dir.display()))?;

    let started_at = Utc::now();
    let mut invocations = Vec::with_capacity(plan.instances.len());
    let mut any_failed = false;

    for instance in &plan.instances {
        let row = invoke_one(plan, instance);
        if !row.success {
            any_failed = true;
            tracing::warn!(
                instance = %row.instance,
                exit_code = ?row.exit_code,
                error = ?row.error,
                "invocation failed; continuing with remaining instances"
            );
        }
        invocations.push(row);
    }

    Ok(BatchReport {
        mode: plan.mode.clone(),
        started_at,
        invocations,
        any_failed,
    })
}

/// Spawns one invocation with stdout redirected to the instance's output
/// file and blocks until it exits. Spawn failures become failed rows, not
/// errors: the batch must keep going.
fn invoke_one(plan: &BatchPlan, instance: &str) -> InvocationReport {
    let output = plan.output_path(instance);
    let command = plan.rendered_command(instance);
    tracing::info!(instance = %instance, command = %command, "invoking tool");

    let started = Instant::now();
    let outcome: Result<ExitStatus> = (|| {
        let file = File::create(&output)
            .with_context(|| format!("creating output file {}", output.display()))?;
        let status = plan
            .command(instance)
            .stdout(Stdio::from(file))
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("spawning `{command}`"))?;
        Ok(status)
    })();
    let duration_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(status) => InvocationReport {
            instance: instance.to_string(),
            command,
            output,
            exit_code: status.code(),
            success: status.success(),
            duration_ms,
            error: None,
        },
        Err(e) => InvocationReport {
            instance: instance.to_string(),
            command,
            output,
            exit_code: None,
            success: false,
            duration_ms,
            error: Some(format!("{e:#}")),
        },
    }
}
