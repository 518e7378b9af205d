use std::time::Duration;

use tokio::process::Command;
use tokio::runtime::Runtime;

use crate::shared::error::ScanError;
use crate::shared::Result;

/// Captured output of a finished external tool invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Stdout followed by stderr. Version banners often land on stderr, so
    /// probing reads both streams as one.
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        combined.push_str(&self.stderr);
        combined
    }
}

/// Runs external tools with a hard timeout.
///
/// Owns a current-thread runtime so timed-out children are killed rather
/// than orphaned; callers stay fully synchronous.
pub struct CommandRunner {
    runtime: Runtime,
}

impl CommandRunner {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ScanError::CommandFailed {
                tool: "tokio".to_string(),
                command: "runtime setup".to_string(),
                details: e.to_string(),
            })?;
        Ok(Self { runtime })
    }

    /// Runs `program` with `args`, waiting at most `limit`.
    ///
    /// A non-zero exit is not an error here; callers decide what an exit
    /// code means (some scanners exit non-zero on findings). Spawn failures
    /// and timeouts are errors.
    pub fn run(&self, program: &str, args: &[&str], limit: Duration) -> Result<CommandOutput> {
        let rendered = display_command(program, args);
        tracing::debug!(command = %rendered, "running external tool");

        let outcome = self.runtime.block_on(async {
            let mut command = Command::new(program);
            command.args(args).kill_on_drop(true);
            tokio::time::timeout(limit, command.output()).await
        });

        match outcome {
            Err(_) => Err(ScanError::CommandTimeout {
                command: rendered,
                seconds: limit.as_secs(),
            }
            .into()),
            Ok(Err(e)) => Err(ScanError::CommandFailed {
                tool: program.to_string(),
                command: rendered,
                details: e.to_string(),
            }
            .into()),
            Ok(Ok(output)) => Ok(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            }),
        }
    }

    /// Like [`run`](Self::run) but treats a non-zero exit as a failure,
    /// carrying the tool's combined output in the error details.
    pub fn run_checked(
        &self,
        program: &str,
        args: &[&str],
        limit: Duration,
    ) -> Result<CommandOutput> {
        let output = self.run(program, args, limit)?;
        if !output.succeeded() {
            return Err(ScanError::CommandFailed {
                tool: program.to_string(),
                command: display_command(program, args),
                details: format!("exit code {}\n{}", output.exit_code, output.combined()),
            }
            .into());
        }
        Ok(output)
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    let mut display = program.to_string();
    for arg in args {
        display.push(' ');
        display.push_str(arg);
    }
    display
}
