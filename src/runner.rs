// src/runner.rs
use crate::config::InterpreterConfig;
use crate::errors::{ExecError, Result};
use crate::models::{ExecutionResult, Submission};
use crate::normalize::{clean_code, outputs_match};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;
use tempfile::TempDir;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

const SOURCE_FILE_NAME: &str = "program.a";

/// Raw result of one interpreter run that finished before the deadline.
#[derive(Debug)]
struct ProcessOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

/// Run one submission end to end.
///
/// `Ok` covers both a clean run and an interpreter that exited non-zero.
/// `Err(ExecError::Timeout)` means the process was killed at the deadline;
/// any other error is an infrastructure failure.
pub async fn execute(config: &InterpreterConfig, submission: &Submission) -> Result<ExecutionResult> {
    let started = Instant::now();
    let workspace = prepare_workspace(&clean_code(&submission.code))?;
    let source = workspace.path().join(SOURCE_FILE_NAME);

    log::debug!("running {} {} {}", config.runtime, config.entrypoint.display(), source.display());

    // `workspace` outlives the interpreter on every path; dropping it removes
    // the source and whatever the emulator assembled next to it.
    let output = run_interpreter(config, workspace.path(), &source).await?;
    drop(workspace);

    let result = if output.status.success() {
        let actual = output.stdout.trim().to_string();
        let matched = outputs_match(&actual, &submission.expected_output);
        ExecutionResult::completed(actual, matched)
    } else {
        log::info!("interpreter exited with {}", output.status);
        ExecutionResult::interpreter_failure(output.stderr)
    };

    log::info!(
        "execution finished in {}ms (success={}, matched={})",
        started.elapsed().as_millis(),
        result.success,
        result.matched
    );

    Ok(result)
}

/// Creates a fresh `lcc-XXXX` directory in the system temp dir holding the
/// normalized code as `program.a`. The emulator writes `program.e`,
/// `program.lst` and friends beside it.
fn prepare_workspace(code: &str) -> Result<TempDir> {
    let dir = tempfile::Builder::new().prefix("lcc-").tempdir()?;
    let mut file = File::create(dir.path().join(SOURCE_FILE_NAME))?;
    file.write_all(code.as_bytes())?;
    file.flush()?;
    Ok(dir)
}

async fn run_interpreter(config: &InterpreterConfig, workdir: &Path, source: &Path) -> Result<ProcessOutput> {
    let mut child = Command::new(&config.runtime)
        .arg(&config.entrypoint)
        .arg(source)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("interpreter stdout was not captured"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("interpreter stderr was not captured"))?;

    let finished = tokio::time::timeout(config.timeout, async {
        tokio::try_join!(child.wait(), read_lossy(&mut stdout), read_lossy(&mut stderr))
    })
    .await;

    match finished {
        Ok(Ok((status, stdout, stderr))) => Ok(ProcessOutput { status, stdout, stderr }),
        Ok(Err(e)) => {
            reap(&mut child).await;
            Err(e.into())
        }
        Err(_) => {
            log::warn!("interpreter exceeded {:?}, killing pid {:?}", config.timeout, child.id());
            reap(&mut child).await;
            Err(ExecError::Timeout)
        }
    }
}

/// Kills and waits for the child. If that fails, `kill_on_drop` still sends
/// SIGKILL when `child` goes out of scope.
async fn reap(child: &mut Child) {
    if let Err(e) = child.kill().await {
        log::error!("failed to kill interpreter: {}", e);
    }
}

async fn read_lossy<R: AsyncRead + Unpin>(reader: &mut R) -> std::io::Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
