use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to start {}: {source}", .path.display())]
    Spawn { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("process did not finish within {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `path` with positional `args` and captures both output streams.
///
/// The process gets `timeout` of wall-clock time. When it runs over, it is
/// killed and reaped before [`ExecutionError::TimedOut`] is returned, and
/// whatever it printed so far is discarded.
pub async fn run_external(
    path: &Path,
    args: &[String],
    timeout: Duration,
) -> Result<CapturedOutput, ExecutionError> {
    let mut child = Command::new(path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ExecutionError::Spawn {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Started {} (pid {:?}) with {} argument(s)",
        path.display(),
        child.id(),
        args.len()
    );

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let finished = tokio::time::timeout(timeout, async {
        tokio::try_join!(child.wait(), read_stream(stdout), read_stream(stderr))
    })
    .await;

    match finished {
        Ok(result) => {
            let (status, stdout, stderr) = result?;
            Ok(CapturedOutput {
                status,
                stdout,
                stderr,
            })
        }
        Err(_) => {
            log::warn!(
                "{} did not finish within {:?}, killing it",
                path.display(),
                timeout
            );
            if let Err(err) = child.kill().await {
                log::error!("Failed to kill {}: {}", path.display(), err);
            }
            Err(ExecutionError::TimedOut(timeout))
        }
    }
}

async fn read_stream<R>(stream: Option<R>) -> io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buffer).await?;
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
