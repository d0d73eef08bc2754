//! Process execution utilities.

use jetkit_types::{JetkitError, Result};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;

/// Output of a finished child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status
    pub status: ExitStatus,
}

impl ProcessOutput {
    /// Check if the process exited 0.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Turn a non-zero exit into `JetkitError::Process`.
    pub fn into_result(self, command_line: &str) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }

        let output = if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        };

        Err(JetkitError::Process {
            command: command_line.to_string(),
            status: describe_status(&self.status),
            output,
        })
    }
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Render a command line for messages.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Locate `program` on `PATH` (or check it directly if it contains a separator).
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program)
        .map_err(|e| JetkitError::Config(format!("`{}` could not be found: {}", program, e)))
}

/// Run a command, forwarding its output to the terminal line by line.
///
/// Output is echoed as it arrives and also retained in the returned
/// `ProcessOutput`. Stdin is inherited so interactive prompts still work.
pub async fn run_streaming(
    program: &Path,
    args: &[String],
    cwd: &Path,
    env_vars: &[(String, String)],
) -> Result<ProcessOutput> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn()?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| JetkitError::Bug("child stdout was not piped".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| JetkitError::Bug("child stderr was not piped".to_string()))?;

    let (stdout, stderr, status) = tokio::join!(
        forward_lines(stdout, tokio::io::stdout()),
        forward_lines(stderr, tokio::io::stderr()),
        child.wait(),
    );

    Ok(ProcessOutput {
        stdout: stdout?,
        stderr: stderr?,
        status: status?,
    })
}

async fn forward_lines<R, W>(reader: R, mut sink: W) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut captured = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        sink.write_all(&line).await?;
        sink.flush().await?;
        captured.push_str(&String::from_utf8_lossy(&line));
    }

    Ok(captured)
}

/// Run a command and capture its output.
///
/// Either stream growing past `max_buffer` bytes is reported as a failure,
/// like an exceeded output buffer. Output is read as it arrives and the child
/// is killed as soon as a stream passes the limit.
pub async fn run_captured(
    program: &Path,
    args: &[String],
    cwd: &Path,
    max_buffer: usize,
) -> Result<ProcessOutput> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| JetkitError::Bug("child stdout was not piped".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| JetkitError::Bug("child stderr was not piped".to_string()))?;

    let stdout_read = read_capped(stdout, max_buffer);
    let stderr_read = read_capped(stderr, max_buffer);
    tokio::pin!(stdout_read, stderr_read);

    let mut stdout_done = None;
    let mut stderr_done = None;
    while stdout_done.is_none() || stderr_done.is_none() {
        let (name, captured) = tokio::select! {
            captured = &mut stdout_read, if stdout_done.is_none() => ("stdout", captured?),
            captured = &mut stderr_read, if stderr_done.is_none() => ("stderr", captured?),
        };

        let Some(bytes) = captured else {
            // The limit error wins over a failed kill; kill_on_drop still applies
            child.kill().await.ok();
            return Err(JetkitError::Process {
                command: command_line(&program.to_string_lossy(), args),
                status: format!("{} maxBuffer exceeded", name),
                output: format!("more than {} bytes written", max_buffer),
            });
        };

        if name == "stdout" {
            stdout_done = Some(bytes);
        } else {
            stderr_done = Some(bytes);
        }
    }

    let status = child.wait().await?;
    Ok(ProcessOutput {
        stdout: String::from_utf8_lossy(&stdout_done.unwrap_or_default()).to_string(),
        stderr: String::from_utf8_lossy(&stderr_done.unwrap_or_default()).to_string(),
        status,
    })
}

/// Read `reader` to the end; `None` once more than `max_buffer` bytes arrive.
async fn read_capped<R>(mut reader: R, max_buffer: usize) -> std::io::Result<Option<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Ok(Some(captured));
        }
        if captured.len() + n > max_buffer {
            return Ok(None);
        }
        captured.extend_from_slice(&chunk[..n]);
    }
}
