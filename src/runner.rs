//! Builds and executes the freestanding demo binaries.

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};

/// What a finished demo process left behind.
#[derive(Debug)]
pub struct Outcome {
    /// Everything the process put on standard output.
    pub stdout: Vec<u8>,
    /// The exit status, or `None` if the process died to a signal.
    pub exit_code: Option<i32>,
}

/// Builds the `demos` package and runs its binaries one at a time.
pub struct Runner {
    workspace: PathBuf,
    target_dir: PathBuf,
    timeout: Duration,
}

impl Runner {
    pub fn new(timeout: Duration) -> Self {
        let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let target_dir = std::env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace.join("target"));
        Runner {
            workspace,
            target_dir,
            timeout,
        }
    }

    /// Compile every demo binary (a no-op when they are up to date).
    pub fn build(&self) -> Result<()> {
        let cargo = std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"));
        info!("building demo binaries");
        let status = Command::new(cargo)
            .args(["build", "--package", "demos"])
            .current_dir(&self.workspace)
            .status()
            .context("failed to spawn cargo")?;
        if !status.success() {
            bail!("building the demos failed: {status}");
        }
        Ok(())
    }

    fn bin_path(&self, name: &str) -> PathBuf {
        self.target_dir.join("debug").join(name)
    }

    /// Run one demo binary, capturing its stdout and exit status.
    ///
    /// A demo that misses its terminate call would hang us forever, so a
    /// process still alive after the timeout is killed and reported as
    /// an error rather than an [`Outcome`].
    pub fn run(&self, name: &str) -> Result<Outcome> {
        let path = self.bin_path(name);
        debug!("running {}", path.display());
        let mut child = Command::new(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to run {}", path.display()))?;
        let start = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if start.elapsed() > self.timeout {
                warn!("{name} still alive after {:?}, killing it", self.timeout);
                child.kill()?;
                child.wait()?;
                bail!("{name} did not exit within {:?}", self.timeout);
            }
            std::thread::sleep(Duration::from_millis(10));
        };
        let mut stdout = Vec::new();
        child
            .stdout
            .take()
            .expect("stdout was piped")
            .read_to_end(&mut stdout)
            .context("failed to read captured stdout")?;
        Ok(Outcome {
            stdout,
            exit_code: status.code(),
        })
    }
}
