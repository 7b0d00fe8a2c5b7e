//! Runs the upstream "renew data" script and streams its output into the log.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use crate::config::ScriptsConfig;

#[derive(Debug, thiserror::Error)]
pub enum RenewError {
    #[error("failed to start {script}: {source}")]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for {script}: {source}")]
    Wait {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub enum RenewOutcome {
    /// The script is not present; nothing was run.
    ScriptMissing,
    /// The script ran to completion with this status.
    Finished(ExitStatus),
}

/// Spawns `<interpreter> <renew_script>` inside the scripts directory.
///
/// Each stdout line is logged at info, each stderr line at warn. A missing
/// script is logged and reported as [`RenewOutcome::ScriptMissing`].
pub fn run_renew_script(cfg: &ScriptsConfig) -> Result<RenewOutcome, RenewError> {
    let script = cfg.dir.join(&cfg.renew_script);
    if !script.is_file() {
        tracing::error!("renew data script does not exist: {}", script.display());
        return Ok(RenewOutcome::ScriptMissing);
    }

    tracing::info!("Renewing data assets...");
    let mut child = Command::new(&cfg.interpreter)
        .arg(&cfg.renew_script)
        .current_dir(&cfg.dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| RenewError::Spawn {
            script: script.clone(),
            source,
        })?;

    // Drain stderr on its own thread so a chatty child cannot block on a full pipe.
    let stderr_drain = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                tracing::warn!("{}", line.trim());
            }
        })
    });

    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            tracing::info!("{}", line.trim());
        }
    }
    if let Some(handle) = stderr_drain {
        let _ = handle.join();
    }

    let status = child.wait().map_err(|source| RenewError::Wait {
        script: script.clone(),
        source,
    })?;
    if !status.success() {
        tracing::warn!("{} exited with {}", script.display(), status);
    }
    Ok(RenewOutcome::Finished(status))
}
