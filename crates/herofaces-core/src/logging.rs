//! Logging init: file under XDG state dir teed to stdout, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Log file is rotated at startup once it grows past this size.
pub const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;
/// Number of rotated files kept (`herofaces.log.1` .. `herofaces.log.5`).
pub const LOG_BACKUPS: u32 = 5;

const DEFAULT_FILTER: &str = "info,herofaces=debug,herofaces_core=debug";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn backup_path(log_file: &Path, n: u32) -> PathBuf {
    let mut o = log_file.as_os_str().to_owned();
    o.push(format!(".{n}"));
    PathBuf::from(o)
}

/// Shifts `log.1..log.{backups-1}` up by one and moves `log` to `log.1`
/// when `log` is larger than `max_bytes`. The oldest backup is dropped.
pub fn rotate_if_needed(log_file: &Path, max_bytes: u64, backups: u32) -> io::Result<bool> {
    let len = match fs::metadata(log_file) {
        Ok(m) => m.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max_bytes || backups == 0 {
        return Ok(false);
    }

    let oldest = backup_path(log_file, backups);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for n in (1..backups).rev() {
        let from = backup_path(log_file, n);
        if from.exists() {
            fs::rename(&from, backup_path(log_file, n + 1))?;
        }
    }
    fs::rename(log_file, backup_path(log_file, 1))?;
    Ok(true)
}

/// Initialize structured logging to `~/.local/state/herofaces/herofaces.log`, also echoed to stdout.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("herofaces")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("herofaces.log");
    let rotated = rotate_if_needed(&log_file_path, MAX_LOG_BYTES, LOG_BACKUPS)?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file).and(io::stdout));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    if rotated {
        tracing::debug!("rotated previous log file");
    }
    tracing::info!("herofaces logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
