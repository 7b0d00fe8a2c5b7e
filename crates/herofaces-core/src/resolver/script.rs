//! Resolver backed by the upstream helper script (`scripts/utils.py`).
//!
//! The lookup protocol lives in that script's `obtaintrueurl`; this side only
//! passes a JSON array of filenames on stdin and reads a JSON array back.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{ResolveError, UrlResolver};
use crate::config::ScriptsConfig;

/// Calls `utils.obtaintrueurl` and prints its result as the last stdout line,
/// so chatter printed by the helper module is ignored.
const PROGRAM: &str = r#"
import json, sys
import utils
names = json.load(sys.stdin)
sys.stdout.write("\n" + json.dumps(utils.obtaintrueurl(names)) + "\n")
"#;

#[derive(Debug, Clone)]
pub struct ScriptResolver {
    interpreter: String,
    scripts_dir: PathBuf,
}

impl ScriptResolver {
    pub fn new(interpreter: impl Into<String>, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            scripts_dir: scripts_dir.into(),
        }
    }

    pub fn from_config(cfg: &ScriptsConfig) -> Self {
        Self::new(cfg.interpreter.clone(), cfg.dir.clone())
    }
}

impl UrlResolver for ScriptResolver {
    fn resolve(&self, wiki_filenames: &[String]) -> Result<Vec<Option<String>>, ResolveError> {
        if wiki_filenames.is_empty() {
            return Ok(Vec::new());
        }
        let input = serde_json::to_vec(wiki_filenames).map_err(ResolveError::Output)?;

        let mut child = Command::new(&self.interpreter)
            .arg("-c")
            .arg(PROGRAM)
            .current_dir(&self.scripts_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(ResolveError::Spawn)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&input).map_err(ResolveError::Spawn)?;
        }
        let output = child.wait_with_output().map_err(ResolveError::Spawn)?;

        if !output.status.success() {
            return Err(ResolveError::Script {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        parse_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses the last non-empty stdout line. Strings are URLs; `false`, `null`
/// and anything else are "not found".
pub(crate) fn parse_output(stdout: &str) -> Result<Vec<Option<String>>, ResolveError> {
    let line = stdout
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("");
    let values: Vec<serde_json::Value> =
        serde_json::from_str(line.trim()).map_err(ResolveError::Output)?;
    Ok(values
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}
