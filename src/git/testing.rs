//! Scripted command runner for unit tests

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::runner::CommandRunner;

/// Replays canned git responses and records every invocation
///
/// Responses are keyed by the joined argument list, optionally scoped to the
/// working directory's base name. Unscripted commands fail.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    responses: HashMap<String, (bool, String)>,
    scoped: HashMap<(String, String), (bool, String)>,
    panics_in: HashSet<String>,
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, args: &[&str], success: bool, output: &str) -> Self {
        self.responses
            .insert(args.join(" "), (success, output.to_string()));
        self
    }

    pub(crate) fn respond_in(
        mut self,
        dir_name: &str,
        args: &[&str],
        success: bool,
        output: &str,
    ) -> Self {
        self.scoped.insert(
            (dir_name.to_string(), args.join(" ")),
            (success, output.to_string()),
        );
        self
    }

    /// Makes every command issued in `dir_name` panic
    pub(crate) fn panic_in(mut self, dir_name: &str) -> Self {
        self.panics_in.insert(dir_name.to_string());
        self
    }

    /// Every invocation so far, as space-joined argument strings
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    /// Number of invocations whose arguments start with `prefix`
    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|args| args.starts_with(prefix))
            .count()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, working_dir: &Path, args: &[&str]) -> (bool, String) {
        let key = args.join(" ");
        let dir_name = working_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.calls
            .lock()
            .unwrap()
            .push((working_dir.to_path_buf(), key.clone()));

        if self.panics_in.contains(&dir_name) {
            panic!("simulated crash in {dir_name}");
        }

        self.scoped
            .get(&(dir_name, key.clone()))
            .or_else(|| self.responses.get(&key))
            .cloned()
            .unwrap_or_else(|| (false, format!("unscripted: {key}")))
    }
}
