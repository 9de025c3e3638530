//! Test doubles for the bootstrap collaborators
//!
//! `FakeRunner` simulates just enough of git and npm for the bootstrap steps:
//! `git init` creates `.git`, `npm init -y` creates `package.json`, and
//! `git remote add`/`get-url` share an in-memory remote table.

#![allow(dead_code)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use gitinit_core::types::{
    CommandOutput, CommandSpec, LogLevel, Prompt, PromptAnswer, RemoteRepositoryDescriptor,
    RepositoryCatalog,
};
use gitinit_core::{
    CommandRunner, Error, InteractionPrompter, RemoteRepoClient, Reporter, Result,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tempfile::TempDir;

pub fn temp_workdir(name: &str) -> (Utf8PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8Path::from_path(temp_dir.path()).unwrap();
    let workdir = root.join(name);
    std::fs::create_dir_all(&workdir).unwrap();
    (workdir, temp_dir)
}

pub fn descriptor(name: &str) -> RemoteRepositoryDescriptor {
    RemoteRepositoryDescriptor::named(name)
        .with_ssh_url(format!("git@github.com:me/{}.git", name))
        .with_html_url(format!("https://github.com/me/{}", name))
}

pub fn catalog(names: &[&str]) -> RepositoryCatalog {
    names.iter().map(|name| descriptor(name)).collect()
}

// ── Command runner ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<String>>,
    remotes: Mutex<HashMap<String, String>>,
    overrides: Mutex<HashMap<String, CommandOutput>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` (its display form) with `output` instead of simulating it
    pub fn respond(&self, command: &str, output: CommandOutput) {
        self.overrides
            .lock()
            .unwrap()
            .insert(command.to_string(), output);
    }

    pub fn with_remote(self, name: &str, url: &str) -> Self {
        self.remotes
            .lock()
            .unwrap()
            .insert(name.to_string(), url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that change state, i.e. everything except `git remote get-url`
    pub fn mutating_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| !call.starts_with("git remote get-url"))
            .collect()
    }

    pub fn ran(&self, prefix: &str) -> bool {
        self.calls().iter().any(|call| call.starts_with(prefix))
    }

    fn simulate(&self, cwd: &Utf8Path, command: &CommandSpec) -> CommandOutput {
        let args: Vec<&str> = command.args.iter().map(String::as_str).collect();
        match (command.program.as_str(), args.as_slice()) {
            ("git", ["init", ..]) => {
                std::fs::create_dir_all(cwd.join(".git")).unwrap();
                CommandOutput::ok(format!("Initialized empty Git repository in {}/.git/\n", cwd))
            }
            ("npm", ["init", ..]) => {
                std::fs::write(cwd.join("package.json"), "{}\n").unwrap();
                CommandOutput::ok(format!("Wrote to {}/package.json:\n", cwd))
            }
            ("git", ["remote", "get-url", name]) => {
                match self.remotes.lock().unwrap().get(*name) {
                    Some(url) => CommandOutput::ok(format!("{}\n", url)),
                    None => CommandOutput::failed(2, format!("error: No such remote '{}'\n", name)),
                }
            }
            ("git", ["remote", "add", name, url]) => {
                let mut remotes = self.remotes.lock().unwrap();
                if remotes.contains_key(*name) {
                    CommandOutput::failed(3, format!("error: remote {} already exists.\n", name))
                } else {
                    remotes.insert(name.to_string(), url.to_string());
                    CommandOutput::ok("")
                }
            }
            ("git", ["commit", ..]) => {
                CommandOutput::ok("[main (root-commit) 1a2b3c4] Initial commit\n")
            }
            _ => CommandOutput::ok(""),
        }
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, cwd: &Utf8Path, command: &CommandSpec) -> Result<CommandOutput> {
        let rendered = command.to_string();
        self.calls.lock().unwrap().push(rendered.clone());

        if let Some(output) = self.overrides.lock().unwrap().get(&rendered) {
            return Ok(output.clone());
        }
        Ok(self.simulate(cwd, command))
    }
}

// ── Remote client ──────────────────────────────────────────────────────────

/// Serves catalogs in order; the last one repeats once the queue runs dry
pub struct FakeRemote {
    catalogs: Mutex<VecDeque<RepositoryCatalog>>,
    last: Mutex<RepositoryCatalog>,
    list_calls: Mutex<usize>,
    created: Mutex<Vec<String>>,
    fail_list: bool,
    create_without_ssh: bool,
    created_name: Option<String>,
}

impl FakeRemote {
    pub fn with_catalog(catalog: RepositoryCatalog) -> Self {
        Self::with_catalogs(vec![catalog])
    }

    pub fn with_catalogs(catalogs: Vec<RepositoryCatalog>) -> Self {
        Self {
            catalogs: Mutex::new(catalogs.into()),
            last: Mutex::new(RepositoryCatalog::default()),
            list_calls: Mutex::new(0),
            created: Mutex::new(Vec::new()),
            fail_list: false,
            create_without_ssh: false,
            created_name: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_list: true,
            ..Self::with_catalogs(Vec::new())
        }
    }

    /// Created repositories come back without an ssh URL
    pub fn without_ssh_url(mut self) -> Self {
        self.create_without_ssh = true;
        self
    }

    /// Created repositories come back under `name` whatever was requested
    pub fn creating_as(mut self, name: &str) -> Self {
        self.created_name = Some(name.to_string());
        self
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// Total number of network calls made
    pub fn network_calls(&self) -> usize {
        self.list_calls() + self.created().len()
    }
}

#[async_trait]
impl RemoteRepoClient for FakeRemote {
    async fn list_repositories(&self) -> Result<RepositoryCatalog> {
        *self.list_calls.lock().unwrap() += 1;
        if self.fail_list {
            return Err(Error::network("connection refused"));
        }

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.catalogs.lock().unwrap().pop_front() {
            *last = next;
        }
        Ok(last.clone())
    }

    async fn create_repository(&self, name: &str) -> Result<RemoteRepositoryDescriptor> {
        self.created.lock().unwrap().push(name.to_string());
        let actual = self.created_name.as_deref().unwrap_or(name);
        if self.create_without_ssh {
            Ok(RemoteRepositoryDescriptor::named(actual))
        } else {
            Ok(descriptor(actual))
        }
    }
}

// ── Prompter ───────────────────────────────────────────────────────────────

/// Replays scripted answers and records every prompt
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<PromptAnswer>>,
    asked: Mutex<Vec<Prompt>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<PromptAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// A prompter that must never be consulted
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    pub fn asked(&self) -> Vec<Prompt> {
        self.asked.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.asked.lock().unwrap().len()
    }
}

impl InteractionPrompter for ScriptedPrompter {
    fn ask(&self, prompt: &Prompt) -> Result<PromptAnswer> {
        self.asked.lock().unwrap().push(prompt.clone());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::interaction("no scripted answer left"))
    }
}

pub const RENAME: PromptAnswer = PromptAnswer::Choice(0);
pub const REUSE: PromptAnswer = PromptAnswer::Choice(1);
pub const EXIT: PromptAnswer = PromptAnswer::Choice(2);

pub fn text(value: &str) -> PromptAnswer {
    PromptAnswer::Text(value.to_string())
}

// ── Reporter ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(LogLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, level: LogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
