//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};
use gitinit_core::types::BootstrapArguments;
use std::collections::{BTreeSet, HashSet};
use std::ffi::OsString;

/// gitinit - bootstrap a local project and its GitHub repository
#[derive(Parser, Debug)]
#[command(name = "gitinit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository name to use instead of the current directory's name
    #[arg(long = "repo-name", value_name = "NAME")]
    pub repo_name: Option<String>,

    /// Do not create the initial commit
    #[arg(long = "no-initial-commit")]
    pub no_initial_commit: bool,

    /// Directory holding config.yaml and .env (default: ~/.gitinit)
    #[arg(long, env = "GITINIT_CONFIG_DIR", value_name = "PATH")]
    pub config_dir: Option<Utf8PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Stray positional values; accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Unrecognized `--flags`, lowercased
    #[arg(skip)]
    pub extra_flags: BTreeSet<String>,
}

impl Cli {
    /// Parse the process arguments, setting aside unrecognized `--flags`
    pub fn parse_lenient() -> Self {
        let (argv, extra_flags) = split_unrecognized(std::env::args_os());
        let mut cli = Self::parse_from(argv);
        cli.extra_flags = extra_flags;
        cli
    }

    pub fn to_arguments(&self) -> BootstrapArguments {
        BootstrapArguments {
            repo_name: self.repo_name.clone(),
            skip_initial_commit: self.no_initial_commit,
        }
    }
}

/// Split `argv` into what clap should see and the set of unknown long flags
///
/// Long flag names are matched case-insensitively. Everything after a bare
/// `--` is passed through untouched.
pub fn split_unrecognized<I, T>(argv: I) -> (Vec<OsString>, BTreeSet<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let known: HashSet<String> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .map(str::to_string)
        .chain(["help".to_string(), "version".to_string()])
        .collect();

    let mut kept = Vec::new();
    let mut extra = BTreeSet::new();
    let mut passthrough = false;

    for arg in argv {
        let arg: OsString = arg.into();
        if passthrough {
            kept.push(arg);
            continue;
        }

        let Some(flag) = arg.to_str().and_then(|s| s.strip_prefix("--")) else {
            kept.push(arg);
            continue;
        };
        if flag.is_empty() {
            passthrough = true;
            kept.push(arg);
            continue;
        }

        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name.to_lowercase(), Some(value.to_string())),
            None => (flag.to_lowercase(), None),
        };
        if known.contains(&name) {
            let rebuilt = match value {
                Some(value) => format!("--{}={}", name, value),
                None => format!("--{}", name),
            };
            kept.push(rebuilt.into());
        } else {
            extra.insert(name);
        }
    }

    (kept, extra)
}
