//! Remote repository name resolution
//!
//! The candidate name is checked against a freshly fetched catalog. On a
//! collision the user picks one of three actions:
//!
//! ```text
//! CheckExists ──absent──▶ UseName
//!      ▲   │
//!      │   └─present──▶ PromptConflict ──reuse──▶ ReuseExisting
//!      │                     │  └───────exit───▶ Aborted
//!      └──────rename─────────┘
//! ```
//!
//! Renaming loops back to the check with no bound on the number of attempts.

use gitinit_core::types::{Prompt, PromptAnswer, ResolutionOutcome};
use gitinit_core::{Error, InteractionPrompter, RemoteRepoClient, Reporter, Result};
use tracing::debug;

/// Actions offered when the candidate name is taken, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConflictAction {
    Rename,
    Reuse,
    Exit,
}

impl ConflictAction {
    const ALL: [ConflictAction; 3] = [Self::Rename, Self::Reuse, Self::Exit];

    fn label(self) -> &'static str {
        match self {
            Self::Rename => "Create repository with new name",
            Self::Reuse => "Add \"remote\" with existing repository",
            Self::Exit => "Exit",
        }
    }
}

/// Resolve `candidate` to a [`ResolutionOutcome`]
///
/// # Errors
/// Catalog fetch failures are returned unchanged. Prompt failures and answers
/// that do not fit the question are `Interaction` errors.
pub async fn resolve_repo_name(
    candidate: impl Into<String>,
    remote: &dyn RemoteRepoClient,
    prompter: &dyn InteractionPrompter,
    reporter: &dyn Reporter,
) -> Result<ResolutionOutcome> {
    let mut candidate = candidate.into();

    loop {
        let catalog = remote.list_repositories().await?;
        debug!(
            "Checking \"{}\" against {} repositories",
            candidate,
            catalog.len()
        );

        let Some(existing) = catalog.find(&candidate) else {
            return Ok(ResolutionOutcome::UseName(candidate));
        };

        reporter.info(&format!("repository \"{}\" already exists", candidate));

        match ask_conflict_action(prompter)? {
            ConflictAction::Rename => {
                candidate = ask_new_name(prompter, reporter)?;
            }
            ConflictAction::Reuse => {
                return Ok(ResolutionOutcome::ReuseExisting(existing.clone()));
            }
            ConflictAction::Exit => return Ok(ResolutionOutcome::Aborted),
        }
    }
}

fn ask_conflict_action(prompter: &dyn InteractionPrompter) -> Result<ConflictAction> {
    let prompt = Prompt::Choice {
        message: "What do you want to do?".to_string(),
        options: ConflictAction::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect(),
    };

    match prompter.ask(&prompt)? {
        PromptAnswer::Choice(index) => ConflictAction::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::interaction(format!("no option at index {}", index))),
        PromptAnswer::Text(text) => Err(Error::interaction(format!(
            "expected a choice, got text \"{}\"",
            text
        ))),
    }
}

/// Ask for a replacement name until a non-blank one is given
fn ask_new_name(prompter: &dyn InteractionPrompter, reporter: &dyn Reporter) -> Result<String> {
    let prompt = Prompt::Text {
        message: "Enter new repository name:".to_string(),
    };

    loop {
        match prompter.ask(&prompt)? {
            PromptAnswer::Text(name) => {
                let name = name.trim();
                if !name.is_empty() {
                    return Ok(name.to_string());
                }
                reporter.warning("repository name cannot be empty");
            }
            PromptAnswer::Choice(index) => {
                return Err(Error::interaction(format!(
                    "expected a repository name, got choice {}",
                    index
                )));
            }
        }
    }
}
