//! Git operations module
//!
//! Every operation goes through a [`CommandRunner`](gitinit_core::CommandRunner)
//! so the bootstrap flow can run against a fake in tests:
//! - Repository initialization
//! - Remote lookup and linkage
//! - Staging and the initial commit
//!
//! [`ProcessRunner`] is the runner backed by real processes.

mod commit;
mod init;
mod remote;
mod runner;

pub use commit::create_initial_commit;
pub use init::init_repository;
pub use remote::{add_remote, get_remote_url};
pub use runner::{run_checked, ProcessRunner};
