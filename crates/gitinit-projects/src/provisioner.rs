//! Remote repository provisioning

use gitinit_core::types::{RemoteRepositoryDescriptor, ResolutionOutcome};
use gitinit_core::{Error, RemoteRepoClient, Reporter, Result};
use tracing::debug;

/// A remote repository bound to the resolved name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    pub descriptor: RemoteRepositoryDescriptor,
    /// `true` when this run created the repository
    pub created: bool,
}

/// Create the repository for `UseName`, or hand back the `ReuseExisting` descriptor
///
/// # Errors
/// `Aborted` outcomes must be handled by the caller; passing one is a
/// `Conflict`. A created repository whose name differs from the requested one
/// is also a `Conflict`. Creation errors from the client are returned unchanged.
pub async fn provision(
    outcome: &ResolutionOutcome,
    remote: &dyn RemoteRepoClient,
    reporter: &dyn Reporter,
) -> Result<Provisioned> {
    match outcome {
        ResolutionOutcome::UseName(name) => {
            let descriptor = remote.create_repository(name).await?;
            if descriptor.name.is_empty() {
                return Err(Error::external_service(format!(
                    "create repository response for \"{}\" has no name",
                    name
                )));
            }
            if descriptor.name != *name {
                return Err(Error::conflict(format!(
                    "repository \"{}\" not found; the service created \"{}\" instead",
                    name, descriptor.name
                )));
            }

            reporter.done(&format!("Repository \"{}\" created", descriptor.name));
            Ok(Provisioned {
                descriptor,
                created: true,
            })
        }
        ResolutionOutcome::ReuseExisting(descriptor) => {
            debug!("Reusing existing repository: {}", descriptor.name);
            Ok(Provisioned {
                descriptor: descriptor.clone(),
                created: false,
            })
        }
        ResolutionOutcome::Aborted => Err(Error::conflict(
            "cannot provision a repository after name resolution was aborted",
        )),
    }
}
