use std::sync::Arc;

use tracing::debug;

use crate::registry::{self, Registry};
use crate::sailor::Sailor;

/// Merge-or-insert resolution against the shared sailor registry.
///
/// The whole scan-match-update/insert sequence runs as one transaction under
/// the registry lock, so two workers racing the same (name, sailno) pair can
/// never both insert. Cheap to clone per worker.
#[derive(Clone)]
pub struct IdentityResolver {
    sailors: Arc<Registry<Sailor>>,
}

impl IdentityResolver {
    pub fn new(sailors: Arc<Registry<Sailor>>) -> Self {
        Self { sailors }
    }

    /// Consumes the candidate. Returns the matching registry record updated
    /// in place, or the candidate itself, now inserted with the next
    /// sequential id.
    pub fn resolve(&self, candidate: Sailor) -> Sailor {
        self.sailors.with_lock(|records| {
            for existing in records.iter_mut() {
                if existing.matches(&candidate) {
                    existing.merge_from(&candidate);
                    debug!(id = existing.id, name = %existing.name, "merged candidate");
                    return existing.clone();
                }
            }
            let mut sailor = candidate;
            sailor.id = records.len() + 1;
            debug!(id = sailor.id, name = %sailor.name, "inserted new sailor");
            registry::reserve_for_push(records);
            records.push(sailor.clone());
            sailor
        })
    }
}
