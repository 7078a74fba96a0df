//! Transient local tag for the upcoming release

use tracing::{debug, instrument, warn};

use crate::repository::Result;
use crate::vcs::Vcs;

/// A local-only tag at HEAD that is removed again when dropped.
///
/// Range queries ending at the next release need the release tag to
/// exist before it is created for real. Holding a `PreTag` for the duration
/// of that work guarantees the tag is deleted on every exit path.
#[must_use = "the tag is deleted as soon as the guard is dropped"]
pub struct PreTag<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
    name: String,
}

impl<'a, V: Vcs + ?Sized> PreTag<'a, V> {
    /// Create `name` at HEAD
    #[instrument(skip(vcs))]
    pub fn acquire(vcs: &'a V, name: &str) -> Result<Self> {
        vcs.create_local_tag(name)?;
        debug!(tag = name, "created pre-tag");
        Ok(Self {
            vcs,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<V: Vcs + ?Sized> Drop for PreTag<'_, V> {
    fn drop(&mut self) {
        match self.vcs.delete_local_tag(&self.name) {
            Ok(()) => debug!(tag = %self.name, "removed pre-tag"),
            Err(e) => warn!(tag = %self.name, error = %e, "failed to remove pre-tag"),
        }
    }
}
