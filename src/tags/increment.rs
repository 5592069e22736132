use crate::domain::{Component, SemVersion, SemverTag};
use crate::error::Result;
use crate::git::Repository;
use crate::tags::TagResolver;

/// Version an increment started from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Baseline {
    /// Highest semver tag found in the repository
    Existing(SemverTag),
    /// Synthetic `0.0.0` used when nothing has been tagged yet
    Initial(SemVersion),
}

impl Baseline {
    pub fn version(&self) -> &SemVersion {
        match self {
            Baseline::Existing(tag) => &tag.version,
            Baseline::Initial(version) => version,
        }
    }

    pub fn name(&self) -> &str {
        self.version().original()
    }
}

/// Outcome of a successful increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Increment {
    pub component: Component,
    pub previous: Baseline,
    pub created: SemverTag,
}

/// Computes the next version and writes it back as a tag at HEAD.
///
/// Always proceeds when invoked; refusing to tag an already released HEAD is
/// the caller's decision.
pub struct Incrementor<'r, R: Repository + ?Sized> {
    repo: &'r R,
    initial_v_prefix: bool,
}

impl<'r, R: Repository + ?Sized> Incrementor<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Incrementor {
            repo,
            initial_v_prefix: false,
        }
    }

    /// Prefix style for the first tag of a repository without semver tags
    pub fn with_initial_v_prefix(mut self, v_prefix: bool) -> Self {
        self.initial_v_prefix = v_prefix;
        self
    }

    /// Bump the requested component of the highest version and tag HEAD with it.
    ///
    /// The new tag mirrors the baseline's `v` prefix convention.
    ///
    /// # Returns
    /// * `Ok(Increment)` - Previous baseline and the created tag
    /// * `Err` - If HEAD cannot be resolved or the tag cannot be created
    pub fn increment(&self, component: Component) -> Result<Increment> {
        let previous = match TagResolver::new(self.repo).max() {
            Ok(tag) => Baseline::Existing(tag),
            Err(e) if e.is_not_found() => {
                Baseline::Initial(SemVersion::initial(self.initial_v_prefix))
            }
            Err(e) => return Err(e),
        };

        let next = previous.version().bump(component);

        let head = self.repo.head_oid()?;
        let tag_ref = self.repo.create_tag(next.original(), head)?;

        Ok(Increment {
            component,
            previous,
            created: SemverTag {
                version: next,
                commit: tag_ref.target,
            },
        })
    }
}
