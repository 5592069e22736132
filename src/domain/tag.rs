use crate::domain::SemVersion;
use git2::Oid;
use std::fmt;

/// Raw tag reference as enumerated by a repository backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Short tag name (e.g., "v1.2.3")
    pub name: String,
    /// Commit the tag points at
    pub target: Oid,
}

impl TagRef {
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        TagRef {
            name: name.into(),
            target,
        }
    }
}

/// A tag whose name parsed as a semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverTag {
    pub version: SemVersion,
    pub commit: Oid,
}

impl SemverTag {
    /// Parse a raw reference; `None` when the name is not a semantic version
    pub fn from_ref(tag_ref: &TagRef) -> Option<Self> {
        SemVersion::from_tag_name(&tag_ref.name).map(|version| SemverTag {
            version,
            commit: tag_ref.target,
        })
    }

    /// Tag name exactly as stored in the repository
    pub fn name(&self) -> &str {
        self.version.original()
    }

    pub fn has_v_prefix(&self) -> bool {
        self.version.has_v_prefix()
    }

    /// Full 40-character hash of the tagged commit
    pub fn commit_hash(&self) -> String {
        self.commit.to_string()
    }
}

impl fmt::Display for SemverTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
